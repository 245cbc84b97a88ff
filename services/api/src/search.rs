use crate::infra::{load_catalog, open_storage, parse_listing_id};
use chrono::DateTime;
use clap::{Args, Subcommand};
use pg_finder::config::AppConfig;
use pg_finder::error::AppError;
use pg_finder::listings::{
    derive, Catalog, FilterStateStore, Listing, ListingId, MemoryNavigator, SavedListings,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Listing query string, e.g. "location=Koramangala%2C+Bangalore&sort=price_low"
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Show at most this many listings (0 for all)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// JSON or CSV catalog to search instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum SavedCommand {
    /// Save a listing, or unsave it if it is already saved
    Toggle {
        #[arg(value_parser = parse_listing_id)]
        listing_id: u32,
    },
    /// List saved listings
    List,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        query,
        limit,
        catalog,
    } = args;

    let mut config = AppConfig::load()?;
    if catalog.is_some() {
        config.catalog.catalog_path = catalog;
    }

    let catalog = load_catalog(&config.catalog)?;
    let store = FilterStateStore::new(
        MemoryNavigator::new(query.unwrap_or_default()),
        config.catalog.price_bounds,
    );
    let listings = derive(catalog.listings(), store.criteria(), store.sort_key(), limit);

    println!("PG Finder search");
    if store.query_string().is_empty() {
        println!("Filters: none");
    } else {
        println!("Filters: {}", store.query_string());
    }
    println!("Sort: {}", store.sort_key().label());
    println!("Showing {} of {} listings", listings.len(), catalog.len());

    if listings.is_empty() {
        println!("\nNo listings match these filters. Clear some filters to see more results.");
        return Ok(());
    }

    for (index, listing) in listings.iter().enumerate() {
        render_listing(index + 1, listing);
    }

    Ok(())
}

pub(crate) fn run_saved(command: SavedCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.catalog)?;
    let saved = SavedListings::new(open_storage(&config.catalog));

    match command {
        SavedCommand::Toggle { listing_id } => {
            let id = ListingId(listing_id);
            let listing = catalog.get(id).ok_or(AppError::ListingNotFound(id))?;
            if saved.toggle(id)? {
                println!("Saved {} ({})", listing.name, id);
            } else {
                println!("Removed {} ({}) from saved listings", listing.name, id);
            }
            if config.catalog.saved_path.is_none() {
                println!("Note: APP_SAVED_PATH is unset, saved listings are not persisted.");
            }
            Ok(())
        }
        SavedCommand::List => {
            render_saved(&catalog, &saved.details(&catalog)?);
            Ok(())
        }
    }
}

fn render_saved(catalog: &Catalog, listings: &[Listing]) {
    println!("Saved listings ({} of {})", listings.len(), catalog.len());
    if listings.is_empty() {
        println!("  none yet - use `saved toggle <id>` to save one");
    }
    for (index, listing) in listings.iter().enumerate() {
        render_listing(index + 1, listing);
    }
}

fn render_listing(position: usize, listing: &Listing) {
    let listed_on = DateTime::from_timestamp_millis(listing.created_at)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let availability = if listing.is_available {
        "available"
    } else {
        "occupied"
    };

    println!(
        "\n{}. {} [#{}] - Rs {}/month",
        position, listing.name, listing.id, listing.rent
    );
    println!(
        "   {} | {} | {} | rating {:.1} | listed {}",
        listing.location, listing.occupancy, availability, listing.rating, listed_on
    );
    if !listing.amenities.is_empty() {
        let amenities: Vec<&str> = listing.amenities.iter().map(String::as_str).collect();
        println!("   Amenities: {}", amenities.join(", "));
    }
}
