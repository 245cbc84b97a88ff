mod import;
mod seed;

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::domain::{Listing, ListingId};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
    InvalidListing { id: ListingId, reason: String },
    DuplicateId(ListingId),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read listing catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid listing JSON: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            CatalogError::InvalidRow { line, reason } => {
                write!(f, "invalid listing on line {}: {}", line, reason)
            }
            CatalogError::InvalidListing { id, reason } => {
                write!(f, "invalid listing {}: {}", id, reason)
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate listing id {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::InvalidRow { .. }
            | CatalogError::InvalidListing { .. }
            | CatalogError::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Listing count per distinct location, for the popular-locations panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub name: String,
    pub listing_count: usize,
}

/// Immutable working set of listings with unique identifiers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Rejects duplicate ids, zero rent, and ratings outside 0 to 5.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            validate(listing)?;
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
        }
        Ok(Self { listings })
    }

    /// Built-in Bangalore listings used when no catalog file is configured.
    pub fn seeded() -> Self {
        Self {
            listings: seed::listings(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Self::new(listings)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(import::parse_listings(reader)?)
    }

    /// Loads a `.csv` file as CSV and anything else as a JSON array.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let catalog = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(file)?
        };

        info!(path = %path.display(), listings = catalog.len(), "listing catalog loaded");
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn featured(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|listing| listing.featured).collect()
    }

    pub fn by_location(&self, location: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.location == location)
            .collect()
    }

    /// Other listings sharing the location or the occupancy of `id`, best
    /// rated first. Empty when `id` is unknown.
    pub fn similar(&self, id: ListingId, limit: usize) -> Vec<&Listing> {
        let Some(anchor) = self.get(id) else {
            return Vec::new();
        };

        let mut similar: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|candidate| candidate.id != anchor.id)
            .filter(|candidate| {
                candidate.location == anchor.location
                    || candidate.occupancy.eq_ignore_ascii_case(&anchor.occupancy)
            })
            .collect();

        similar.sort_by(|a, b| match b.rating.total_cmp(&a.rating) {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        });
        similar.truncate(limit);
        similar
    }

    /// Distinct locations, most listings first, then alphabetical.
    pub fn locations(&self) -> Vec<LocationSummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for listing in &self.listings {
            *counts.entry(listing.location.as_str()).or_default() += 1;
        }

        let mut summaries: Vec<LocationSummary> = counts
            .into_iter()
            .map(|(name, listing_count)| LocationSummary {
                name: name.to_string(),
                listing_count,
            })
            .collect();
        summaries.sort_by(|a, b| b.listing_count.cmp(&a.listing_count));
        summaries
    }

    pub fn amenities(&self) -> BTreeSet<&str> {
        self.listings
            .iter()
            .flat_map(|listing| listing.amenities.iter().map(String::as_str))
            .collect()
    }
}

fn validate(listing: &Listing) -> Result<(), CatalogError> {
    let reason = if listing.rent == 0 {
        "rent must be positive".to_string()
    } else if !(0.0..=5.0).contains(&listing.rating) {
        format!("rating {} is outside 0 to 5", listing.rating)
    } else {
        return Ok(());
    };

    Err(CatalogError::InvalidListing {
        id: listing.id,
        reason,
    })
}
