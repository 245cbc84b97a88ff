use metrics_exporter_prometheus::PrometheusHandle;
use pg_finder::config::CatalogConfig;
use pg_finder::error::AppError;
use pg_finder::listings::{
    Catalog, JsonFileStorage, KeyValueStorage, MemoryStorage, PriceBounds, SavedListings,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog, saved listings, and price bounds shared by every request.
pub(crate) struct ListingService {
    pub(crate) catalog: Catalog,
    pub(crate) saved: SavedListings<dyn KeyValueStorage>,
    pub(crate) bounds: PriceBounds,
}

impl ListingService {
    pub(crate) fn new(
        catalog: Catalog,
        storage: Arc<dyn KeyValueStorage>,
        bounds: PriceBounds,
    ) -> Self {
        Self {
            catalog,
            saved: SavedListings::new(storage),
            bounds,
        }
    }

    pub(crate) fn from_config(config: &CatalogConfig) -> Result<Self, AppError> {
        let catalog = load_catalog(config)?;
        Ok(Self::new(catalog, open_storage(config), config.price_bounds))
    }
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => Ok(Catalog::from_path(path)?),
        None => {
            let catalog = Catalog::seeded();
            info!(listings = catalog.len(), "using seeded listing catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn open_storage(config: &CatalogConfig) -> Arc<dyn KeyValueStorage> {
    match &config.saved_path {
        Some(path) => Arc::new(JsonFileStorage::new(path)),
        None => Arc::new(MemoryStorage::default()),
    }
}

pub(crate) fn parse_listing_id(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|err| format!("failed to parse '{raw}' as a listing id ({err})"))
}
