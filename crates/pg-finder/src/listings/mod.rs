//! Listing catalog, filtering, sorting, and query-string synchronization.

pub mod catalog;
pub mod domain;
pub mod predicate;
pub mod query;
pub mod saved;
pub mod sort;
pub mod store;
pub mod view;

pub use catalog::{Catalog, CatalogError, LocationSummary};
pub use domain::{
    Availability, FilterCriteria, FilterPatch, Landlord, Listing, ListingDetails, ListingId,
    PriceBounds, Review, SortKey,
};
pub use predicate::matches;
pub use query::{init_from_query, limit_from_query, to_query_string};
pub use saved::{
    JsonFileStorage, KeyValueStorage, MemoryStorage, SavedListings, StorageError,
    SAVED_LISTINGS_KEY,
};
pub use sort::sort;
pub use store::{FilterStateStore, MemoryNavigator, QueryNavigator};
pub use view::{derive, ListingView};
