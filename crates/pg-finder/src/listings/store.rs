//! Filter state store kept in sync with the routing layer's query string.
//!
//! The store only ever holds canonical state: every committed criteria/sort
//! pair is the parse of its own serialization. Writing the query string and
//! re-reading it is therefore a fixed point, so a navigator that echoes writes
//! back through `on_query_changed` cannot start an update cycle.

use tracing::debug;

use super::domain::{FilterCriteria, FilterPatch, PriceBounds, SortKey};
use super::query::{init_from_query, to_query_string};

/// Routing layer that owns the visible query string.
pub trait QueryNavigator {
    fn current_query(&self) -> String;
    fn replace_query(&mut self, query: &str);
}

/// Navigator backed by a string, recording every write. Used by the HTTP and
/// CLI surfaces where the query arrives once per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNavigator {
    current: String,
    writes: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            current: query.into(),
            writes: Vec::new(),
        }
    }

    /// Simulates back/forward navigation to `query`.
    pub fn navigate(&mut self, query: impl Into<String>) {
        self.current = query.into();
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl QueryNavigator for MemoryNavigator {
    fn current_query(&self) -> String {
        self.current.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.current = query.to_string();
        self.writes.push(query.to_string());
    }
}

/// Single source of truth for the active criteria and sort key.
#[derive(Debug)]
pub struct FilterStateStore<N> {
    navigator: N,
    bounds: PriceBounds,
    criteria: FilterCriteria,
    sort: SortKey,
    query: String,
    revision: u64,
}

impl<N: QueryNavigator> FilterStateStore<N> {
    /// Mounts the store, initializing state from the navigator's query.
    pub fn new(navigator: N, bounds: PriceBounds) -> Self {
        let (criteria, sort) = init_from_query(&navigator.current_query(), &bounds);
        let query = to_query_string(&criteria, sort);

        Self {
            navigator,
            bounds,
            criteria,
            sort,
            query,
            revision: 0,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Canonical query string for the current state.
    pub fn query_string(&self) -> &str {
        &self.query
    }

    /// Incremented on every published state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Merges a partial update and writes the resulting query string.
    /// Returns whether the state changed.
    pub fn set_filter(&mut self, patch: FilterPatch) -> bool {
        let mut criteria = self.criteria.clone();
        criteria.apply(patch);
        self.commit(criteria, self.sort)
    }

    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        self.commit(self.criteria.clone(), sort)
    }

    /// Resets to default criteria and `newest`, clearing the query string.
    pub fn clear(&mut self) -> bool {
        self.commit(FilterCriteria::default(), SortKey::Newest)
    }

    /// Reacts to a query string change originating outside the store.
    ///
    /// State is republished only if the parsed state differs. The navigator is
    /// never written from here.
    pub fn on_query_changed(&mut self, query: &str) -> bool {
        let (criteria, sort) = init_from_query(query, &self.bounds);
        if criteria == self.criteria && sort == self.sort {
            return false;
        }

        self.query = to_query_string(&criteria, sort);
        self.criteria = criteria;
        self.sort = sort;
        self.revision += 1;
        debug!(query = %self.query, revision = self.revision, "filters reloaded from navigation");
        true
    }

    /// Re-reads the navigator's current query.
    pub fn sync_from_navigator(&mut self) -> bool {
        let query = self.navigator.current_query();
        self.on_query_changed(&query)
    }

    fn commit(&mut self, criteria: FilterCriteria, sort: SortKey) -> bool {
        let query = to_query_string(&criteria, sort);
        let (criteria, sort) = init_from_query(&query, &self.bounds);
        if criteria == self.criteria && sort == self.sort {
            return false;
        }

        self.criteria = criteria;
        self.sort = sort;
        self.revision += 1;

        if query != self.query {
            self.navigator.replace_query(&query);
            debug!(query = %query, revision = self.revision, "filter query updated");
        }
        self.query = query;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::Availability;

    fn store(query: &str) -> FilterStateStore<MemoryNavigator> {
        FilterStateStore::new(MemoryNavigator::new(query), PriceBounds::default())
    }

    #[test]
    fn mount_parses_without_writing() {
        let store = store("?location=Whitefield&sort=popularity");

        assert_eq!(store.criteria().location.as_deref(), Some("Whitefield"));
        assert_eq!(store.sort_key(), SortKey::Popularity);
        assert_eq!(store.query_string(), "location=Whitefield&sort=popularity");
        assert!(store.navigator().writes().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn set_filter_writes_query_string() {
        let mut store = store("");

        assert!(store.set_filter(FilterPatch::location("Koramangala")));
        assert!(store.set_filter(FilterPatch::price_range(Some(5_000), Some(9_000))));

        assert_eq!(
            store.navigator().writes(),
            &[
                "location=Koramangala".to_string(),
                "location=Koramangala&minPrice=5000&maxPrice=9000".to_string(),
            ]
        );
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn redundant_updates_do_not_write() {
        let mut store = store("location=Koramangala");

        assert!(!store.set_filter(FilterPatch::location("Koramangala")));
        assert!(!store.set_sort(SortKey::Newest));
        assert!(store.navigator().writes().is_empty());
    }

    #[test]
    fn written_query_echoed_back_is_a_fixed_point() {
        let mut store = store("");
        store.set_filter(FilterPatch::amenities(["WiFi", "AC"]));
        store.set_filter(FilterPatch::availability(Availability::AvailableOnly));
        store.set_sort(SortKey::PriceLow);

        let writes = store.navigator().writes().len();
        let revision = store.revision();
        let echoed = store.navigator().current_query();

        assert!(!store.on_query_changed(&echoed));
        assert!(!store.sync_from_navigator());
        assert_eq!(store.navigator().writes().len(), writes);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn navigation_republishes_changed_state() {
        let mut store = store("location=Whitefield");
        store.navigator_mut().navigate("location=Indiranagar&roomType=single");

        assert!(store.sync_from_navigator());
        assert_eq!(store.criteria().location.as_deref(), Some("Indiranagar"));
        assert_eq!(store.criteria().occupancy.as_deref(), Some("single"));
        assert_eq!(store.revision(), 1);
        assert!(store.navigator().writes().is_empty());
    }

    #[test]
    fn occupancy_is_stored_in_canonical_case() {
        let mut store = store("");
        store.set_filter(FilterPatch::occupancy("Double"));

        assert_eq!(store.criteria().occupancy.as_deref(), Some("double"));
        assert_eq!(store.query_string(), "roomType=double");
        assert!(!store.on_query_changed("roomType=Double"));
    }

    #[test]
    fn clear_resets_state_and_query() {
        let mut store = store("location=Whitefield&amenities=Gym&sort=price_high");

        assert!(store.clear());
        assert!(store.criteria().is_empty());
        assert_eq!(store.sort_key(), SortKey::Newest);
        assert_eq!(store.query_string(), "");
        assert_eq!(store.navigator().writes(), &[String::new()]);

        assert!(!store.clear());
        assert_eq!(store.navigator().writes().len(), 1);
    }
}
