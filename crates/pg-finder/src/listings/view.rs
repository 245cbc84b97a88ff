use super::domain::{FilterCriteria, Listing, SortKey};
use super::predicate;
use super::sort;
use super::store::{FilterStateStore, QueryNavigator};

/// Filter, then sort, then truncate to `limit` when it is positive.
pub fn derive(
    listings: &[Listing],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    limit: Option<usize>,
) -> Vec<Listing> {
    let matching = predicate::filter(listings, criteria);
    let ordered = sort::sort_refs(matching, sort_key);

    let take = match limit {
        Some(limit) if limit > 0 => limit,
        _ => ordered.len(),
    };

    ordered.into_iter().take(take).cloned().collect()
}

/// Cached derivation over a catalog snapshot, recomputed only when the
/// catalog or the filter store has moved on since the last refresh.
#[derive(Debug, Clone)]
pub struct ListingView {
    catalog: Vec<Listing>,
    catalog_revision: u64,
    limit: Option<usize>,
    derived: Vec<Listing>,
    computed_for: Option<(u64, u64)>,
}

impl ListingView {
    pub fn new(catalog: Vec<Listing>, limit: Option<usize>) -> Self {
        Self {
            catalog,
            catalog_revision: 0,
            limit,
            derived: Vec::new(),
            computed_for: None,
        }
    }

    /// Swaps in a new catalog snapshot; the next refresh recomputes.
    pub fn replace_catalog(&mut self, catalog: Vec<Listing>) {
        self.catalog = catalog;
        self.catalog_revision += 1;
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        if self.limit != limit {
            self.limit = limit;
            self.computed_for = None;
        }
    }

    pub fn is_stale<N: QueryNavigator>(&self, store: &FilterStateStore<N>) -> bool {
        self.computed_for != Some((self.catalog_revision, store.revision()))
    }

    /// Recomputes if stale and returns whether a recomputation happened.
    pub fn refresh<N: QueryNavigator>(&mut self, store: &FilterStateStore<N>) -> bool {
        if !self.is_stale(store) {
            return false;
        }

        self.derived = derive(
            &self.catalog,
            store.criteria(),
            store.sort_key(),
            self.limit,
        );
        self.computed_for = Some((self.catalog_revision, store.revision()));
        true
    }

    pub fn items(&self) -> &[Listing] {
        &self.derived
    }

    pub fn count(&self) -> usize {
        self.derived.len()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{FilterPatch, ListingDetails, ListingId, PriceBounds};
    use crate::listings::store::MemoryNavigator;

    fn listing(id: u32, rent: u32, occupancy: &str, created_at: i64) -> Listing {
        Listing {
            id: ListingId(id),
            name: String::new(),
            location: "Marathahalli".to_string(),
            rent,
            occupancy: occupancy.to_string(),
            amenities: Default::default(),
            is_available: true,
            rating: 4.5,
            created_at,
            featured: false,
            details: ListingDetails::default(),
        }
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing(1, 9_000, "Single", 10),
            listing(2, 6_000, "Double", 20),
            listing(3, 7_500, "Single", 30),
            listing(4, 11_000, "Triple", 40),
            listing(5, 8_000, "Single", 50),
        ]
    }

    fn ids(listings: &[Listing]) -> Vec<u32> {
        listings.iter().map(|l| l.id.0).collect()
    }

    #[test]
    fn empty_catalog_derives_empty() {
        assert!(derive(&[], &FilterCriteria::default(), SortKey::Newest, None).is_empty());
    }

    #[test]
    fn filters_before_sorting() {
        let criteria = FilterCriteria {
            occupancy: Some("single".to_string()),
            ..FilterCriteria::default()
        };

        let result = derive(&catalog(), &criteria, SortKey::PriceLow, None);
        assert_eq!(ids(&result), vec![3, 5, 1]);
    }

    #[test]
    fn limit_takes_the_head_of_the_full_result() {
        let full = derive(&catalog(), &FilterCriteria::default(), SortKey::PriceHigh, None);
        let limited = derive(
            &catalog(),
            &FilterCriteria::default(),
            SortKey::PriceHigh,
            Some(3),
        );

        assert_eq!(limited.len(), 3);
        assert_eq!(limited, full[..3].to_vec());
        assert_eq!(
            derive(&catalog(), &FilterCriteria::default(), SortKey::Newest, Some(0)).len(),
            5
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let criteria = FilterCriteria::default();
        let first = derive(&catalog(), &criteria, SortKey::Popularity, None);
        let second = derive(&catalog(), &criteria, SortKey::Popularity, None);
        assert_eq!(first, second);
    }

    #[test]
    fn view_recomputes_only_when_inputs_change() {
        let mut store = FilterStateStore::new(MemoryNavigator::default(), PriceBounds::default());
        let mut view = ListingView::new(catalog(), Some(2));

        assert!(view.refresh(&store));
        assert_eq!(ids(view.items()), vec![5, 4]);
        assert!(!view.refresh(&store));

        store.set_filter(FilterPatch::occupancy("single"));
        assert!(view.is_stale(&store));
        assert!(view.refresh(&store));
        assert_eq!(ids(view.items()), vec![5, 3]);

        view.replace_catalog(vec![listing(9, 5_000, "single", 99)]);
        assert!(view.refresh(&store));
        assert_eq!(view.count(), 1);
    }
}
