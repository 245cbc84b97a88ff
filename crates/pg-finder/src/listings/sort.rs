//! Sort comparison logic
//!
//! Pure comparator selection by sort key. All orderings are stable so ties
//! keep their relative input order.

use std::cmp::Ordering;

use super::domain::{Listing, SortKey};

/// Compare two listings according to the given sort key.
pub fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceLow => a.rent.cmp(&b.rent),
        SortKey::PriceHigh => b.rent.cmp(&a.rent),
        SortKey::Popularity => b.rating.total_cmp(&a.rating),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
    }
}

/// Returns a freshly ordered copy of `listings`; the input is untouched.
pub fn sort(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

/// Orders borrowed listings in place of copying them.
pub fn sort_refs<'a>(mut listings: Vec<&'a Listing>, key: SortKey) -> Vec<&'a Listing> {
    listings.sort_by(|a, b| compare(a, b, key));
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{ListingDetails, ListingId};

    fn listing(id: u32, rent: u32, rating: f32, created_at: i64) -> Listing {
        Listing {
            id: ListingId(id),
            name: String::new(),
            location: "HSR Layout".to_string(),
            rent,
            occupancy: "double".to_string(),
            amenities: Default::default(),
            is_available: true,
            rating,
            created_at,
            featured: false,
            details: ListingDetails::default(),
        }
    }

    fn ids(listings: &[Listing]) -> Vec<u32> {
        listings.iter().map(|l| l.id.0).collect()
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing(1, 9_000, 4.2, 300),
            listing(2, 6_000, 4.8, 100),
            listing(3, 12_000, 3.9, 200),
        ]
    }

    #[test]
    fn price_low_orders_by_ascending_rent() {
        assert_eq!(ids(&sort(&sample(), SortKey::PriceLow)), vec![2, 1, 3]);
    }

    #[test]
    fn price_high_orders_by_descending_rent() {
        assert_eq!(ids(&sort(&sample(), SortKey::PriceHigh)), vec![3, 1, 2]);
    }

    #[test]
    fn popularity_orders_by_descending_rating() {
        assert_eq!(ids(&sort(&sample(), SortKey::Popularity)), vec![2, 1, 3]);
    }

    #[test]
    fn newest_orders_by_descending_creation() {
        assert_eq!(ids(&sort(&sample(), SortKey::Newest)), vec![1, 3, 2]);
        assert_eq!(
            ids(&sort(&sample(), SortKey::from_token("bogus"))),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn equal_rents_keep_input_order() {
        let listings = vec![
            listing(5, 7_000, 4.0, 1),
            listing(3, 6_000, 4.0, 2),
            listing(9, 7_000, 4.0, 3),
            listing(1, 7_000, 4.0, 4),
        ];

        assert_eq!(ids(&sort(&listings, SortKey::PriceLow)), vec![3, 5, 9, 1]);
        assert_eq!(ids(&sort(&listings, SortKey::PriceHigh)), vec![5, 9, 1, 3]);
    }

    #[test]
    fn sorting_never_drops_or_duplicates() {
        let listings = sample();
        for key in [
            SortKey::Newest,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Popularity,
        ] {
            let mut sorted = ids(&sort(&listings, key));
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3], "key {key}");
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let listings = sample();
        let _ = sort(&listings, SortKey::PriceLow);
        assert_eq!(ids(&listings), vec![1, 2, 3]);
    }
}
