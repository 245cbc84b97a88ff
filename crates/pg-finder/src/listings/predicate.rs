//! Listing predicate evaluation.

use super::domain::{Availability, FilterCriteria, Listing};

/// Returns whether `listing` satisfies every constraint in `criteria`.
///
/// Rules short-circuit on the first failure:
/// - location: exact, case-sensitive equality when non-empty
/// - price: inclusive `min_price`/`max_price` bounds
/// - occupancy: case-insensitive token equality
/// - amenities: every required amenity must be present
/// - availability: `AvailableOnly` requires `is_available`
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if let Some(location) = criteria.location.as_deref() {
        if !location.is_empty() && listing.location != location {
            return false;
        }
    }

    if let Some(min_price) = criteria.min_price {
        if listing.rent < min_price {
            return false;
        }
    }

    if let Some(max_price) = criteria.max_price {
        if listing.rent > max_price {
            return false;
        }
    }

    if let Some(occupancy) = criteria.occupancy.as_deref() {
        if !occupancy.is_empty() && listing.occupancy.to_lowercase() != occupancy.to_lowercase() {
            return false;
        }
    }

    if !criteria
        .amenities
        .iter()
        .all(|amenity| listing.has_amenity(amenity))
    {
        return false;
    }

    if criteria.availability == Availability::AvailableOnly && !listing.is_available {
        return false;
    }

    true
}

/// Borrowing filter over a listing slice, preserving input order.
pub fn filter<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{ListingDetails, ListingId};
    use std::collections::BTreeSet;

    fn listing(id: u32, rent: u32, occupancy: &str, amenities: &[&str]) -> Listing {
        Listing {
            id: ListingId(id),
            name: format!("Listing {id}"),
            location: "Koramangala".to_string(),
            rent,
            occupancy: occupancy.to_string(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            is_available: true,
            rating: 4.0,
            created_at: 1_700_000_000_000,
            featured: false,
            details: ListingDetails::default(),
        }
    }

    fn amenity_set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn empty_criteria_is_the_identity_filter() {
        let listings = vec![
            listing(1, 9_000, "Single", &["WiFi"]),
            listing(2, 6_000, "Double", &[]),
        ];
        let criteria = FilterCriteria::default();

        assert!(listings.iter().all(|l| matches(l, &criteria)));
        assert_eq!(filter(&listings, &criteria).len(), 2);
    }

    #[test]
    fn occupancy_is_compared_case_insensitively() {
        let listings = vec![
            listing(1, 9_000, "Single", &[]),
            listing(2, 6_000, "Double", &[]),
        ];
        let criteria = FilterCriteria {
            occupancy: Some("single".to_string()),
            ..FilterCriteria::default()
        };

        let result = filter(&listings, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ListingId(1));
    }

    #[test]
    fn location_match_is_exact() {
        let l = listing(1, 9_000, "Single", &[]);
        let mut criteria = FilterCriteria {
            location: Some("koramangala".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!matches(&l, &criteria));

        criteria.location = Some("Koramangala ".to_string());
        assert!(!matches(&l, &criteria));

        criteria.location = Some("Koramangala".to_string());
        assert!(matches(&l, &criteria));

        criteria.location = Some(String::new());
        assert!(matches(&l, &criteria));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let l = listing(1, 8_500, "Single", &[]);
        let criteria = FilterCriteria {
            min_price: Some(8_500),
            max_price: Some(8_500),
            ..FilterCriteria::default()
        };
        assert!(matches(&l, &criteria));

        let above = FilterCriteria {
            min_price: Some(8_501),
            ..FilterCriteria::default()
        };
        assert!(!matches(&l, &above));

        let below = FilterCriteria {
            max_price: Some(8_499),
            ..FilterCriteria::default()
        };
        assert!(!matches(&l, &below));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let listings = vec![
            listing(1, 5_000, "Single", &[]),
            listing(2, 15_000, "Single", &[]),
        ];
        let criteria = FilterCriteria {
            min_price: Some(12_000),
            max_price: Some(6_000),
            ..FilterCriteria::default()
        };

        assert!(filter(&listings, &criteria).is_empty());
    }

    #[test]
    fn amenities_require_a_subset() {
        let l = listing(1, 9_000, "Single", &["WiFi", "AC", "Food"]);
        let cases: [(&[&str], bool); 5] = [
            (&[], true),
            (&["WiFi"], true),
            (&["WiFi", "AC"], true),
            (&["WiFi", "Gym"], false),
            (&["wifi"], false),
        ];

        for (required, expected) in cases {
            let criteria = FilterCriteria {
                amenities: amenity_set(required),
                ..FilterCriteria::default()
            };
            assert_eq!(
                matches(&l, &criteria),
                expected,
                "amenities {required:?} should match = {expected}"
            );
        }
    }

    #[test]
    fn partial_amenity_overlap_fails() {
        let l = listing(1, 9_000, "Single", &["WiFi"]);
        let criteria = FilterCriteria {
            amenities: amenity_set(&["WiFi", "AC"]),
            ..FilterCriteria::default()
        };

        assert!(!matches(&l, &criteria));
    }

    #[test]
    fn listing_without_amenities_fails_any_requirement() {
        let l = listing(1, 9_000, "Single", &[]);
        let criteria = FilterCriteria {
            amenities: amenity_set(&["Parking"]),
            ..FilterCriteria::default()
        };

        assert!(!matches(&l, &criteria));
    }

    #[test]
    fn available_only_excludes_occupied_listings() {
        let mut l = listing(1, 9_000, "Single", &[]);
        l.is_available = false;

        let any = FilterCriteria::default();
        let available = FilterCriteria {
            availability: Availability::AvailableOnly,
            ..FilterCriteria::default()
        };

        assert!(matches(&l, &any));
        assert!(!matches(&l, &available));
    }
}
