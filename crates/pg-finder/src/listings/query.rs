//! Conversion between filter state and the URL query string.
//!
//! `init_from_query` and `to_query_string` are inverse transforms for any
//! criteria produced by normal interaction: omitted fields parse back to their
//! defaults, so re-serializing a parsed query yields the same canonical string.

use std::collections::BTreeSet;

use url::form_urlencoded;

use super::domain::{Availability, FilterCriteria, PriceBounds, SortKey};

pub const LOCATION_PARAM: &str = "location";
pub const ROOM_TYPE_PARAM: &str = "roomType";
pub const MIN_PRICE_PARAM: &str = "minPrice";
pub const MAX_PRICE_PARAM: &str = "maxPrice";
pub const AMENITIES_PARAM: &str = "amenities";
pub const AVAILABILITY_PARAM: &str = "availability";
pub const SORT_PARAM: &str = "sort";
pub const LIMIT_PARAM: &str = "limit";

/// Parse a query string (with or without the leading `?`) into criteria and
/// a sort key.
///
/// Unrecognized keys are ignored. For single-valued keys the first occurrence
/// wins. A non-numeric `minPrice`/`maxPrice` falls back to the configured
/// floor/ceiling instead of failing.
pub fn init_from_query(query: &str, bounds: &PriceBounds) -> (FilterCriteria, SortKey) {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut location = None;
    let mut occupancy = None;
    let mut min_price = None;
    let mut max_price = None;
    let mut amenities = BTreeSet::new();
    let mut availability = None;
    let mut sort = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }

        match &*key {
            LOCATION_PARAM if location.is_none() => location = Some(value.into_owned()),
            ROOM_TYPE_PARAM if occupancy.is_none() => occupancy = Some(value.to_lowercase()),
            MIN_PRICE_PARAM if min_price.is_none() => {
                min_price = Some(parse_price(&value, bounds.floor))
            }
            MAX_PRICE_PARAM if max_price.is_none() => {
                max_price = Some(parse_price(&value, bounds.ceiling))
            }
            AMENITIES_PARAM => {
                amenities.insert(value.into_owned());
            }
            AVAILABILITY_PARAM if availability.is_none() => {
                availability = Some(Availability::from_token(&value))
            }
            SORT_PARAM if sort.is_none() => sort = Some(SortKey::from_token(&value)),
            _ => {}
        }
    }

    let criteria = FilterCriteria {
        location,
        min_price,
        max_price,
        occupancy,
        amenities,
        availability: availability.unwrap_or_default(),
    };

    (criteria, sort.unwrap_or_default())
}

/// Reads the page-size `limit` from a query string. Absent, empty, or
/// non-numeric values yield `None` (no limit) rather than an error.
pub fn limit_from_query(query: &str) -> Option<usize> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == LIMIT_PARAM)
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
}

fn parse_price(raw: &str, fallback: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(fallback)
}

/// Serialize criteria and sort key, emitting only non-empty, non-default
/// fields in a fixed key order.
pub fn to_query_string(criteria: &FilterCriteria, sort: SortKey) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(location) = non_empty(criteria.location.as_deref()) {
        serializer.append_pair(LOCATION_PARAM, location);
    }
    if let Some(occupancy) = non_empty(criteria.occupancy.as_deref()) {
        serializer.append_pair(ROOM_TYPE_PARAM, &occupancy.to_lowercase());
    }
    if let Some(min_price) = criteria.min_price {
        serializer.append_pair(MIN_PRICE_PARAM, &min_price.to_string());
    }
    if let Some(max_price) = criteria.max_price {
        serializer.append_pair(MAX_PRICE_PARAM, &max_price.to_string());
    }
    for amenity in criteria.amenities.iter().filter(|a| !a.is_empty()) {
        serializer.append_pair(AMENITIES_PARAM, amenity);
    }
    if criteria.availability != Availability::Any {
        serializer.append_pair(AVAILABILITY_PARAM, criteria.availability.token());
    }
    if sort != SortKey::Newest {
        serializer.append_pair(SORT_PARAM, sort.token());
    }

    serializer.finish()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
