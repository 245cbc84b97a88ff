use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single rentable paying-guest property as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(default)]
    pub name: String,
    pub location: String,
    /// Monthly rent in whole rupees.
    pub rent: u32,
    pub occupancy: String,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub is_available: bool,
    pub rating: f32,
    /// Epoch milliseconds.
    pub created_at: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }
}

/// Presentation fields for the listing page. Filtering and sorting never read
/// them, and every field may be absent from a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDetails {
    pub description: String,
    pub review_count: u32,
    pub verified: bool,
    /// Room configurations offered, e.g. `Single`, `Double`.
    pub room_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord: Option<Landlord>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    pub name: String,
    /// Number of properties the landlord lists.
    #[serde(default)]
    pub properties: u32,
    #[serde(default)]
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_name: String,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comment: String,
}

/// Availability constraint selected in the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Any,
    AvailableOnly,
}

impl Availability {
    /// Maps the wire token; anything other than `available` imposes no constraint.
    pub fn from_token(value: &str) -> Self {
        match value {
            "available" => Self::AvailableOnly,
            _ => Self::Any,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::AvailableOnly => "available",
        }
    }
}

/// Active set of user-chosen filter constraints.
///
/// Every field is explicitly present or absent; `FilterCriteria::default()`
/// matches every listing. `min_price <= max_price` is not enforced here, an
/// inverted range simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub occupancy: Option<String>,
    pub amenities: BTreeSet<String>,
    pub availability: Availability,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow field-level merge. Amenities are replaced wholesale.
    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch {
            location,
            min_price,
            max_price,
            occupancy,
            amenities,
            availability,
        } = patch;

        if let Some(location) = location {
            self.location = location.filter(|value| !value.is_empty());
        }
        if let Some(min_price) = min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = max_price {
            self.max_price = max_price;
        }
        if let Some(occupancy) = occupancy {
            self.occupancy = occupancy.filter(|value| !value.is_empty());
        }
        if let Some(amenities) = amenities {
            self.amenities = amenities;
        }
        if let Some(availability) = availability {
            self.availability = availability;
        }
    }
}

/// Partial criteria update. `None` leaves a field untouched; `Some(None)`
/// clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub location: Option<Option<String>>,
    pub min_price: Option<Option<u32>>,
    pub max_price: Option<Option<u32>>,
    pub occupancy: Option<Option<String>>,
    pub amenities: Option<BTreeSet<String>>,
    pub availability: Option<Availability>,
}

impl FilterPatch {
    pub fn location(value: impl Into<String>) -> Self {
        Self {
            location: Some(Some(value.into())),
            ..Self::default()
        }
    }

    pub fn price_range(min: Option<u32>, max: Option<u32>) -> Self {
        Self {
            min_price: Some(min),
            max_price: Some(max),
            ..Self::default()
        }
    }

    pub fn occupancy(value: impl Into<String>) -> Self {
        Self {
            occupancy: Some(Some(value.into())),
            ..Self::default()
        }
    }

    pub fn amenities<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            amenities: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn availability(value: Availability) -> Self {
        Self {
            availability: Some(value),
            ..Self::default()
        }
    }
}

/// Listing order selected in the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Popularity,
}

impl SortKey {
    /// Unknown tokens fall back to `Newest`.
    pub fn from_token(value: &str) -> Self {
        match value {
            "price_low" => Self::PriceLow,
            "price_high" => Self::PriceHigh,
            "popularity" => Self::Popularity,
            _ => Self::Newest,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Popularity => "popularity",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Popularity => "Most popular",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Global price bounds used by the filter panel and as the fallback for
/// malformed price parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub floor: u32,
    pub ceiling: u32,
}

impl PriceBounds {
    pub const DEFAULT_FLOOR: u32 = 1_000;
    pub const DEFAULT_CEILING: u32 = 50_000;
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            floor: Self::DEFAULT_FLOOR,
            ceiling: Self::DEFAULT_CEILING,
        }
    }
}
