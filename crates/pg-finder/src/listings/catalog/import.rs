use std::io::Read;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use super::CatalogError;
use crate::listings::domain::{Listing, ListingDetails, ListingId};

/// Reads listings from a CSV export with the header
/// `id,name,location,rent,occupancy,amenities,available,rating,created_at,featured`.
///
/// Amenities are `;`-separated. `created_at` accepts epoch milliseconds,
/// RFC 3339 timestamps, or `YYYY-MM-DD` dates.
pub(super) fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
        let row = record?;
        let line = index as u64 + 2;
        listings.push(row.into_listing(line)?);
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: u32,
    #[serde(default)]
    name: String,
    location: String,
    rent: u32,
    occupancy: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    amenities: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    available: Option<String>,
    rating: f32,
    created_at: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    featured: Option<String>,
}

impl ListingRow {
    fn into_listing(self, line: u64) -> Result<Listing, CatalogError> {
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| {
            CatalogError::InvalidRow {
                line,
                reason: format!("unrecognized created_at '{}'", self.created_at),
            }
        })?;

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::InvalidRow {
                line,
                reason: format!("rating {} outside 0-5", self.rating),
            });
        }

        let is_available = parse_flag(self.available.as_deref(), true, line, "available")?;
        let featured = parse_flag(self.featured.as_deref(), false, line, "featured")?;

        let amenities = self
            .amenities
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|amenity| !amenity.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Listing {
            id: ListingId(self.id),
            name: self.name,
            location: self.location,
            rent: self.rent,
            occupancy: self.occupancy,
            amenities,
            is_available,
            rating: self.rating,
            created_at,
            featured,
            details: ListingDetails::default(),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(
    value: Option<&str>,
    default: bool,
    line: u64,
    column: &str,
) -> Result<bool, CatalogError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(CatalogError::InvalidRow {
            line,
            reason: format!("{column} must be yes/no, got '{other}'"),
        }),
    }
}

fn parse_timestamp(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(millis) = trimmed.parse::<i64>() {
        return Some(millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }

    None
}
