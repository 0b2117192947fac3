//! Listing query, filter and pagination models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Default page size for property listings.
pub const DEFAULT_PAGE_LIMIT: usize = 12;

/// Maximum page size for property listings.
pub const MAX_PAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    #[default]
    Rating,
    Newest,
}

impl SortBy {
    /// Direction used when the caller does not pick one.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortBy::Price => SortOrder::Asc,
            SortBy::Rating | SortBy::Newest => SortOrder::Desc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::Rating => "rating",
            SortBy::Newest => "newest",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Predicates applied to the catalog; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    pub location: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub price_range: PriceRange,
    pub amenities: Vec<String>,
}

/// Query string accepted by the listing page and `GET /api/properties`.
///
/// Blank values, as submitted by an untouched search form, are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub guests: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub amenities: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_by: Option<SortBy>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<usize>,
}

impl PropertyQuery {
    pub fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            location: self.location.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            price_range: PriceRange {
                min: self.min_price,
                max: self.max_price,
            },
            amenities: self
                .amenities
                .as_deref()
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by.unwrap_or_default()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or_else(|| self.sort_by().default_order())
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Deserialize an optional value, mapping a missing or blank string to `None`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortBy::Price),
            "rating" => Ok(SortBy::Rating),
            "newest" => Ok(SortBy::Newest),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_values_are_ignored() {
        let query: PropertyQuery = serde_json::from_str(
            r#"{"location":"","guests":"  ","checkIn":"","sortBy":""}"#,
        )
        .unwrap();

        assert!(query.location.is_none());
        assert!(query.guests.is_none());
        assert!(query.check_in.is_none());
        assert_eq!(query.sort_by(), SortBy::Rating);
        assert_eq!(query.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn test_query_to_filters() {
        let query: PropertyQuery = serde_json::from_str(
            r#"{"location":"Aspen","guests":"4","minPrice":"1000","amenities":"wifi, pool,,"}"#,
        )
        .unwrap();
        let filters = query.filters();

        assert_eq!(filters.location.as_deref(), Some("Aspen"));
        assert_eq!(filters.guests, Some(4));
        assert_eq!(filters.price_range.min, Some(1000.0));
        assert_eq!(filters.price_range.max, None);
        assert_eq!(filters.amenities, vec!["wifi", "pool"]);
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let result = serde_json::from_str::<PropertyQuery>(r#"{"sortBy":"cheapest"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_default_order_is_ascending() {
        assert_eq!(SortBy::Price.default_order(), SortOrder::Asc);
        assert_eq!(SortBy::Newest.default_order(), SortOrder::Desc);
    }

    #[test]
    fn test_price_range_bounds() {
        let range = PriceRange {
            min: Some(5000.0),
            max: Some(8100.0),
        };
        assert!(range.contains(5040.0));
        assert!(range.contains(8100.0));
        assert!(!range.contains(4999.0));
        assert!(PriceRange::default().contains(0.0));
    }
}
