//! Property listing model matching the frontend Property interface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Grouping used when listing amenities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Essentials,
    Features,
    Location,
    Safety,
    Internet,
    Kitchen,
    Bedroom,
    Bathroom,
    Entertainment,
    Accessibility,
}

/// A named feature tag attached to a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: AmenityCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Rate override for an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRate {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<u32>,
}

impl SeasonalRate {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub base_rate: f64,
    pub currency: String,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub taxes: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasonal_rates: Vec<SeasonalRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_stay: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capacity {
    pub guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub beds: u32,
}

/// One generated calendar entry; not reconciled against bookings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_superhost: bool,
    pub response_rate: u8,
    pub response_time: String,
    pub joined_date: NaiveDate,
    pub languages: Vec<String>,
}

/// A rental listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub images: Vec<PropertyImage>,
    pub amenities: Vec<Amenity>,
    pub pricing: Pricing,
    pub capacity: Capacity,
    pub availability: Vec<Availability>,
    pub rating: f64,
    pub review_count: u32,
    pub host: Host,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// The image flagged primary, falling back to the first one.
    pub fn primary_image(&self) -> Option<&PropertyImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }

    pub fn has_amenity(&self, amenity_id: &str) -> bool {
        self.amenities.iter().any(|a| a.id == amenity_id)
    }

    pub fn availability_on(&self, date: NaiveDate) -> Option<&Availability> {
        self.availability.iter().find(|a| a.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonal_rate_range_is_inclusive() {
        let rate = SeasonalRate {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            rate: 9900.0,
            minimum_stay: Some(3),
        };

        assert!(rate.covers(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(rate.covers(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()));
        assert!(!rate.covers(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
    }

    #[test]
    fn test_amenity_category_wire_names() {
        let json = serde_json::to_string(&AmenityCategory::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
    }
}
