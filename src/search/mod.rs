//! Catalog search: filtering, sorting and pagination.
//!
//! Everything runs over the in-memory listing slice; there is no index.

use std::cmp::Ordering;

use crate::models::{
    PaginatedResponse, Property, PropertyFilters, SortBy, SortOrder, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};

/// Keep the properties matching every filter, preserving catalog order.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    filters: &PropertyFilters,
) -> Vec<&'a Property> {
    let location = filters
        .location
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    properties
        .iter()
        .filter(|p| location.as_deref().map_or(true, |term| matches_location(p, term)))
        .filter(|p| filters.guests.map_or(true, |guests| p.capacity.guests >= guests))
        .filter(|p| filters.price_range.contains(p.pricing.base_rate))
        .filter(|p| filters.amenities.iter().all(|id| p.has_amenity(id)))
        .filter(|p| stay_is_open(p, filters))
        .collect()
}

/// Case-insensitive substring match; `term` must already be lowercase.
fn matches_location(property: &Property, term: &str) -> bool {
    [
        &property.location.city,
        &property.location.state,
        &property.location.country,
        &property.title,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Every generated entry inside `[check_in, check_out)` must be available.
/// Nights outside the generated window do not exclude a property.
fn stay_is_open(property: &Property, filters: &PropertyFilters) -> bool {
    let (Some(check_in), Some(check_out)) = (filters.check_in, filters.check_out) else {
        return true;
    };

    property
        .availability
        .iter()
        .filter(|entry| entry.date >= check_in && entry.date < check_out)
        .all(|entry| entry.available)
}

fn compare(a: &Property, b: &Property, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Price => a.pricing.base_rate.total_cmp(&b.pricing.base_rate),
        SortBy::Rating => a.rating.total_cmp(&b.rating),
        SortBy::Newest => a.created_at.cmp(&b.created_at),
    }
}

/// Stable sort; ties keep their incoming order.
pub fn sort_properties(properties: &mut [&Property], sort_by: SortBy, order: SortOrder) {
    properties.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Slice out a 1-based page. Zero or missing values fall back to the defaults.
pub fn paginate<T: Clone>(
    items: &[T],
    page: Option<usize>,
    limit: Option<usize>,
) -> PaginatedResponse<T> {
    let limit = limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .min(MAX_PAGE_LIMIT);
    let page = page.filter(|p| *p > 0).unwrap_or(1);
    let total = items.len();

    let data = items
        .iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    PaginatedResponse {
        data,
        total,
        page,
        limit,
        total_pages: total.div_ceil(limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_catalog;
    use crate::models::PriceRange;
    use chrono::{DateTime, NaiveDate, Utc};

    fn ids(properties: &[&Property]) -> Vec<String> {
        properties.iter().map(|p| p.id.clone()).collect()
    }

    fn location(term: &str) -> PropertyFilters {
        PropertyFilters {
            location: Some(term.to_string()),
            ..PropertyFilters::default()
        }
    }

    #[test]
    fn test_location_filter_is_case_insensitive() {
        let catalog = test_catalog();
        let all = catalog.get_all_properties();

        assert_eq!(ids(&filter_properties(all, &location("MALIBU"))), vec!["beachfront-villa"]);
        assert_eq!(ids(&filter_properties(all, &location("colo"))), vec!["mountain-cabin"]);
        assert_eq!(ids(&filter_properties(all, &location("hot tub"))), vec!["mountain-cabin"]);
        assert_eq!(filter_properties(all, &location("united states")).len(), 2);
        assert!(filter_properties(all, &location("Cape Town")).is_empty());
        assert_eq!(filter_properties(all, &location("   ")).len(), 2);
    }

    #[test]
    fn test_guest_filter_excludes_small_properties() {
        let catalog = test_catalog();
        let all = catalog.get_all_properties();
        let guests = |n| PropertyFilters {
            guests: Some(n),
            ..PropertyFilters::default()
        };

        assert_eq!(filter_properties(all, &guests(6)).len(), 2);
        assert_eq!(ids(&filter_properties(all, &guests(7))), vec!["beachfront-villa"]);
        assert!(filter_properties(all, &guests(9)).is_empty());
    }

    #[test]
    fn test_price_and_amenity_filters() {
        let catalog = test_catalog();
        let all = catalog.get_all_properties();

        let cheap = PropertyFilters {
            price_range: PriceRange {
                min: None,
                max: Some(6000.0),
            },
            ..PropertyFilters::default()
        };
        assert_eq!(ids(&filter_properties(all, &cheap)), vec!["mountain-cabin"]);

        let pool_and_wifi = PropertyFilters {
            amenities: vec!["pool".to_string(), "wifi".to_string()],
            ..PropertyFilters::default()
        };
        assert_eq!(ids(&filter_properties(all, &pool_and_wifi)), vec!["beachfront-villa"]);

        let gym = PropertyFilters {
            amenities: vec!["gym".to_string()],
            ..PropertyFilters::default()
        };
        assert!(filter_properties(all, &gym).is_empty());
    }

    #[test]
    fn test_stay_filter_uses_generated_availability() {
        let mut catalog_properties = test_catalog().get_all_properties().to_vec();
        let blocked = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        if let Some(entry) = catalog_properties[0]
            .availability
            .iter_mut()
            .find(|a| a.date == blocked)
        {
            entry.available = false;
        }

        let stay = |from: u32, to: u32| PropertyFilters {
            check_in: NaiveDate::from_ymd_opt(2025, 3, from),
            check_out: NaiveDate::from_ymd_opt(2025, 3, to),
            ..PropertyFilters::default()
        };

        assert_eq!(ids(&filter_properties(&catalog_properties, &stay(4, 6))), vec!["mountain-cabin"]);
        // Check-out night is not stayed.
        assert_eq!(filter_properties(&catalog_properties, &stay(3, 5)).len(), 2);
        assert_eq!(filter_properties(&catalog_properties, &stay(6, 4)).len(), 2);

        let outside = PropertyFilters {
            check_in: NaiveDate::from_ymd_opt(2030, 1, 1),
            check_out: NaiveDate::from_ymd_opt(2030, 1, 3),
            ..PropertyFilters::default()
        };
        assert_eq!(filter_properties(&catalog_properties, &outside).len(), 2);

        let centuries = PropertyFilters {
            check_in: NaiveDate::from_ymd_opt(1000, 1, 1),
            check_out: NaiveDate::from_ymd_opt(30000, 1, 1),
            ..PropertyFilters::default()
        };
        assert_eq!(ids(&filter_properties(&catalog_properties, &centuries)), vec!["mountain-cabin"]);
    }

    #[test]
    fn test_sort_orders() {
        let catalog = test_catalog();
        let mut all: Vec<&Property> = catalog.get_all_properties().iter().collect();

        sort_properties(&mut all, SortBy::Price, SortOrder::Asc);
        assert_eq!(ids(&all), vec!["mountain-cabin", "beachfront-villa"]);

        sort_properties(&mut all, SortBy::Rating, SortOrder::Desc);
        assert_eq!(ids(&all), vec!["beachfront-villa", "mountain-cabin"]);

        sort_properties(&mut all, SortBy::Newest, SortOrder::Desc);
        assert_eq!(ids(&all), vec!["mountain-cabin", "beachfront-villa"]);

        sort_properties(&mut all, SortBy::Newest, SortOrder::Asc);
        assert_eq!(ids(&all), vec!["beachfront-villa", "mountain-cabin"]);
    }

    #[test]
    fn test_sort_is_total_and_stable() {
        let template = test_catalog().get_all_properties()[0].clone();
        let variants = [
            (5.0, 300.0, "2023-03-01T00:00:00Z"),
            (4.0, 100.0, "2023-01-01T00:00:00Z"),
            (5.0, 200.0, "2023-02-01T00:00:00Z"),
            (4.5, 100.0, "2023-01-01T00:00:00Z"),
        ];
        let properties: Vec<Property> = variants
            .iter()
            .enumerate()
            .map(|(i, (rating, price, created))| {
                let mut p = template.clone();
                p.id = format!("p{}", i);
                p.rating = *rating;
                p.pricing.base_rate = *price;
                p.created_at = created.parse::<DateTime<Utc>>().unwrap();
                p
            })
            .collect();

        for sort_by in [SortBy::Price, SortBy::Rating, SortBy::Newest] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let mut sorted: Vec<&Property> = properties.iter().collect();
                sort_properties(&mut sorted, sort_by, order);
                assert!(sorted.windows(2).all(|w| {
                    let ordering = compare(w[0], w[1], sort_by);
                    match order {
                        SortOrder::Asc => ordering != Ordering::Greater,
                        SortOrder::Desc => ordering != Ordering::Less,
                    }
                }));
            }
        }

        let mut by_price: Vec<&Property> = properties.iter().collect();
        sort_properties(&mut by_price, SortBy::Price, SortOrder::Asc);
        assert_eq!(ids(&by_price), vec!["p1", "p3", "p2", "p0"]);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(&items, None, None);
        assert_eq!(first.data.len(), 12);
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.page, 1);

        let last = paginate(&items, Some(3), Some(12));
        assert_eq!(last.data, vec![25]);

        let beyond = paginate(&items, Some(9), Some(10));
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.total_pages, 3);

        let capped = paginate(&items, Some(0), Some(1000));
        assert_eq!(capped.limit, MAX_PAGE_LIMIT);
        assert_eq!(capped.page, 1);
        assert_eq!(capped.data.len(), 25);

        let empty: PaginatedResponse<u32> = paginate(&[], None, None);
        assert_eq!(empty.total_pages, 0);
    }
}
