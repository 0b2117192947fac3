//! Nightly rates and price quotes.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Property;

/// Longest stay quoted for a property without its own maximum.
pub const MAX_STAY_NIGHTS: u32 = 365;

/// Rate charged for one night of a stay.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Cost breakdown shown in the booking sidebar.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub currency: String,
    pub nights: u32,
    pub nightly_rates: Vec<NightlyRate>,
    pub subtotal: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub taxes: f64,
    pub total: f64,
}

/// Generated availability price first, then a covering seasonal rate, then the base rate.
pub fn nightly_rate(property: &Property, date: NaiveDate) -> f64 {
    if let Some(price) = property.availability_on(date).and_then(|a| a.price) {
        return price;
    }
    property
        .pricing
        .seasonal_rates
        .iter()
        .find(|season| season.covers(date))
        .map_or(property.pricing.base_rate, |season| season.rate)
}

/// Quote a stay. Without dates this is a single night at the base rate.
pub fn quote(
    property: &Property,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<PriceQuote, AppError> {
    let nightly_rates = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => stay_rates(property, check_in, check_out)?,
        (None, None) => Vec::new(),
        _ => {
            return Err(AppError::Validation(
                "Both check-in and check-out dates are required".to_string(),
            ))
        }
    };

    let (nights, subtotal) = if nightly_rates.is_empty() {
        (1, property.pricing.base_rate)
    } else {
        (
            u32::try_from(nightly_rates.len()).unwrap_or(u32::MAX),
            nightly_rates.iter().map(|n| n.rate).sum(),
        )
    };

    let pricing = &property.pricing;
    Ok(PriceQuote {
        currency: pricing.currency.clone(),
        nights,
        nightly_rates,
        subtotal,
        cleaning_fee: pricing.cleaning_fee,
        service_fee: pricing.service_fee,
        taxes: pricing.taxes,
        total: subtotal + pricing.cleaning_fee + pricing.service_fee + pricing.taxes,
    })
}

fn stay_rates(
    property: &Property,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<NightlyRate>, AppError> {
    if check_out <= check_in {
        return Err(AppError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let max_nights = property
        .pricing
        .maximum_stay
        .map_or(MAX_STAY_NIGHTS, |max| max.min(MAX_STAY_NIGHTS));
    if check_out.signed_duration_since(check_in).num_days() > i64::from(max_nights) {
        return Err(AppError::Validation(format!(
            "Stays are limited to {} nights",
            max_nights
        )));
    }

    let mut rates = Vec::new();
    let mut night = check_in;
    while night < check_out {
        rates.push(NightlyRate {
            date: night,
            rate: nightly_rate(property, night),
        });
        night = night
            .checked_add_days(Days::new(1))
            .ok_or_else(|| AppError::Validation("Stay runs past the calendar".to_string()))?;
    }
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_catalog;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quote_without_dates_is_one_night() {
        let catalog = test_catalog();
        let villa = catalog.get_property_by_id("beachfront-villa").unwrap();
        let quote = quote(villa, None, None).unwrap();

        assert_eq!(quote.nights, 1);
        assert!(quote.nightly_rates.is_empty());
        assert!((quote.total - (8100.0 + 2700.0 + 810.0 + 900.0)).abs() < 1e-9);
        assert_eq!(quote.currency, "ZAR");
    }

    #[test]
    fn test_quote_uses_generated_weekend_prices() {
        let catalog = test_catalog();
        let cabin = catalog.get_property_by_id("mountain-cabin").unwrap();
        // Fri, Sat, Sun nights inside the generated window.
        let quote = quote(cabin, Some(day(2025, 3, 7)), Some(day(2025, 3, 10))).unwrap();

        assert_eq!(quote.nights, 3);
        let expected_subtotal = 5040.0 + 5040.0 * 1.2 * 2.0;
        assert!((quote.subtotal - expected_subtotal).abs() < 1e-6);
        assert!((quote.total - (expected_subtotal + 1800.0 + 504.0 + 630.0)).abs() < 1e-6);
    }

    #[test]
    fn test_nightly_rate_falls_back_to_seasonal_then_base() {
        let catalog = test_catalog();
        let cabin = catalog.get_property_by_id("mountain-cabin").unwrap();

        assert!((nightly_rate(cabin, day(2024, 12, 24)) - 6300.0).abs() < f64::EPSILON);
        assert!((nightly_rate(cabin, day(2024, 10, 1)) - 5040.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quote_rejects_bad_ranges() {
        let catalog = test_catalog();
        let villa = catalog.get_property_by_id("beachfront-villa").unwrap();

        assert!(matches!(
            quote(villa, Some(day(2025, 3, 5)), Some(day(2025, 3, 5))),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            quote(villa, Some(day(2025, 3, 5)), None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_quote_caps_stay_length() {
        let catalog = test_catalog();
        let villa = catalog.get_property_by_id("beachfront-villa").unwrap();

        let longest = quote(villa, Some(day(2025, 3, 1)), Some(day(2025, 3, 15))).unwrap();
        assert_eq!(longest.nights, 14);

        assert_eq!(
            quote(villa, Some(day(2025, 3, 1)), Some(day(2025, 3, 16))),
            Err(AppError::Validation("Stays are limited to 14 nights".to_string()))
        );
        assert_eq!(
            quote(villa, Some(day(1000, 1, 1)), Some(day(30000, 1, 1))),
            Err(AppError::Validation("Stays are limited to 14 nights".to_string()))
        );

        let mut open_ended = villa.clone();
        open_ended.pricing.maximum_stay = None;
        assert_eq!(
            quote(&open_ended, Some(day(2025, 1, 1)), Some(day(2027, 1, 1))),
            Err(AppError::Validation("Stays are limited to 365 nights".to_string()))
        );
    }
}
