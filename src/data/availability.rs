//! Generated availability calendars.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;

use crate::models::Availability;

/// Knobs for generating a property's availability window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilitySettings {
    pub days: u32,
    pub unavailable_probability: f64,
    pub weekend_multiplier: f64,
}

impl Default for AvailabilitySettings {
    fn default() -> Self {
        Self {
            days: 90,
            unavailable_probability: 0.15,
            weekend_multiplier: 1.2,
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generate `settings.days` consecutive entries starting at `start`.
///
/// Weekend nights cost `base_price * weekend_multiplier` with a two-night minimum.
/// Each date is independently marked unavailable with the configured probability;
/// `is_available = false` blocks the whole window.
pub fn generate_availability<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    base_price: f64,
    is_available: bool,
    settings: &AvailabilitySettings,
) -> Vec<Availability> {
    (0..settings.days)
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| {
            let weekend = is_weekend(date);
            let randomly_unavailable = rng.random_bool(settings.unavailable_probability);

            Availability {
                date,
                available: is_available && !randomly_unavailable,
                price: Some(if weekend {
                    base_price * settings.weekend_multiplier
                } else {
                    base_price
                }),
                minimum_stay: Some(if weekend { 2 } else { 1 }),
            }
        })
        .collect()
}
