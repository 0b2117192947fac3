//! In-memory data layer.
//!
//! The catalog is generated once at startup and never persisted; bookings are
//! kept in memory and vanish on restart.

mod availability;
mod bookings;
mod catalog;
mod sample;

pub use availability::*;
pub use bookings::*;
pub use catalog::*;
pub use sample::*;

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

impl From<&Config> for AvailabilitySettings {
    fn from(config: &Config) -> Self {
        Self {
            days: config.availability_days,
            unavailable_probability: config.unavailable_probability,
            weekend_multiplier: config.weekend_multiplier,
        }
    }
}

/// Build the catalog with availability windows starting `today`.
pub fn build_catalog(today: NaiveDate, settings: &AvailabilitySettings, seed: Option<u64>) -> Catalog {
    let properties = match seed {
        Some(seed) => sample_properties(&mut StdRng::seed_from_u64(seed), today, settings),
        None => sample_properties(&mut rand::rng(), today, settings),
    };
    Catalog::new(properties, sample_amenities())
}

/// Build the catalog for the current local date.
pub fn init_catalog(config: &Config) -> Catalog {
    let today = Local::now().date_naive();
    let catalog = build_catalog(today, &AvailabilitySettings::from(config), config.availability_seed);
    tracing::info!(
        "Catalog loaded with {} properties, availability from {} for {} days",
        catalog.len(),
        today,
        config.availability_days
    );
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; listings will show no properties");
    }
    catalog
}

#[cfg(test)]
pub(crate) fn test_catalog() -> Catalog {
    let settings = AvailabilitySettings {
        unavailable_probability: 0.0,
        ..AvailabilitySettings::default()
    };
    build_catalog(
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default(),
        &settings,
        Some(1),
    )
}
