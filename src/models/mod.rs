//! Data models for the rentals site.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod booking;
mod property;
mod search;

pub use booking::*;
pub use property::*;
pub use search::*;
