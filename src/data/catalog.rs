//! Read-only property catalog.

use crate::models::{Amenity, Property};

/// Number of listings surfaced on the home page.
const FEATURED_COUNT: usize = 2;

/// Maximum number of listings suggested on a detail page.
const SIMILAR_COUNT: usize = 3;

/// The static set of listings, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
    amenities: Vec<Amenity>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>, amenities: Vec<Amenity>) -> Self {
        Self {
            properties,
            amenities,
        }
    }

    pub fn get_property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn get_all_properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get_featured_properties(&self) -> &[Property] {
        let end = self.properties.len().min(FEATURED_COUNT);
        &self.properties[..end]
    }

    /// Other listings to suggest alongside `id`, in catalog order.
    pub fn similar_properties(&self, id: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.id != id)
            .take(SIMILAR_COUNT)
            .collect()
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
