//! Common test utilities for building restaurant descriptors and engines.
use greenfork::prelude::*;

/// A generic venue that does not match any curated establishment.
#[allow(dead_code)]
pub fn generic_restaurant(name: &str) -> RestaurantDescriptor {
    RestaurantDescriptor::named(name)
}

/// A venue with a provider category tag.
#[allow(dead_code)]
pub fn tagged_restaurant(name: &str, tag: &str) -> RestaurantDescriptor {
    RestaurantDescriptor {
        declared_category: Some(tag.to_string()),
        ..RestaurantDescriptor::named(name)
    }
}

/// An exclusively vegetarian/vegan venue.
#[allow(dead_code)]
pub fn veggie_restaurant(name: &str) -> RestaurantDescriptor {
    RestaurantDescriptor {
        veggie_venue: true,
        ..RestaurantDescriptor::named(name)
    }
}

/// Allergy list helper.
#[allow(dead_code)]
pub fn allergies(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// A pool of venue names that exercise every category without colliding with
/// the curated establishment registry.
#[allow(dead_code)]
pub const SAMPLE_NAMES: &[&str] = &[
    "Golden Dragon Wok",
    "Sushi Zen",
    "Chez Luigi Trattoria",
    "Morning Brew Coffee",
    "Burger Corner",
    "Boulangerie Martin",
    "Chez Marcel",
    "La Table Ronde",
    "Green Garden",
    "L'Assiette Bleue",
];
