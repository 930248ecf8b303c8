//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the greenfork crate.
//! Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use greenfork::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let engine = MenuEngine::new();
//! let restaurant = RestaurantDescriptor::named("Chez Luigi Trattoria");
//! let menu = engine.scored_menu(&restaurant, &["gluten".to_string()]);
//! println!("Generated {} dishes", menu.len());
//! # Ok(())
//! # }
//! ```

// Engine facade
pub use crate::engine::{MenuEngine, MenuEngineBuilder};

// Menu data model and composition
pub use crate::menu::{
    Category, Dish, DishCatalog, Diet, Establishment, EstablishmentRegistry,
    RestaurantDescriptor,
};

// Scoring types
pub use crate::scoring::{EnrichedDish, SubScores};

// Deterministic seeding
pub use crate::seed::SeededRng;

// Error types
pub use crate::error::RegistryError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
