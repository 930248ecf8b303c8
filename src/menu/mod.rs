//! Restaurant descriptors, the dish model, and deterministic menu composition.

mod catalog;
mod category;
mod composer;
mod model;
mod registry;

pub use catalog::DishCatalog;
pub use category::Category;
pub use composer::MenuComposer;
pub use model::{ALLERGEN_VOCABULARY, Diet, Dish, RestaurantDescriptor};
pub use registry::{Establishment, EstablishmentRegistry};
