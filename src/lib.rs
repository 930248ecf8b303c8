//! # Greenfork - Menu Generation and Dish Scoring Engine
//!
//! **Greenfork** is a deterministic menu-generation and dish-scoring engine for
//! allergy-aware restaurant discovery. Given a restaurant descriptor and a user's
//! allergy set, it composes a realistic menu and enriches every dish with three
//! sub-scores (environmental impact, enjoyment, personal dietary fit) plus a
//! weighted total, ready for an application layer to rank and display.
//!
//! ## Core Workflow
//!
//! The engine is presentation-agnostic. It operates on a canonical
//! [`RestaurantDescriptor`](menu::RestaurantDescriptor) and produces a list of
//! [`EnrichedDish`](scoring::EnrichedDish) values. The primary workflow is:
//!
//! 1.  **Describe the venue**: Build a `RestaurantDescriptor` from whatever your
//!     map/places provider returns. The `stable_identity` field is the seed for
//!     every random decision, so the same physical restaurant always yields the
//!     same menu.
//! 2.  **Create an engine**: Use [`MenuEngine::new`](engine::MenuEngine::new) for
//!     the curated catalog and establishment registry, or
//!     [`MenuEngine::builder`](engine::MenuEngine::builder) to supply your own.
//! 3.  **Generate**: Call [`scored_menu`](engine::MenuEngine::scored_menu) (or its
//!     latency-simulating async twin) as often as you like; results are memoized
//!     per `(restaurant, allergy set)` pair.
//! 4.  **Filter**: Use the helpers in [`scoring::filter`] to rank dishes that are
//!     safe for the user ahead of the rest.
//!
//! ## Quick Start
//!
//! ```rust
//! use greenfork::prelude::*;
//!
//! let engine = MenuEngine::new();
//!
//! let restaurant = RestaurantDescriptor {
//!     stable_identity: "sushi-zen-48.89-2.31".to_string(),
//!     name: "Sushi Zen".to_string(),
//!     declared_category: Some("japanese_restaurant".to_string()),
//!     veggie_venue: false,
//! };
//! let allergies = vec!["gluten".to_string()];
//!
//! // Deterministic: the same descriptor and allergy set always produce
//! // byte-identical menus, across calls and across process restarts.
//! let menu = engine.scored_menu(&restaurant, &allergies);
//! assert!((5..=8).contains(&menu.len()));
//!
//! for dish in menu.iter() {
//!     println!(
//!         "{} -> total {} (planet {}, pleasure {}, fit {})",
//!         dish.dish.name,
//!         dish.total_score,
//!         dish.sub_scores.planet,
//!         dish.sub_scores.pleasure,
//!         dish.sub_scores.fit,
//!     );
//! }
//!
//! // Dishes the user can actually eat, ahead of everything else.
//! let safe = greenfork::scoring::filter::safe_dishes(&menu, &allergies);
//! for dish in safe {
//!     assert!(dish.dish.diet.is_vegetarian());
//! }
//! ```

pub mod engine;
pub mod error;
pub mod menu;
pub mod prelude;
pub mod scoring;
pub mod seed;
