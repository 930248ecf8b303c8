//! Dish enrichment: sub-scores, carbon estimation, and allergy-fit ranking.
//!
//! Every composed dish is enriched with three independent sub-scores on a
//! 0-10 scale plus a weighted total:
//!
//! - **planet**: environmental friendliness, inverse to the estimated carbon
//!   footprint (see [`carbon`]);
//! - **pleasure**: expected enjoyment, from a seeded base plus price and
//!   comfort-food bonuses;
//! - **fit**: personal compatibility with the user's allergy set and
//!   vegetarian/vegan preference.
//!
//! All randomness is drawn from [`SeededRng`] streams labeled per sub-score,
//! so enrichment is a pure function of `(dish, dish seed, allergy set)`.

pub mod carbon;
pub mod filter;

use crate::menu::{Diet, Dish};
use crate::seed::SeededRng;
use serde::Serialize;

/// Weights of the three sub-scores in the total.
const PLANET_WEIGHT: f64 = 0.35;
const PLEASURE_WEIGHT: f64 = 0.35;
const FIT_WEIGHT: f64 = 0.30;

/// Penalty per matching user allergen in the fit score.
const ALLERGEN_PENALTY: f64 = 3.0;

/// The three sub-scores of an enriched dish, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub planet: f64,
    pub pleasure: f64,
    pub fit: f64,
}

/// A dish augmented with scoring data. Never mutated after enrichment;
/// regenerating with a different allergy set produces a new value under a new
/// cache key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDish {
    #[serde(flatten)]
    pub dish: Dish,
    /// Weighted combination of the sub-scores, rounded to one decimal. The
    /// combination uses full-precision sub-scores and rounds once.
    pub total_score: f64,
    pub sub_scores: SubScores,
    /// Estimated footprint in kg CO2, rounded to one decimal.
    pub carbon_estimate_kg: f64,
    /// Derived tags: `"vegan"` and/or `"vegetarian"`.
    pub dietary_tags: Vec<String>,
    /// Rough NOVA processing group: 1 vegan, 2 vegetarian, 3 otherwise.
    pub nova_group: u8,
    /// Rough Nutri-Score letter along the same axis.
    pub nutri_score: char,
}

/// Enriches one dish.
///
/// `dish_seed` is the per-dish deterministic seed, conventionally
/// `"{stable_identity}-{index}"`; every random draw inside derives from it
/// with a sub-score label.
pub fn enrich(dish: Dish, dish_seed: &str, user_allergies: &[String]) -> EnrichedDish {
    let carbon = carbon::estimate(&dish, dish_seed);
    let planet = carbon::planet_score(carbon);
    let pleasure = pleasure_score(&dish, dish_seed);
    let fit = fit_score(&dish, user_allergies);

    let total = planet * PLANET_WEIGHT + pleasure * PLEASURE_WEIGHT + fit * FIT_WEIGHT;

    let dietary_tags = match dish.diet {
        Diet::Vegan => vec!["vegan".to_string(), "vegetarian".to_string()],
        Diet::Vegetarian => vec!["vegetarian".to_string()],
        Diet::Omnivore => Vec::new(),
    };
    let (nova_group, nutri_score) = match dish.diet {
        Diet::Vegan => (1, 'A'),
        Diet::Vegetarian => (2, 'B'),
        Diet::Omnivore => (3, 'C'),
    };

    EnrichedDish {
        dish,
        total_score: round1(total),
        sub_scores: SubScores {
            planet: round1(planet),
            pleasure: round1(pleasure),
            fit: round1(fit),
        },
        carbon_estimate_kg: round1(carbon),
        dietary_tags,
        nova_group,
        nutri_score,
    }
}

/// Enjoyment score in `[0, 10]`.
///
/// Seeded base in `[5, 9)`, a price bonus of `min(1.5, (price - 10) / 10)`
/// (negative for cheap dishes, pulling the score down), and a flat
/// comfort-food bonus by name.
fn pleasure_score(dish: &Dish, dish_seed: &str) -> f64 {
    let base = SeededRng::labeled(dish_seed, "pleasure").next_in(5.0, 9.0);
    let price_bonus = ((dish.price - 10.0) / 10.0).min(1.5);

    let name = dish.name.to_lowercase();
    let type_bonus = if ["burger", "pizza", "chocolate", "chocolat"]
        .iter()
        .any(|kw| name.contains(kw))
    {
        0.5
    } else if ["frites", "nuggets"].iter().any(|kw| name.contains(kw)) {
        0.3
    } else {
        0.0
    };

    (base + price_bonus + type_bonus).clamp(0.0, 10.0)
}

/// Personal compatibility score in `[0, 10]`.
///
/// Starts at 10 and loses 3 points for each user allergen that overlaps any
/// allergen tag on the dish. The overlap test is bidirectional substring
/// containment and intentionally multi-hit: one dish tag can trigger several
/// penalties if it matches more than one declared allergen. Vegetarian and
/// vegan dishes each earn a +0.5 bonus. An empty allergy set means no
/// penalties at all.
fn fit_score(dish: &Dish, user_allergies: &[String]) -> f64 {
    let mut score = 10.0;

    for allergen in user_allergies {
        let matched = dish
            .allergens
            .iter()
            .any(|tag| filter::allergens_overlap(tag, allergen));
        if matched {
            score -= ALLERGEN_PENALTY;
        }
    }

    if dish.diet.is_vegetarian() {
        score += 0.5;
    }
    if dish.diet.is_vegan() {
        score += 0.5;
    }

    score.clamp(0.0, 10.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
