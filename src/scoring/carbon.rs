use crate::menu::Dish;
use crate::seed::SeededRng;

/// Carbon band per protein class, in kg CO2 per portion. Non-vegetarian
/// dishes classify by name keywords (French and English), falling back to a
/// generic meat band.
const BEEF: &[&str] = &["bœuf", "boeuf", "beef", "veau"];
const LAMB: &[&str] = &["agneau", "lamb"];
const PORK: &[&str] = &["porc", "pork", "jambon", "bacon"];
const POULTRY: &[&str] = &["poulet", "chicken", "canard", "duck"];
const FISH: &[&str] = &["poisson", "fish", "saumon", "thon"];
const SHELLFISH: &[&str] = &["crevette", "homard", "langouste", "shellfish"];

fn band(dish: &Dish) -> (f64, f64) {
    if dish.diet.is_vegan() {
        return (0.5, 1.5);
    }
    if dish.diet.is_vegetarian() {
        return (1.5, 3.0);
    }
    let name = dish.name.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| name.contains(kw));
    if contains_any(BEEF) {
        (10.0, 25.0)
    } else if contains_any(LAMB) {
        (8.0, 20.0)
    } else if contains_any(PORK) {
        (4.0, 8.0)
    } else if contains_any(POULTRY) {
        (3.0, 6.0)
    } else if contains_any(FISH) {
        (2.5, 5.0)
    } else if contains_any(SHELLFISH) {
        (5.0, 10.0)
    } else {
        (3.0, 7.0)
    }
}

/// Estimated carbon footprint of a dish in kg CO2, drawn deterministically
/// from the dish's band using the per-dish seed.
pub fn estimate(dish: &Dish, dish_seed: &str) -> f64 {
    let (lo, hi) = band(dish);
    SeededRng::labeled(dish_seed, "carbon").next_in(lo, hi)
}

/// Maps a carbon estimate to a 0-10 planet score.
///
/// The mapping is piecewise linear and monotonically decreasing; the band
/// boundaries (2, 5, 10, 15 kg) and slopes are the defining nonlinearity of
/// the scoring system and must not be adjusted casually:
///
/// | kg CO2   | score  |
/// |----------|--------|
/// | < 2      | 9-10   |
/// | 2-5      | 7-9    |
/// | 5-10     | 4-7    |
/// | 10-15    | 2-4    |
/// | >= 15    | 0-2    |
pub fn planet_score(carbon_kg: f64) -> f64 {
    if carbon_kg < 2.0 {
        9.0 + (2.0 - carbon_kg) * 0.5
    } else if carbon_kg < 5.0 {
        7.0 + (5.0 - carbon_kg) / 1.5
    } else if carbon_kg < 10.0 {
        4.0 + (10.0 - carbon_kg) / 1.7
    } else if carbon_kg < 15.0 {
        2.0 + (15.0 - carbon_kg) / 2.5
    } else {
        (2.0 - (carbon_kg - 15.0) / 5.0).max(0.0)
    }
}
