//! Allergy-safety filtering and ranking.
//!
//! Allergen matching is a deliberate "fuzzy containment match": two tags
//! overlap when either lower-cased string contains the other. This
//! over-matches on purpose ("lait" flags "produits laitiers" and vice versa);
//! favoring caution beats exact set membership when the downstream decision is
//! what someone with an allergy can eat. Unknown tags participate like any
//! other string, they are never rejected.

use crate::menu::Dish;
use crate::scoring::EnrichedDish;

/// Whether two allergen tags overlap, by case-insensitive substring
/// containment in either direction.
pub fn allergens_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// A dish is safe for a user iff it is vegetarian and none of the user's
/// allergens overlaps any of the dish's allergen tags.
pub fn is_safe(dish: &Dish, user_allergies: &[String]) -> bool {
    dish.diet.is_vegetarian()
        && !dish.allergens.iter().any(|tag| {
            user_allergies
                .iter()
                .any(|allergen| allergens_overlap(tag, allergen))
        })
}

/// The safe dishes of a scored menu, in composition order.
pub fn safe_dishes<'a>(
    menu: &'a [EnrichedDish],
    user_allergies: &[String],
) -> Vec<&'a EnrichedDish> {
    menu.iter()
        .filter(|enriched| is_safe(&enriched.dish, user_allergies))
        .collect()
}

/// Reorders a menu so safe dishes come first. The sort is stable: within the
/// safe and unsafe groups, composition order is preserved.
pub fn rank_by_safety(menu: &mut [EnrichedDish], user_allergies: &[String]) {
    menu.sort_by_key(|enriched| !is_safe(&enriched.dish, user_allergies));
}
