//! End-to-end tests for the engine facade: memoization, determinism, the
//! async wrapper, and the safety filter.
mod common;
use common::*;
use greenfork::prelude::*;
use greenfork::scoring::filter;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn repeated_calls_hit_the_cache() {
    let engine = MenuEngine::new();
    let restaurant = generic_restaurant("Chez Marcel");
    let user = allergies(&["gluten"]);

    let first = engine.scored_menu(&restaurant, &user);
    let second = engine.scored_menu(&restaurant, &user);

    // Same Arc: generation ran once, nothing was re-rolled.
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.cached_menus(), 1);
}

#[test]
fn allergy_order_does_not_fragment_the_cache() {
    let engine = MenuEngine::new();
    let restaurant = generic_restaurant("Chez Marcel");

    let a = engine.scored_menu(&restaurant, &allergies(&["gluten", "lait"]));
    let b = engine.scored_menu(&restaurant, &allergies(&["lait", "gluten"]));

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(engine.cached_menus(), 1);
}

#[test]
fn distinct_allergy_sets_get_distinct_entries() {
    let engine = MenuEngine::new();
    let restaurant = generic_restaurant("Chez Marcel");

    let plain = engine.scored_menu(&restaurant, &[]);
    let gluten = engine.scored_menu(&restaurant, &allergies(&["gluten"]));

    assert!(!Arc::ptr_eq(&plain, &gluten));
    assert_eq!(engine.cached_menus(), 2);

    // Same dishes either way; only the fit scores may differ.
    let names = |menu: &Arc<Vec<EnrichedDish>>| {
        menu.iter().map(|d| d.dish.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&plain), names(&gluten));
}

#[test]
fn regeneration_after_clear_is_identical() {
    let engine = MenuEngine::new();
    let user = allergies(&["lait"]);
    for name in SAMPLE_NAMES {
        let restaurant = generic_restaurant(name);
        let first = engine.scored_menu(&restaurant, &user);
        engine.clear_cache();
        let second = engine.scored_menu(&restaurant, &user);

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second, "{name} regenerated differently");
    }
}

#[test]
fn two_engines_agree() {
    // No hidden per-process state: independent engines produce identical
    // menus for identical inputs.
    let restaurant = generic_restaurant("Sushi Zen");
    let user = allergies(&["sésame"]);
    let a = MenuEngine::new().scored_menu(&restaurant, &user);
    let b = MenuEngine::new().scored_menu(&restaurant, &user);
    assert_eq!(*a, *b);
}

#[test]
fn delayed_wrapper_matches_the_sync_path() {
    let engine = MenuEngine::new();
    let restaurant = generic_restaurant("Burger Corner");
    let user = allergies(&["lait"]);

    let sync = engine.scored_menu(&restaurant, &user);
    let delayed = tokio_test::block_on(engine.scored_menu_delayed(
        &restaurant,
        &user,
        Duration::from_millis(10),
    ));

    assert!(Arc::ptr_eq(&sync, &delayed));
}

#[test]
fn known_establishment_menu_is_enriched_verbatim() {
    let engine = MenuEngine::new();
    let menu = engine.scored_menu(&generic_restaurant("Le Paris 17"), &[]);

    let mut names: Vec<_> = menu.iter().map(|d| d.dish.name.as_str()).collect();
    names.sort_unstable();
    let registry = EstablishmentRegistry::curated();
    let mut expected: Vec<_> = registry
        .find_by_name("Le Paris 17")
        .unwrap()
        .menu
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    expected.sort_unstable();

    assert_eq!(names, expected);
}

#[test]
fn dar_el_bey_gluten_safety() {
    let engine = MenuEngine::new();
    let restaurant = RestaurantDescriptor {
        stable_identity: "dar-el-bey-48.88-2.32".to_string(),
        ..RestaurantDescriptor::named("Dar El Bey")
    };
    let user = allergies(&["gluten"]);
    let menu = engine.scored_menu(&restaurant, &user);

    let safe = filter::safe_dishes(&menu, &user);
    let safe_names: Vec<_> = safe.iter().map(|d| d.dish.name.as_str()).collect();

    // Couscous Merguez contains gluten (and meat); never safe here.
    assert!(!safe_names.contains(&"Couscous Merguez"));
    // Salade Mechouia is vegan with no allergens; always safe.
    assert!(safe_names.contains(&"Salade Mechouia"));
}

#[test]
fn safe_dishes_are_vegetarian_and_allergen_free() {
    let engine = MenuEngine::new();
    let user = allergies(&["gluten", "lait"]);
    for name in SAMPLE_NAMES {
        let menu = engine.scored_menu(&generic_restaurant(name), &user);
        for enriched in filter::safe_dishes(&menu, &user) {
            assert!(enriched.dish.diet.is_vegetarian());
            for tag in &enriched.dish.allergens {
                for allergen in &user {
                    assert!(
                        !filter::allergens_overlap(tag, allergen),
                        "{}: tag '{tag}' overlaps '{allergen}'",
                        enriched.dish.name
                    );
                }
            }
        }
    }
}

#[test]
fn ranking_puts_safe_dishes_first_and_is_stable() {
    let engine = MenuEngine::new();
    let user = allergies(&["gluten"]);
    let menu = engine.scored_menu(&generic_restaurant("Chez Luigi Trattoria"), &user);

    let mut ranked: Vec<EnrichedDish> = menu.iter().cloned().collect();
    filter::rank_by_safety(&mut ranked, &user);

    // Once the first unsafe dish appears, no safe dish may follow.
    let mut seen_unsafe = false;
    for enriched in &ranked {
        let safe = filter::is_safe(&enriched.dish, &user);
        if !safe {
            seen_unsafe = true;
        }
        assert!(!(seen_unsafe && safe), "safe dish after unsafe dish");
    }

    // Stability: composition order preserved within each group.
    let original_order = |subset: &[&EnrichedDish]| {
        let positions: Vec<_> = subset
            .iter()
            .map(|d| menu.iter().position(|m| m.dish.id == d.dish.id).unwrap())
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    };
    let safe_group: Vec<_> = ranked
        .iter()
        .filter(|d| filter::is_safe(&d.dish, &user))
        .collect();
    let unsafe_group: Vec<_> = ranked
        .iter()
        .filter(|d| !filter::is_safe(&d.dish, &user))
        .collect();
    assert!(original_order(&safe_group));
    assert!(original_order(&unsafe_group));
}

#[test]
fn unknown_allergen_tags_are_matched_as_opaque_strings() {
    let engine = MenuEngine::new();
    let restaurant = generic_restaurant("Chez Marcel");
    // Not part of the controlled vocabulary; still usable.
    let user = allergies(&["xyzzy-compound"]);
    let menu = engine.scored_menu(&restaurant, &user);
    assert!(!menu.is_empty());
}
