//! Tests for the category classifier: keyword rules, provider tags, and
//! fallbacks.
mod common;
use common::*;
use greenfork::prelude::*;

#[test]
fn classifies_by_name_keywords() {
    let cases = [
        ("Sushi Zen", Category::Japanese),
        ("Maki House", Category::Japanese),
        ("Pizza Mario", Category::Italian),
        ("Trattoria del Ponte", Category::Italian),
        ("Golden Dragon Wok", Category::Asian),
        ("Bangkok Thai Street", Category::Asian),
        ("Burger Corner", Category::FastFood),
        ("Kebab du Coin", Category::FastFood),
        ("Morning Brew Coffee", Category::Cafe),
        ("Café des Arts", Category::Cafe),
        ("Boulangerie Martin", Category::Bakery),
        ("Golden Bakery", Category::Bakery),
    ];
    for (name, expected) in cases {
        assert_eq!(
            Category::classify(&generic_restaurant(name)),
            expected,
            "name: {name}"
        );
    }
}

#[test]
fn earlier_rules_win_ties() {
    // Contains both "sushi" (japanese) and "pizza" (italian); the japanese
    // rule is listed first.
    let restaurant = generic_restaurant("Pizza Sushi Fusion");
    assert_eq!(Category::classify(&restaurant), Category::Japanese);
}

#[test]
fn classifies_by_provider_tag_when_name_is_neutral() {
    let cases = [
        ("thai_restaurant", Category::Asian),
        ("ramen_restaurant", Category::Japanese),
        ("pizzeria", Category::Italian),
        ("coffee_shop", Category::Cafe),
        ("sandwich_shop", Category::FastFood),
        ("pastry_shop", Category::Bakery),
        ("restaurant", Category::Default),
    ];
    for (tag, expected) in cases {
        assert_eq!(
            Category::classify(&tagged_restaurant("Chez Marcel", tag)),
            expected,
            "tag: {tag}"
        );
    }
}

#[test]
fn name_keywords_take_priority_over_provider_tag() {
    let restaurant = tagged_restaurant("Sushi Zen", "italian_restaurant");
    assert_eq!(Category::classify(&restaurant), Category::Japanese);
}

#[test]
fn classifies_by_declared_display_string() {
    let restaurant = tagged_restaurant("Chez Marcel", "Bistrot Parisien");
    assert_eq!(Category::classify(&restaurant), Category::Cafe);

    let restaurant = tagged_restaurant("Chez Marcel", "Restaurant Japonais");
    assert_eq!(Category::classify(&restaurant), Category::Japanese);
}

#[test]
fn falls_back_to_default() {
    assert_eq!(
        Category::classify(&generic_restaurant("Chez Marcel")),
        Category::Default
    );
    assert_eq!(
        Category::classify(&tagged_restaurant("Chez Marcel", "unheard_of_tag")),
        Category::Default
    );
}

#[test]
fn empty_name_never_fails() {
    let restaurant = RestaurantDescriptor::default();
    assert_eq!(Category::classify(&restaurant), Category::Default);
}
