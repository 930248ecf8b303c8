use crate::menu::RestaurantDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of cuisine categories a venue can classify into.
///
/// Each category selects one dish template pool in the
/// [`DishCatalog`](crate::menu::DishCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Asian,
    Japanese,
    Italian,
    Cafe,
    FastFood,
    Bakery,
    Default,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Asian => "asian",
            Category::Japanese => "japanese",
            Category::Italian => "italian",
            Category::Cafe => "cafe",
            Category::FastFood => "fastfood",
            Category::Bakery => "bakery",
            Category::Default => "default",
        };
        f.write_str(label)
    }
}

/// One classification rule: the category wins if any keyword occurs in the
/// lower-cased text. Rules are evaluated in order, first match wins, so
/// earlier-listed categories take priority on ambiguous names.
struct KeywordRule {
    category: Category,
    keywords: &'static [&'static str],
}

/// Keyword rules applied to the restaurant name.
const NAME_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Japanese,
        keywords: &["sushi", "japan", "maki"],
    },
    KeywordRule {
        category: Category::Italian,
        keywords: &["pizza", "pasta", "italien", "trattoria"],
    },
    KeywordRule {
        category: Category::Asian,
        keywords: &["thai", "viet", "chinois", "wok", "asia"],
    },
    KeywordRule {
        category: Category::FastFood,
        keywords: &["burger", "tacos", "kebab", "fast"],
    },
    KeywordRule {
        category: Category::Cafe,
        keywords: &["café", "cafe", "coffee", "brunch"],
    },
    KeywordRule {
        category: Category::Bakery,
        keywords: &["boulangerie", "bakery", "pâtisserie"],
    },
];

/// Keyword rules applied to a declared category when it is a free-form
/// display string rather than a provider tag (locale labels like "Japonais"
/// or "Bistrot Parisien").
const DECLARED_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Japanese,
        keywords: &["japonais"],
    },
    KeywordRule {
        category: Category::Italian,
        keywords: &["italien", "pizza"],
    },
    KeywordRule {
        category: Category::Asian,
        keywords: &["asiatique", "thaï", "chinois"],
    },
    KeywordRule {
        category: Category::Cafe,
        keywords: &["café", "bistrot"],
    },
    KeywordRule {
        category: Category::Bakery,
        keywords: &["boulangerie"],
    },
];

/// Provider category tags (Google Places style) mapped to a pool category.
const PROVIDER_TAGS: &[(&str, Category)] = &[
    ("chinese_restaurant", Category::Asian),
    ("thai_restaurant", Category::Asian),
    ("vietnamese_restaurant", Category::Asian),
    ("korean_restaurant", Category::Asian),
    ("asian_restaurant", Category::Asian),
    ("noodle_restaurant", Category::Asian),
    ("ramen_restaurant", Category::Japanese),
    ("japanese_restaurant", Category::Japanese),
    ("sushi_restaurant", Category::Japanese),
    ("italian_restaurant", Category::Italian),
    ("pizza_restaurant", Category::Italian),
    ("pizzeria", Category::Italian),
    ("cafe", Category::Cafe),
    ("coffee_shop", Category::Cafe),
    ("breakfast_restaurant", Category::Cafe),
    ("brunch_restaurant", Category::Cafe),
    ("fast_food_restaurant", Category::FastFood),
    ("hamburger_restaurant", Category::FastFood),
    ("burger_restaurant", Category::FastFood),
    ("sandwich_shop", Category::FastFood),
    ("bakery", Category::Bakery),
    ("pastry_shop", Category::Bakery),
    ("restaurant", Category::Default),
    ("food", Category::Default),
];

impl Category {
    /// Classifies a restaurant descriptor into exactly one category.
    ///
    /// Resolution order, first match wins:
    /// 1. keyword rules over the lower-cased name,
    /// 2. the declared category against the provider tag table,
    /// 3. keyword rules over the declared category as a display string,
    /// 4. [`Category::Default`].
    ///
    /// Total function: a missing or unmatchable name simply falls through.
    pub fn classify(restaurant: &RestaurantDescriptor) -> Category {
        let name = restaurant.name.to_lowercase();
        if let Some(category) = match_rules(NAME_RULES, &name) {
            return category;
        }

        let Some(declared) = restaurant.declared_category.as_deref() else {
            return Category::Default;
        };
        let declared = declared.to_lowercase();

        if let Some((_, category)) = PROVIDER_TAGS.iter().find(|(tag, _)| *tag == declared) {
            return *category;
        }
        if let Some(category) = match_rules(DECLARED_RULES, &declared) {
            return category;
        }

        Category::Default
    }
}

fn match_rules(rules: &[KeywordRule], text: &str) -> Option<Category> {
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map(|rule| rule.category)
}
