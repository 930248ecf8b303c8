use serde::{Deserialize, Serialize};

/// The closed allergen vocabulary used by the curated dish data.
///
/// Tags are lower-cased French locale labels. The vocabulary is advisory:
/// matching treats any tag (known or not) as an opaque string and compares by
/// bidirectional substring containment, so an unknown tag is never rejected.
pub const ALLERGEN_VOCABULARY: &[&str] = &[
    "gluten",
    "lait",
    "oeufs",
    "soja",
    "sésame",
    "arachides",
    "crustacés",
    "poisson",
    "moutarde",
    "sulfites",
    "mollusques",
    "fruits à coques",
];

/// Identifies a venue for menu generation purposes.
///
/// The `stable_identity` is the cache key and the composition seed: it must be
/// stable across repeated lookups for the same physical place, even if an
/// upstream place id changes. [`RestaurantDescriptor::stable_identity_for`]
/// builds one from the name and rounded coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantDescriptor {
    pub stable_identity: String,
    pub name: String,
    /// Provider-supplied category tag, e.g. `"sushi_restaurant"`.
    pub declared_category: Option<String>,
    /// True when the venue is exclusively vegetarian or vegan.
    pub veggie_venue: bool,
}

impl RestaurantDescriptor {
    /// A descriptor with only a name; the identity defaults to the name slug.
    pub fn named(name: &str) -> Self {
        Self {
            stable_identity: slugify(name),
            name: name.to_string(),
            declared_category: None,
            veggie_venue: false,
        }
    }

    /// Derives a stable identity from a name and geographic coordinates
    /// rounded to two decimals (about a city block), e.g.
    /// `"dar-el-bey-48.88-2.32"`.
    ///
    /// Rounding absorbs provider jitter so the same physical restaurant always
    /// maps to the same cache entry.
    pub fn stable_identity_for(name: &str, lat: f64, lon: f64) -> String {
        format!(
            "{}-{:.2}-{:.2}",
            slugify(name),
            (lat * 100.0).round() / 100.0,
            (lon * 100.0).round() / 100.0
        )
    }

    /// Whether the venue should be composed under the vegetarian quota.
    ///
    /// Either the descriptor says so outright, or the declared provider
    /// category marks it as a vegan/vegetarian establishment.
    pub fn is_veggie_venue(&self) -> bool {
        if self.veggie_venue {
            return true;
        }
        matches!(
            self.declared_category.as_deref(),
            Some("vegan_restaurant") | Some("vegetarian_restaurant")
        )
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// The dietary classification of a dish.
///
/// Modeled as a single enum rather than two booleans so that
/// "vegan implies vegetarian" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Omnivore,
    Vegetarian,
    Vegan,
}

impl Diet {
    pub fn is_vegetarian(self) -> bool {
        matches!(self, Diet::Vegetarian | Diet::Vegan)
    }

    pub fn is_vegan(self) -> bool {
        matches!(self, Diet::Vegan)
    }
}

/// One menu item, as authored in a template pool or an establishment registry.
///
/// Dishes are immutable once composed into a menu; scoring wraps them in an
/// [`EnrichedDish`](crate::scoring::EnrichedDish) instead of mutating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique within one restaurant's menu.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative, in currency units.
    pub price: f64,
    pub diet: Diet,
    /// Lower-cased allergen tags, normally drawn from [`ALLERGEN_VOCABULARY`].
    pub allergens: Vec<String>,
}

impl Dish {
    /// Convenience constructor for curated template data.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        price: f64,
        diet: Diet,
        allergens: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            diet,
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
        }
    }
}
