//! The engine facade: composition, enrichment and memoization behind two
//! operations.

use crate::menu::{DishCatalog, EstablishmentRegistry, MenuComposer, RestaurantDescriptor};
use crate::scoring::{self, EnrichedDish};
use ahash::AHashMap;
use itertools::Itertools;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Generates scored menus for restaurants, memoizing results per
/// `(restaurant identity, allergy set)` pair.
///
/// The cache is owned by the engine instance, not by the process: hosts that
/// want isolation create separate engines, long-running hosts call
/// [`clear_cache`](MenuEngine::clear_cache) on whatever policy suits them.
/// The cache is mutex-guarded, so one engine can be shared across threads;
/// generation itself is synchronous, side-effect-free and O(menu size).
///
/// Memoization matters for more than speed: scoring draws seeded randomness
/// at generation time only, so a cache hit must return the previously
/// computed list unchanged rather than re-rolling it.
pub struct MenuEngine {
    composer: MenuComposer,
    cache: Mutex<AHashMap<String, Arc<Vec<EnrichedDish>>>>,
}

impl MenuEngine {
    /// An engine with the curated catalog and establishment registry.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring an engine with a custom registry or catalog.
    pub fn builder() -> MenuEngineBuilder {
        MenuEngineBuilder::default()
    }

    /// Generates the scored menu for a restaurant and allergy set.
    ///
    /// Synchronous, pure and memoized. Repeated calls with the same arguments
    /// return the same `Arc` without re-invoking generation. Never fails: a
    /// blank name classifies into the default pool and an empty allergy set
    /// simply scores without penalties.
    pub fn scored_menu(
        &self,
        restaurant: &RestaurantDescriptor,
        user_allergies: &[String],
    ) -> Arc<Vec<EnrichedDish>> {
        let key = cache_key(restaurant, user_allergies);

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(menu) = cache.get(&key) {
            return Arc::clone(menu);
        }

        let menu = Arc::new(self.generate(restaurant, user_allergies));
        cache.insert(key, Arc::clone(&menu));
        menu
    }

    /// [`scored_menu`](MenuEngine::scored_menu) resolving after `delay`, to
    /// simulate network latency for loading states. Identical semantics and
    /// the same cache; concurrent calls are independent and reentrant.
    pub async fn scored_menu_delayed(
        &self,
        restaurant: &RestaurantDescriptor,
        user_allergies: &[String],
        delay: Duration,
    ) -> Arc<Vec<EnrichedDish>> {
        tokio::time::sleep(delay).await;
        self.scored_menu(restaurant, user_allergies)
    }

    /// Drops all memoized menus. The next call per key regenerates, with
    /// identical results thanks to seeding.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    /// Number of memoized `(restaurant, allergy set)` entries.
    pub fn cached_menus(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn registry(&self) -> &EstablishmentRegistry {
        self.composer.registry()
    }

    pub fn catalog(&self) -> &DishCatalog {
        self.composer.catalog()
    }

    fn generate(
        &self,
        restaurant: &RestaurantDescriptor,
        user_allergies: &[String],
    ) -> Vec<EnrichedDish> {
        self.composer
            .compose(restaurant)
            .into_iter()
            .enumerate()
            .map(|(index, dish)| {
                let dish_seed = format!("{}-{}", restaurant.stable_identity, index);
                scoring::enrich(dish, &dish_seed, user_allergies)
            })
            .collect()
    }
}

impl Default for MenuEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite cache key: stable identity plus the sorted, lower-cased allergy
/// list. Sorting makes the key order-insensitive, matching the fact that an
/// allergy set is a set.
fn cache_key(restaurant: &RestaurantDescriptor, user_allergies: &[String]) -> String {
    let allergies = user_allergies
        .iter()
        .map(|a| a.to_lowercase())
        .sorted()
        .join(",");
    format!("{}-{}", restaurant.stable_identity, allergies)
}

/// Configures a [`MenuEngine`].
#[derive(Default)]
pub struct MenuEngineBuilder {
    registry: Option<EstablishmentRegistry>,
    catalog: Option<DishCatalog>,
}

impl MenuEngineBuilder {
    /// Use a custom establishment registry instead of the curated one.
    pub fn registry(mut self, registry: EstablishmentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a custom template catalog instead of the curated one.
    pub fn catalog(mut self, catalog: DishCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> MenuEngine {
        MenuEngine {
            composer: MenuComposer::new(
                self.registry.unwrap_or_else(EstablishmentRegistry::curated),
                self.catalog.unwrap_or_default(),
            ),
            cache: Mutex::new(AHashMap::new()),
        }
    }
}
