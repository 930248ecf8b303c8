use crate::menu::{Category, Dish, DishCatalog, EstablishmentRegistry, RestaurantDescriptor};
use crate::seed::SeededRng;
use itertools::{Either, Itertools};

/// Composes a concrete, deterministic menu for a restaurant.
///
/// Two paths:
/// - a venue matching the establishment registry gets its fixed, hand-authored
///   menu verbatim (this always takes priority);
/// - any other venue gets 5 to 8 dishes picked from the template pool of its
///   classified category, shuffled by the restaurant's stable identity.
///
/// Composition is a pure function of the descriptor: no I/O, no clock, no
/// ambient randomness. Calling it twice always yields the same menu.
#[derive(Debug, Clone)]
pub struct MenuComposer {
    registry: EstablishmentRegistry,
    catalog: DishCatalog,
}

impl MenuComposer {
    pub fn new(registry: EstablishmentRegistry, catalog: DishCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &EstablishmentRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    /// Produces the menu for a restaurant.
    ///
    /// Generic menus hold between 5 and 8 dishes (capped by pool size, never
    /// below the smallest curated pool); registry menus keep their authored
    /// length. Dish ids are unique within the returned menu.
    pub fn compose(&self, restaurant: &RestaurantDescriptor) -> Vec<Dish> {
        if let Some(establishment) = self.registry.find_by_name(&restaurant.name) {
            return establishment.menu.clone();
        }

        let category = Category::classify(restaurant);
        let mut pool = self.catalog.pool(category).to_vec();
        SeededRng::from_seed(&restaurant.stable_identity).shuffle(&mut pool);

        let count = menu_size(&restaurant.stable_identity);
        if restaurant.is_veggie_venue() {
            self.compose_veggie(restaurant, pool, count)
        } else {
            pool.truncate(count);
            pool
        }
    }

    /// Veggie venues carry 70-100% vegetarian dishes. The exact quota is
    /// seeded per venue; vegetarian dishes fill the quota first and the
    /// remainder comes from the non-vegetarian side of the shuffled pool.
    /// Slots the non-vegetarian side cannot fill (all-vegetarian pools) go
    /// back to vegetarian dishes, which only raises the ratio.
    fn compose_veggie(
        &self,
        restaurant: &RestaurantDescriptor,
        pool: Vec<Dish>,
        count: usize,
    ) -> Vec<Dish> {
        let quota = SeededRng::labeled(&restaurant.stable_identity, "veggie-quota")
            .next_in(70.0, 100.0);
        let veggie_count = ((count as f64 * quota / 100.0).ceil() as usize).min(count);

        let (veggie, other): (Vec<Dish>, Vec<Dish>) =
            pool.into_iter().partition_map(|dish| {
                if dish.diet.is_vegetarian() {
                    Either::Left(dish)
                } else {
                    Either::Right(dish)
                }
            });

        let mut menu = Vec::with_capacity(count);
        let mut veggie = veggie.into_iter();
        menu.extend(veggie.by_ref().take(veggie_count));
        menu.extend(other.into_iter().take(count - veggie_count));
        if menu.len() < count {
            let shortfall = count - menu.len();
            menu.extend(veggie.take(shortfall));
        }
        menu
    }
}

/// Deterministic menu size in `5..=8`, seeded per restaurant identity.
fn menu_size(stable_identity: &str) -> usize {
    let roll = SeededRng::labeled(stable_identity, "menu-size").next_f64();
    5 + (roll * 4.0) as usize
}
