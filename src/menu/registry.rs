use crate::error::RegistryError;
use crate::menu::{Diet, Dish};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;

/// A real venue with a hand-authored, fixed menu.
///
/// Registry entries exist so the application can showcase accurate data for a
/// small demo set of known places; they bypass generic composition entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Establishment {
    pub name: String,
    /// Free-form cuisine label, e.g. "Bistrot Parisien".
    pub cuisine: String,
    pub location: String,
    pub menu: Vec<Dish>,
}

/// A curated registry of known establishments, consulted before generic
/// template composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstablishmentRegistry {
    establishments: Vec<Establishment>,
}

impl EstablishmentRegistry {
    /// A registry with no entries; every venue composes generically.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a registry from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Finds an establishment by case-insensitive substring match in either
    /// direction, so "Le Paris 17" matches both "paris 17" and
    /// "Restaurant Le Paris 17 - Bistrot".
    pub fn find_by_name(&self, name: &str) -> Option<&Establishment> {
        if name.is_empty() {
            return None;
        }
        let needle = name.to_lowercase();
        self.establishments.iter().find(|e| {
            let entry = e.name.to_lowercase();
            needle.contains(&entry) || entry.contains(&needle)
        })
    }

    pub fn establishments(&self) -> &[Establishment] {
        &self.establishments
    }

    pub fn len(&self) -> usize {
        self.establishments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.establishments.is_empty()
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for (a, b) in self.establishments.iter().tuple_combinations() {
            if a.name.eq_ignore_ascii_case(&b.name) {
                return Err(RegistryError::DuplicateEstablishment(b.name.clone()));
            }
        }
        for establishment in &self.establishments {
            if let Some(dish) = establishment
                .menu
                .iter()
                .duplicates_by(|d| d.id.clone())
                .next()
            {
                return Err(RegistryError::DuplicateDishId {
                    establishment: establishment.name.clone(),
                    dish_id: dish.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// The built-in demo registry: four venues around the Paris 17e campus,
    /// with menus authored by hand.
    pub fn curated() -> Self {
        Self {
            establishments: vec![
                le_paris_17(),
                dar_el_bey(),
                resto_17(),
                papilla(),
            ],
        }
    }
}

fn le_paris_17() -> Establishment {
    Establishment {
        name: "Le Paris 17".to_string(),
        cuisine: "Bistrot Parisien".to_string(),
        location: "Rue Guersant, 75017 Paris".to_string(),
        menu: vec![
            Dish::new(
                "101",
                "Foie de veau persillé",
                "Tranche de foie de veau poêlée au beurre, ail et persil, servie avec purée maison",
                20.00,
                Diet::Omnivore,
                &["lait"],
            ),
            Dish::new(
                "102",
                "Ravioles du Dauphiné",
                "Ravioles pochées à la crème de ciboulette et comté",
                15.00,
                Diet::Vegetarian,
                &["gluten", "lait", "oeufs"],
            ),
            Dish::new(
                "103",
                "Tartare de Bœuf Tradition",
                "Viande de bœuf crue hachée au couteau, câpres, oignons, jaune d'oeuf, servi avec frites",
                18.00,
                Diet::Omnivore,
                &["oeufs", "moutarde"],
            ),
            Dish::new(
                "104",
                "Magret de Canard entier",
                "Magret rôti rosé, sauce au miel et épices, pommes grenailles",
                24.00,
                Diet::Omnivore,
                &[],
            ),
            Dish::new(
                "105",
                "Harengs Pommes à l'Huile",
                "Filets de harengs marinés, pommes de terre tièdes, carottes et oignons",
                9.00,
                Diet::Omnivore,
                &["poisson"],
            ),
            Dish::new(
                "106",
                "Salade de Chèvre Chaud",
                "Mesclun, toasts de chèvre gratiné, noix, miel",
                14.00,
                Diet::Vegetarian,
                &["gluten", "lait", "fruits à coques"],
            ),
            Dish::new(
                "107",
                "Omelette aux Fines Herbes",
                "Omelette baveuse, ciboulette, persil, cerfeuil, salade verte",
                12.00,
                Diet::Vegetarian,
                &["oeufs", "lait"],
            ),
            Dish::new(
                "108",
                "Tarte Tatin",
                "Tarte aux pommes caramélisées renversée, crème fraîche",
                8.00,
                Diet::Vegetarian,
                &["gluten", "lait", "oeufs"],
            ),
        ],
    }
}

fn dar_el_bey() -> Establishment {
    Establishment {
        name: "Dar El Bey".to_string(),
        cuisine: "Tunisien / Maghreb".to_string(),
        location: "Boulevard Bessières, 75017 Paris".to_string(),
        menu: vec![
            Dish::new(
                "201",
                "Couscous Merguez",
                "Semoule fine, pois chiches, légumes mijotés (navet, carotte, courgette) et merguez grillées",
                12.00,
                Diet::Omnivore,
                &["gluten"],
            ),
            Dish::new(
                "202",
                "Ojja Merguez",
                "Plat traditionnel tunisien aux oeufs brouillés, tomates, poivrons, épices et merguez",
                11.00,
                Diet::Omnivore,
                &["oeufs"],
            ),
            Dish::new(
                "203",
                "Brick à l'oeuf",
                "Feuille de brick croustillante farcie à l'oeuf, persil et pommes de terre",
                6.00,
                Diet::Vegetarian,
                &["gluten", "oeufs"],
            ),
            Dish::new(
                "204",
                "Thé à la menthe",
                "Thé vert chaud à la menthe fraîche et pignons de pin",
                2.50,
                Diet::Vegan,
                &["fruits à coques"],
            ),
            Dish::new(
                "205",
                "Couscous Légumes",
                "Semoule fine, pois chiches, légumes mijotés (navet, carotte, courgette, potiron)",
                10.00,
                Diet::Vegan,
                &["gluten"],
            ),
            Dish::new(
                "206",
                "Salade Mechouia",
                "Salade de poivrons et tomates grillés, ail, huile d'olive, harissa légère",
                5.00,
                Diet::Vegan,
                &[],
            ),
            Dish::new(
                "207",
                "Ojja aux Légumes",
                "Oeufs brouillés, tomates, poivrons, oignons, épices (sans viande)",
                9.00,
                Diet::Vegetarian,
                &["oeufs"],
            ),
            Dish::new(
                "208",
                "Makroud aux Dattes",
                "Pâtisserie traditionnelle à la semoule et pâte de dattes, miel",
                3.50,
                Diet::Vegetarian,
                &["gluten"],
            ),
        ],
    }
}

fn resto_17() -> Establishment {
    Establishment {
        name: "Resto 17".to_string(),
        cuisine: "Fast Food / Tacos".to_string(),
        location: "Avenue de Clichy, 75017 Paris".to_string(),
        menu: vec![
            Dish::new(
                "301",
                "French Tacos XL",
                "Galette de blé, nuggets, cordon bleu, frites, sauce fromagère maison",
                10.50,
                Diet::Omnivore,
                &["gluten", "lait", "oeufs"],
            ),
            Dish::new(
                "302",
                "Menu Chicken Wings",
                "8 pièces de wings de poulet épicées frites, servies avec frites et coca",
                8.50,
                Diet::Omnivore,
                &["gluten"],
            ),
            Dish::new(
                "303",
                "Kebab Grec Frites",
                "Pain rond, viande de veau et dinde à la broche, salade tomates oignons, sauce blanche",
                9.00,
                Diet::Omnivore,
                &["gluten", "lait"],
            ),
            Dish::new(
                "304",
                "Tenders x5",
                "Filets de poulet panés croustillants",
                7.00,
                Diet::Omnivore,
                &["gluten", "oeufs"],
            ),
            Dish::new(
                "305",
                "Frites Maison",
                "Portion de frites fraîches croustillantes",
                3.50,
                Diet::Vegan,
                &[],
            ),
            Dish::new(
                "306",
                "Tacos Végé",
                "Galette de blé, falafels, légumes grillés, sauce fromagère",
                9.00,
                Diet::Vegetarian,
                &["gluten", "lait", "sésame"],
            ),
            Dish::new(
                "307",
                "Salade Mixte",
                "Salade verte, tomates, maïs, carottes râpées, vinaigrette",
                5.00,
                Diet::Vegan,
                &["moutarde"],
            ),
            Dish::new(
                "308",
                "Frites Cheddar",
                "Frites nappées de sauce cheddar fondu",
                5.50,
                Diet::Vegetarian,
                &["lait"],
            ),
        ],
    }
}

fn papilla() -> Establishment {
    Establishment {
        name: "Papilla".to_string(),
        cuisine: "Italien".to_string(),
        location: "Rue de Courcelles / Batignolles, 75017 Paris".to_string(),
        menu: vec![
            Dish::new(
                "401",
                "Gnocchi à la Sorrentina",
                "Gnocchi de pomme de terre, sauce tomate San Marzano, mozzarella fior di latte fondue et basilic",
                16.00,
                Diet::Vegetarian,
                &["gluten", "lait"],
            ),
            Dish::new(
                "402",
                "Burrata des Pouilles",
                "Burrata crémeuse 125g, tomates cerises, roquette et filet d'huile de truffe",
                18.00,
                Diet::Vegetarian,
                &["lait"],
            ),
            Dish::new(
                "403",
                "Lasagne Bolognaise",
                "Pâtes fraîches, ragù de boeuf mijoté, béchamel, parmesan",
                17.00,
                Diet::Omnivore,
                &["gluten", "lait", "oeufs"],
            ),
            Dish::new(
                "404",
                "Pizza Margherita",
                "Sauce tomate San Marzano, mozzarella fior di latte, basilic frais",
                12.00,
                Diet::Vegetarian,
                &["gluten", "lait"],
            ),
            Dish::new(
                "405",
                "Pizza Quattro Formaggi",
                "Mozzarella, gorgonzola, parmesan, chèvre",
                15.00,
                Diet::Vegetarian,
                &["gluten", "lait"],
            ),
            Dish::new(
                "406",
                "Penne Arrabiata",
                "Penne al dente, sauce tomate épicée, ail, piment, persil",
                13.00,
                Diet::Vegan,
                &["gluten"],
            ),
            Dish::new(
                "407",
                "Pizza Marinara",
                "Sauce tomate, ail, origan, huile d'olive (sans fromage)",
                10.00,
                Diet::Vegan,
                &["gluten"],
            ),
            Dish::new(
                "408",
                "Tiramisu Maison",
                "Mascarpone, biscuits savoiardi, café espresso, cacao amer",
                8.00,
                Diet::Vegetarian,
                &["gluten", "lait", "oeufs"],
            ),
        ],
    }
}
