use crate::menu::{Category, Diet, Dish};

/// Curated dish template pools, one per cuisine category.
///
/// Pools are authored data, not computed: the composer shuffles a pool
/// deterministically and takes a subset, so template ids only need to be
/// unique within their own pool.
#[derive(Debug, Clone)]
pub struct DishCatalog {
    asian: Vec<Dish>,
    japanese: Vec<Dish>,
    italian: Vec<Dish>,
    cafe: Vec<Dish>,
    fastfood: Vec<Dish>,
    bakery: Vec<Dish>,
    generic: Vec<Dish>,
}

impl DishCatalog {
    /// The built-in template pools.
    pub fn curated() -> Self {
        Self {
            asian: asian_pool(),
            japanese: japanese_pool(),
            italian: italian_pool(),
            cafe: cafe_pool(),
            fastfood: fastfood_pool(),
            bakery: bakery_pool(),
            generic: generic_pool(),
        }
    }

    /// The template pool for a category.
    pub fn pool(&self, category: Category) -> &[Dish] {
        match category {
            Category::Asian => &self.asian,
            Category::Japanese => &self.japanese,
            Category::Italian => &self.italian,
            Category::Cafe => &self.cafe,
            Category::FastFood => &self.fastfood,
            Category::Bakery => &self.bakery,
            Category::Default => &self.generic,
        }
    }

    /// Replaces the pool for a category, e.g. to test composition rules with
    /// a hand-built pool or to localize the data.
    pub fn set_pool(&mut self, category: Category, dishes: Vec<Dish>) {
        match category {
            Category::Asian => self.asian = dishes,
            Category::Japanese => self.japanese = dishes,
            Category::Italian => self.italian = dishes,
            Category::Cafe => self.cafe = dishes,
            Category::FastFood => self.fastfood = dishes,
            Category::Bakery => self.bakery = dishes,
            Category::Default => self.generic = dishes,
        }
    }
}

impl Default for DishCatalog {
    fn default() -> Self {
        Self::curated()
    }
}

fn asian_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "a-1",
            "Pad Thaï Végétarien",
            "Nouilles de riz sautées au tofu, légumes croquants, cacahuètes, citron vert",
            12.90,
            Diet::Vegan,
            &["arachides", "soja", "gluten"],
        ),
        Dish::new(
            "a-2",
            "Curry Vert Légumes",
            "Curry thaï au lait de coco, légumes de saison, basilic thaï, riz jasmin",
            13.50,
            Diet::Vegan,
            &[],
        ),
        Dish::new(
            "a-3",
            "Nems Végétariens (4 pcs)",
            "Nems croustillants aux légumes, sauce nuoc mam végétale",
            6.90,
            Diet::Vegan,
            &["gluten", "soja"],
        ),
        Dish::new(
            "a-4",
            "Riz Sauté aux Légumes",
            "Riz sauté au wok, œuf, légumes variés, sauce soja",
            10.90,
            Diet::Vegetarian,
            &["oeufs", "soja", "gluten"],
        ),
        Dish::new(
            "a-5",
            "Soupe Miso",
            "Bouillon miso, tofu soyeux, wakame, oignons verts",
            4.90,
            Diet::Vegan,
            &["soja"],
        ),
        Dish::new(
            "a-6",
            "Edamame",
            "Fèves de soja vapeur, fleur de sel",
            5.50,
            Diet::Vegan,
            &["soja"],
        ),
        Dish::new(
            "a-7",
            "Pad Thaï Crevettes",
            "Nouilles de riz sautées aux crevettes, cacahuètes, citron vert",
            14.90,
            Diet::Omnivore,
            &["crustacés", "arachides", "soja", "gluten"],
        ),
        Dish::new(
            "a-8",
            "Poulet Thaï Basilic",
            "Émincé de poulet sauté au basilic thaï, piment, riz jasmin",
            13.90,
            Diet::Omnivore,
            &["soja"],
        ),
        Dish::new(
            "a-9",
            "Bœuf Loc Lac",
            "Bœuf sauté à la citronnelle, oignons, poivrons, riz",
            15.90,
            Diet::Omnivore,
            &["soja"],
        ),
        Dish::new(
            "a-10",
            "Canard Laqué",
            "Canard laqué croustillant, crêpes, concombre, ciboule",
            18.90,
            Diet::Omnivore,
            &["gluten", "soja"],
        ),
        Dish::new(
            "a-11",
            "Nems au Porc (4 pcs)",
            "Nems traditionnels au porc et légumes",
            6.90,
            Diet::Omnivore,
            &["gluten", "soja"],
        ),
        Dish::new(
            "a-12",
            "Bo Bun",
            "Vermicelles, bœuf sauté, nems, crudités, cacahuètes",
            14.50,
            Diet::Omnivore,
            &["gluten", "arachides", "soja"],
        ),
    ]
}

fn japanese_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "j-1",
            "Maki Avocat (6 pcs)",
            "Avocat, riz vinaigré, nori",
            5.90,
            Diet::Vegan,
            &["sésame"],
        ),
        Dish::new(
            "j-2",
            "Maki Concombre (6 pcs)",
            "Concombre frais, riz vinaigré, nori",
            4.90,
            Diet::Vegan,
            &["sésame"],
        ),
        Dish::new(
            "j-3",
            "California Végétarien (6 pcs)",
            "Avocat, concombre, carotte, mayonnaise végétale",
            7.90,
            Diet::Vegan,
            &["sésame", "soja"],
        ),
        Dish::new(
            "j-4",
            "Tempura de Légumes",
            "Assortiment de légumes en beignet léger, sauce tentsuyu",
            9.90,
            Diet::Vegetarian,
            &["gluten", "oeufs"],
        ),
        Dish::new(
            "j-5",
            "Salade de Choux",
            "Chou blanc émincé, carotte, sauce sésame",
            4.90,
            Diet::Vegan,
            &["sésame"],
        ),
        Dish::new(
            "j-6",
            "Riz Nature",
            "Bol de riz japonais nature",
            3.00,
            Diet::Vegan,
            &[],
        ),
    ]
}

fn italian_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "i-1",
            "Pizza Margherita",
            "Sauce tomate, mozzarella fior di latte, basilic frais",
            11.00,
            Diet::Vegetarian,
            &["gluten", "lait"],
        ),
        Dish::new(
            "i-2",
            "Pizza Végétarienne",
            "Sauce tomate, mozzarella, poivrons, champignons, oignons, olives",
            13.50,
            Diet::Vegetarian,
            &["gluten", "lait"],
        ),
        Dish::new(
            "i-3",
            "Pizza Marinara",
            "Sauce tomate, ail, origan, huile d'olive - Sans fromage",
            9.00,
            Diet::Vegan,
            &["gluten"],
        ),
        Dish::new(
            "i-4",
            "Pâtes Arrabiata",
            "Penne, sauce tomate épicée, ail, persil",
            11.90,
            Diet::Vegan,
            &["gluten"],
        ),
        Dish::new(
            "i-5",
            "Risotto aux Champignons",
            "Risotto crémeux aux champignons de saison, parmesan",
            14.90,
            Diet::Vegetarian,
            &["lait"],
        ),
        Dish::new(
            "i-6",
            "Bruschetta Tomate",
            "Tomates fraîches, basilic, ail, huile d'olive",
            7.90,
            Diet::Vegan,
            &["gluten"],
        ),
        Dish::new(
            "i-7",
            "Pizza Diavola",
            "Sauce tomate, mozzarella, salami piquant, piments",
            13.50,
            Diet::Omnivore,
            &["gluten", "lait"],
        ),
        Dish::new(
            "i-8",
            "Pizza Regina",
            "Sauce tomate, mozzarella, jambon, champignons",
            13.00,
            Diet::Omnivore,
            &["gluten", "lait"],
        ),
        Dish::new(
            "i-9",
            "Pizza Calzone",
            "Chausson farci jambon, mozzarella, champignons, œuf",
            14.50,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "i-10",
            "Spaghetti Carbonara",
            "Spaghetti, pancetta, œuf, parmesan, poivre noir",
            13.90,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "i-11",
            "Spaghetti Bolognaise",
            "Spaghetti, sauce à la viande de bœuf mijotée, parmesan",
            13.50,
            Diet::Omnivore,
            &["gluten", "lait"],
        ),
        Dish::new(
            "i-12",
            "Saltimbocca",
            "Escalope de veau, jambon de Parme, sauge, vin blanc",
            18.90,
            Diet::Omnivore,
            &["sulfites"],
        ),
        Dish::new(
            "i-13",
            "Tiramisu",
            "Mascarpone, biscuits, café, cacao",
            7.00,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
    ]
}

fn cafe_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "c-1",
            "Croissant",
            "Croissant pur beurre, doré et feuilleté",
            2.20,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "c-2",
            "Tartine Avocat",
            "Pain de campagne, avocat écrasé, œuf poché, graines",
            9.90,
            Diet::Vegetarian,
            &["gluten", "oeufs", "sésame"],
        ),
        Dish::new(
            "c-3",
            "Salade Chèvre Chaud",
            "Mesclun, toasts de chèvre, noix, miel",
            12.90,
            Diet::Vegetarian,
            &["gluten", "lait", "fruits à coques"],
        ),
        Dish::new(
            "c-4",
            "Quiche aux Légumes",
            "Quiche maison aux légumes de saison",
            8.90,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "c-5",
            "Croque Légumes",
            "Pain de mie, légumes grillés, fromage fondu",
            9.50,
            Diet::Vegetarian,
            &["gluten", "lait"],
        ),
        Dish::new(
            "c-6",
            "Pancakes",
            "Pancakes moelleux, sirop d'érable, fruits frais",
            8.90,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "c-7",
            "Granola Bowl",
            "Yaourt, granola maison, fruits frais, miel",
            7.90,
            Diet::Vegetarian,
            &["lait", "fruits à coques"],
        ),
    ]
}

fn fastfood_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "f-1",
            "Burger Végétarien",
            "Steak végétal, cheddar, salade, tomate, oignon, sauce maison",
            12.90,
            Diet::Vegetarian,
            &["gluten", "lait", "soja"],
        ),
        Dish::new(
            "f-2",
            "Frites Maison",
            "Frites fraîches croustillantes",
            4.50,
            Diet::Vegan,
            &[],
        ),
        Dish::new(
            "f-3",
            "Frites au Cheddar",
            "Frites nappées de cheddar fondu",
            6.90,
            Diet::Vegetarian,
            &["lait"],
        ),
        Dish::new(
            "f-4",
            "Onion Rings",
            "Rondelles d'oignon panées et frites",
            5.90,
            Diet::Vegetarian,
            &["gluten", "oeufs"],
        ),
        Dish::new(
            "f-5",
            "Wrap Falafels",
            "Falafels, houmous, crudités, sauce yaourt",
            9.90,
            Diet::Vegetarian,
            &["gluten", "sésame", "lait"],
        ),
        Dish::new(
            "f-6",
            "Burger Classic",
            "Steak haché 150g, cheddar, salade, tomate, oignon, sauce burger",
            11.90,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "f-7",
            "Burger Bacon",
            "Steak haché, bacon crispy, cheddar, oignons caramélisés",
            13.90,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "f-8",
            "Double Cheese",
            "Double steak, double cheddar, cornichons, oignons, sauce spéciale",
            14.90,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "f-9",
            "Chicken Burger",
            "Filet de poulet pané, salade, tomate, mayo",
            11.90,
            Diet::Omnivore,
            &["gluten", "oeufs"],
        ),
        Dish::new(
            "f-10",
            "Nuggets (6 pcs)",
            "Nuggets de poulet croustillants, sauce au choix",
            7.90,
            Diet::Omnivore,
            &["gluten"],
        ),
        Dish::new(
            "f-11",
            "Hot Dog",
            "Saucisse de Francfort, pain brioché, oignons, moutarde, ketchup",
            8.90,
            Diet::Omnivore,
            &["gluten"],
        ),
        Dish::new(
            "f-12",
            "Fish Burger",
            "Filet de poisson pané, sauce tartare, salade",
            12.50,
            Diet::Omnivore,
            &["gluten", "poisson", "oeufs"],
        ),
    ]
}

fn bakery_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "b-1",
            "Pain au Chocolat",
            "Viennoiserie feuilletée au chocolat noir",
            2.40,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs", "soja"],
        ),
        Dish::new(
            "b-2",
            "Chausson aux Pommes",
            "Feuilleté aux pommes caramélisées",
            2.80,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "b-3",
            "Tarte aux Fruits",
            "Tarte du jour aux fruits de saison",
            5.90,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "b-4",
            "Éclair au Chocolat",
            "Pâte à choux, crème pâtissière chocolat",
            4.50,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "b-5",
            "Sandwich Veggie",
            "Pain complet, crudités, fromage frais, avocat",
            6.90,
            Diet::Vegetarian,
            &["gluten", "lait"],
        ),
        Dish::new(
            "b-6",
            "Cookie Chocolat",
            "Cookie moelleux aux pépites de chocolat",
            2.50,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
    ]
}

fn generic_pool() -> Vec<Dish> {
    vec![
        Dish::new(
            "d-1",
            "Salade du Marché",
            "Mesclun, légumes de saison, vinaigrette maison",
            11.90,
            Diet::Vegan,
            &["moutarde"],
        ),
        Dish::new(
            "d-2",
            "Assiette de Légumes Grillés",
            "Légumes de saison grillés, huile d'olive, herbes",
            12.90,
            Diet::Vegan,
            &[],
        ),
        Dish::new(
            "d-3",
            "Omelette aux Fines Herbes",
            "Omelette moelleuse, ciboulette, persil, salade verte",
            10.90,
            Diet::Vegetarian,
            &["oeufs", "lait"],
        ),
        Dish::new(
            "d-4",
            "Pâtes aux Légumes",
            "Penne, légumes sautés, sauce tomate maison",
            12.50,
            Diet::Vegan,
            &["gluten"],
        ),
        Dish::new(
            "d-5",
            "Soupe du Jour",
            "Soupe maison aux légumes de saison",
            6.90,
            Diet::Vegan,
            &[],
        ),
        Dish::new(
            "d-6",
            "Frites Maison",
            "Frites fraîches et croustillantes",
            4.50,
            Diet::Vegan,
            &[],
        ),
        Dish::new(
            "d-7",
            "Entrecôte Grillée",
            "Entrecôte de bœuf 300g, sauce au poivre, frites maison",
            22.90,
            Diet::Omnivore,
            &["lait"],
        ),
        Dish::new(
            "d-8",
            "Poulet Rôti",
            "Demi-poulet fermier rôti, pommes de terre grenaille",
            16.90,
            Diet::Omnivore,
            &[],
        ),
        Dish::new(
            "d-9",
            "Saumon Grillé",
            "Pavé de saumon, riz basmati, sauce citronnée",
            18.90,
            Diet::Omnivore,
            &["poisson"],
        ),
        Dish::new(
            "d-10",
            "Burger Classic",
            "Steak haché, cheddar, bacon, salade, tomate, oignon",
            14.90,
            Diet::Omnivore,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "d-11",
            "Tartare de Bœuf",
            "Bœuf cru assaisonné, câpres, oignon, frites",
            17.90,
            Diet::Omnivore,
            &["oeufs", "moutarde"],
        ),
        Dish::new(
            "d-12",
            "Moules Marinières",
            "Moules de bouchot, vin blanc, échalotes, frites",
            15.90,
            Diet::Omnivore,
            &["mollusques", "sulfites"],
        ),
        Dish::new(
            "d-13",
            "Cheese Cake",
            "Cheese cake crémeux, coulis de fruits rouges",
            7.50,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
        Dish::new(
            "d-14",
            "Fondant au Chocolat",
            "Moelleux au chocolat noir, cœur coulant",
            7.90,
            Diet::Vegetarian,
            &["gluten", "lait", "oeufs"],
        ),
    ]
}
