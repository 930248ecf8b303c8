use clap::Parser;
use greenfork::prelude::*;
use greenfork::scoring::filter;
use std::time::Instant;

/// A deterministic menu-generation and dish-scoring engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Restaurant name, e.g. "Sushi Zen" or "Dar El Bey"
    name: String,

    /// Stable identity override (defaults to a slug of the name)
    #[arg(long)]
    identity: Option<String>,

    /// Provider category tag, e.g. "japanese_restaurant"
    #[arg(short, long)]
    category: Option<String>,

    /// Treat the venue as exclusively vegetarian/vegan
    #[arg(long)]
    veggie: bool,

    /// Comma-separated user allergens, e.g. "gluten,lait"
    #[arg(short, long, default_value = "")]
    allergies: String,

    /// Optional path to a JSON registry of known establishments
    #[arg(short, long)]
    registry: Option<String>,

    /// Print the scored menu as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let engine = match &cli.registry {
        Some(path) => {
            let registry = EstablishmentRegistry::from_file(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load registry '{}': {}", path, e))
            });
            MenuEngine::builder().registry(registry).build()
        }
        None => MenuEngine::new(),
    };

    let restaurant = RestaurantDescriptor {
        stable_identity: cli
            .identity
            .clone()
            .unwrap_or_else(|| RestaurantDescriptor::named(&cli.name).stable_identity),
        name: cli.name.clone(),
        declared_category: cli.category.clone(),
        veggie_venue: cli.veggie,
    };

    let allergies: Vec<String> = cli
        .allergies
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect();

    let generate_start = Instant::now();
    let menu = engine.scored_menu(&restaurant, &allergies);
    let generate_duration = generate_start.elapsed();

    if cli.json {
        let json = serde_json::to_string_pretty(menu.as_ref())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize menu: {}", e)));
        println!("{}", json);
        return;
    }

    println!(
        "Menu for '{}' ({} dishes, generated in {:.2?})",
        restaurant.name,
        menu.len(),
        generate_duration
    );
    if !allergies.is_empty() {
        println!("Declared allergies: {}", allergies.join(", "));
    }

    let mut ranked: Vec<EnrichedDish> = menu.iter().cloned().collect();
    filter::rank_by_safety(&mut ranked, &allergies);

    for dish in &ranked {
        let marker = if filter::is_safe(&dish.dish, &allergies) {
            "SAFE  "
        } else {
            "      "
        };
        println!(
            "{} {:<5} {:<35} total {:>4}  (planet {:>4} | pleasure {:>4} | fit {:>4})  {:.2} EUR",
            marker,
            dish.dish.id,
            dish.dish.name,
            dish.total_score,
            dish.sub_scores.planet,
            dish.sub_scores.pleasure,
            dish.sub_scores.fit,
            dish.dish.price,
        );
        if !dish.dish.allergens.is_empty() {
            println!("            allergens: {}", dish.dish.allergens.join(", "));
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
