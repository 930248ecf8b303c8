//! Tests for the establishment registry: lookup semantics and JSON loading.
use greenfork::prelude::*;

#[test]
fn curated_registry_has_the_demo_venues() {
    let registry = EstablishmentRegistry::curated();
    assert_eq!(registry.len(), 4);
    for name in ["Le Paris 17", "Dar El Bey", "Resto 17", "Papilla"] {
        let establishment = registry.find_by_name(name).unwrap();
        assert!(!establishment.menu.is_empty(), "{name} has no menu");
    }
}

#[test]
fn lookup_is_case_insensitive_and_bidirectional() {
    let registry = EstablishmentRegistry::curated();
    assert!(registry.find_by_name("DAR EL BEY").is_some());
    assert!(registry.find_by_name("el bey").is_some());
    assert!(
        registry
            .find_by_name("Restaurant Dar El Bey - Bd Bessières")
            .is_some()
    );
    assert!(registry.find_by_name("Chez Marcel").is_none());
    assert!(registry.find_by_name("").is_none());
}

#[test]
fn registry_round_trips_through_json() {
    let registry = EstablishmentRegistry::curated();
    let json = serde_json::to_string(&registry).unwrap();
    let reloaded = EstablishmentRegistry::from_json(&json).unwrap();
    assert_eq!(reloaded.len(), registry.len());
    assert!(reloaded.find_by_name("Papilla").is_some());
}

#[test]
fn duplicate_establishments_are_rejected() {
    let json = r#"{
        "establishments": [
            {"name": "Twin", "cuisine": "Test", "location": "Nowhere", "menu": []},
            {"name": "twin", "cuisine": "Test", "location": "Nowhere", "menu": []}
        ]
    }"#;
    let err = EstablishmentRegistry::from_json(json).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateEstablishment(_)));
    assert!(err.to_string().contains("twin"));
}

#[test]
fn duplicate_dish_ids_are_rejected() {
    let json = r#"{
        "establishments": [
            {
                "name": "Solo",
                "cuisine": "Test",
                "location": "Nowhere",
                "menu": [
                    {"id": "1", "name": "A", "description": "", "price": 5.0,
                     "diet": "vegan", "allergens": []},
                    {"id": "1", "name": "B", "description": "", "price": 6.0,
                     "diet": "omnivore", "allergens": ["gluten"]}
                ]
            }
        ]
    }"#;
    let err = EstablishmentRegistry::from_json(json).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateDishId { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = EstablishmentRegistry::from_json("{not json").unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = EstablishmentRegistry::from_file("/nonexistent/registry.json").unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/registry.json"));
}

#[test]
fn stable_identity_helper_rounds_coordinates() {
    let id = RestaurantDescriptor::stable_identity_for("Dar El Bey", 48.8812, 2.3247);
    assert_eq!(id, "dar-el-bey-48.88-2.32");

    // Jitter within a block maps to the same identity.
    let wobbly = RestaurantDescriptor::stable_identity_for("Dar El Bey", 48.8790, 2.3233);
    assert_eq!(wobbly, id);
}
