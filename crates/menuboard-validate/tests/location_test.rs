//! Composite (embedding) validation tests for locations.

use chrono::{DateTime, Utc};
use menuboard_core::defaults::DefaultSource;
use menuboard_core::error::Constraint;
use menuboard_validate::location;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

struct SeqDefaults {
    next: AtomicU32,
}

impl SeqDefaults {
    fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }
}

impl DefaultSource for SeqDefaults {
    fn new_id(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
    }

    fn now(&self) -> DateTime<Utc> {
        "2025-01-15T10:20:30Z".parse().unwrap()
    }
}

fn valid_address() -> Value {
    json!({
        "street": "600 W 125th St",
        "city": "New York",
        "state": "NY",
        "postal_code": "10027",
        "country": "US",
    })
}

#[test]
fn valid_composite_payload_passes() {
    let payload = json!({
        "address": valid_address(),
        "menu": [
            {"name": "Big Mac", "ingredients": ["Mac Sauce", "Bun"]},
            {"name": "Fries"},
        ],
    });

    let created = location::create_location(&payload, &SeqDefaults::new()).unwrap();
    assert_eq!(created.menu.len(), 2);
    assert_eq!(created.menu[0].name, "Big Mac");
    assert_eq!(created.menu[1].ingredients, Vec::<String>::new());
    assert_eq!(created.address.city, "New York");
}

#[test]
fn embedded_entities_get_generated_ids() {
    let payload = json!({
        "address": valid_address(),
        "menu": [{"name": "Big Mac"}, {"name": "Big Mac"}],
    });

    let created = location::create_location(&payload, &SeqDefaults::new()).unwrap();
    // Duplicate names are fine; each embedded item still has its own id.
    assert_ne!(created.menu[0].id, created.menu[1].id);
    assert_ne!(created.id, created.address.id);
}

#[test]
fn one_invalid_menu_item_is_reported_by_index_only() {
    let payload = json!({
        "address": valid_address(),
        "menu": [
            {"name": "Big Mac"},
            {"ingredients": ["Potato"]},
            {"name": "McFlurry"},
        ],
    });

    let err = location::create_location(&payload, &SeqDefaults::new()).unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["menu[1].name"]);
}

#[test]
fn nested_address_violations_carry_the_field_prefix() {
    let payload = json!({
        "address": {"street": "600 W 125th St", "city": "New York"},
        "menu": [],
    });

    let err = location::create_location(&payload, &SeqDefaults::new()).unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(
        paths,
        vec!["address.state", "address.postal_code", "address.country"]
    );
}

#[test]
fn missing_address_is_required() {
    let err =
        location::create_location(&json!({"menu": []}), &SeqDefaults::new()).unwrap_err();
    assert_eq!(err.violations[0].path, "address");
    assert_eq!(err.violations[0].constraint, Constraint::Required);
}

#[test]
fn absent_menu_defaults_to_empty() {
    let payload = json!({"address": valid_address()});
    let created = location::create_location(&payload, &SeqDefaults::new()).unwrap();
    assert!(created.menu.is_empty());
}

#[test]
fn menu_must_be_a_sequence() {
    let payload = json!({"address": valid_address(), "menu": "Big Mac"});
    let err = location::create_location(&payload, &SeqDefaults::new()).unwrap_err();
    assert_eq!(err.violations[0].path, "menu");
    assert_eq!(err.violations[0].constraint, Constraint::ExpectedArray);
}

#[test]
fn nested_and_sibling_violations_all_surface_together() {
    let payload = json!({
        "address": {"street": "600 W 125th St"},
        "menu": [{"ingredients": []}],
    });

    let err = location::create_location(&payload, &SeqDefaults::new()).unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert!(paths.contains(&"address.city"));
    assert!(paths.contains(&"menu[0].name"));
}

#[test]
fn update_with_absent_fields_is_empty() {
    let update = location::update_location(&json!({}), &SeqDefaults::new()).unwrap();
    assert!(update.is_empty());
}

#[test]
fn update_menu_is_validated_at_the_base_shape() {
    let payload = json!({"menu": [{"name": "Big Mac"}]});
    let update = location::update_location(&payload, &SeqDefaults::new()).unwrap();
    let menu = update.menu.unwrap();
    assert_eq!(menu[0].name, "Big Mac");
    assert!(!menu[0].id.is_nil(), "embedded item id is generated");
}

#[test]
fn update_rejects_an_invalid_embedded_address() {
    let payload = json!({"address": {"street": "1 Broadway"}});
    let err = location::update_location(&payload, &SeqDefaults::new()).unwrap_err();
    assert!(err.paths().all(|p| p.starts_with("address.")));
}

#[test]
fn read_round_trip_through_the_base_validator() {
    let defaults = SeqDefaults::new();
    let read = location::location_read(
        &json!({
            "address": valid_address(),
            "menu": [{"name": "Big Mac", "ingredients": ["Mac Sauce"]}],
            "created_at": "2025-01-15T10:20:30Z",
            "updated_at": "2025-01-16T12:00:00Z",
        }),
        &defaults,
    )
    .unwrap();

    let serialized = serde_json::to_value(&read).unwrap();
    let base = location::location(&serialized, &defaults).unwrap();
    assert_eq!(base, read.location);
}
