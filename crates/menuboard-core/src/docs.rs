//! Static schema-documentation fixtures.
//!
//! Canonical examples and field descriptions for API documentation
//! generation. These are declarative data, not runtime behavior: each
//! entity is described once, and every variant's view is derived from
//! that single table instead of duplicating the literals per variant.

use serde_json::{Value, json};

/// Documentation for one field of an entity.
#[derive(Debug, Clone, Copy)]
pub struct FieldDoc {
    pub name: &'static str,
    pub description: &'static str,
}

/// The four shapes of the variant pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Base,
    Create,
    Update,
    Read,
}

/// Documentation for one entity, shared across its variants.
#[derive(Clone, Copy)]
pub struct EntityDoc {
    pub entity: &'static str,
    base_fields: &'static [FieldDoc],
    base_example: fn() -> Value,
}

/// Timestamp fields appended to every Read variant.
const TIMESTAMP_FIELDS: [FieldDoc; 2] = [
    FieldDoc {
        name: "created_at",
        description: "Creation timestamp (UTC).",
    },
    FieldDoc {
        name: "updated_at",
        description: "Last update timestamp (UTC).",
    },
];

const EXAMPLE_CREATED_AT: &str = "2025-01-15T10:20:30Z";
const EXAMPLE_UPDATED_AT: &str = "2025-01-16T12:00:00Z";

impl EntityDoc {
    /// Field documentation for one variant of this entity.
    ///
    /// Update drops the identity field (it comes from the path) and
    /// Read appends the timestamp pair; Base and Create share the
    /// entity's own table.
    pub fn fields(&self, variant: Variant) -> Vec<FieldDoc> {
        match variant {
            Variant::Base | Variant::Create => self.base_fields.to_vec(),
            Variant::Update => self
                .base_fields
                .iter()
                .filter(|f| f.name != "id")
                .copied()
                .collect(),
            Variant::Read => {
                let mut fields = self.base_fields.to_vec();
                fields.extend_from_slice(&TIMESTAMP_FIELDS);
                fields
            }
        }
    }

    /// Canonical example value for one variant of this entity.
    #[must_use]
    pub fn example(&self, variant: Variant) -> Value {
        let mut example = (self.base_example)();
        match variant {
            Variant::Base | Variant::Create => {}
            Variant::Update => {
                if let Value::Object(map) = &mut example {
                    map.remove("id");
                }
            }
            Variant::Read => {
                if let Value::Object(map) = &mut example {
                    map.insert("created_at".into(), json!(EXAMPLE_CREATED_AT));
                    map.insert("updated_at".into(), json!(EXAMPLE_UPDATED_AT));
                }
            }
        }
        example
    }
}

pub const ITEM: EntityDoc = EntityDoc {
    entity: "item",
    base_fields: &[
        FieldDoc {
            name: "id",
            description: "Persistent Item ID (server-generated).",
        },
        FieldDoc {
            name: "name",
            description: "Name of the product",
        },
        FieldDoc {
            name: "ingredients",
            description: "Ingredients used in the product",
        },
    ],
    base_example: item_example,
};

pub const ADDRESS: EntityDoc = EntityDoc {
    entity: "address",
    base_fields: &[
        FieldDoc {
            name: "id",
            description: "Persistent Address ID (server-generated).",
        },
        FieldDoc {
            name: "street",
            description: "Street line of the address",
        },
        FieldDoc {
            name: "city",
            description: "City name",
        },
        FieldDoc {
            name: "state",
            description: "State or region code",
        },
        FieldDoc {
            name: "postal_code",
            description: "Postal code",
        },
        FieldDoc {
            name: "country",
            description: "ISO country code",
        },
    ],
    base_example: address_example,
};

pub const LOCATION: EntityDoc = EntityDoc {
    entity: "location",
    base_fields: &[
        FieldDoc {
            name: "id",
            description: "Server-generated store ID.",
        },
        FieldDoc {
            name: "address",
            description: "Location of the store",
        },
        FieldDoc {
            name: "menu",
            description: "List of items offered in the store",
        },
    ],
    base_example: location_example,
};

fn item_example() -> Value {
    json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Big Mac",
        "ingredients": [
            "Mac Sauce",
            "Diced Onions",
            "Shredded Lettuce",
            "Pickle",
            "American Cheese",
            "1/10 Lb Beef",
            "Salt",
            "Big Mac Bun"
        ]
    })
}

fn address_example() -> Value {
    json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "street": "600 W 125th St",
        "city": "New York",
        "state": "NY",
        "postal_code": "10027",
        "country": "US"
    })
}

fn location_example() -> Value {
    json!({
        "id": "99999999-9999-4999-8999-999999999999",
        "address": address_example(),
        "menu": [item_example()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_view_drops_id() {
        assert!(ITEM.fields(Variant::Update).iter().all(|f| f.name != "id"));
        assert!(ITEM.example(Variant::Update).get("id").is_none());
    }

    #[test]
    fn read_view_appends_timestamps() {
        let fields = LOCATION.fields(Variant::Read);
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert!(names.contains(&"created_at") && names.contains(&"updated_at"));

        let example = LOCATION.example(Variant::Read);
        assert_eq!(example["created_at"], json!(EXAMPLE_CREATED_AT));
    }

    #[test]
    fn base_and_create_share_the_entity_table() {
        assert_eq!(
            ADDRESS.example(Variant::Base),
            ADDRESS.example(Variant::Create)
        );
    }
}
