//! Menu item domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A product on a location's menu.
///
/// `ingredients` order is display order; it carries no identity —
/// identity is `id`, and duplicate names within a menu are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Persistent item ID (server-generated).
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Creation payload. The ID is server-generated; a client-supplied
/// value is accepted only as an idempotency hint, never trusted as
/// identity beyond syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Partial update; the item ID comes from the request path, not the
/// body. `None` = leave unchanged. For `ingredients`, `Some(vec![])`
/// clears the list — absent and empty are distinct on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

/// Representation returned to clients: the base shape plus
/// server-maintained timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRead {
    #[serde(flatten)]
    pub item: Item,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

impl CreateItem {
    /// Promote a validated creation payload to the Read shape at time
    /// `now`. `now` must be a single clock read for the operation.
    #[must_use]
    pub fn into_read(self, now: DateTime<Utc>) -> ItemRead {
        ItemRead {
            item: Item {
                id: self.id,
                name: self.name,
                ingredients: self.ingredients,
            },
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateItem {
    /// Merge this payload onto the stored instance for `target`.
    ///
    /// Present fields replace the existing value wholesale; omitted
    /// fields are retained. `id` and `created_at` never change;
    /// `updated_at` is set to `now`. Fails with [`Error::NotFound`]
    /// when no existing instance is supplied — this layer never
    /// fabricates a default to merge onto.
    pub fn apply(self, target: Uuid, existing: Option<&ItemRead>, now: DateTime<Utc>) -> Result<ItemRead> {
        let existing = existing.ok_or(Error::NotFound {
            entity: "item",
            id: target,
        })?;

        Ok(ItemRead {
            item: Item {
                id: existing.item.id,
                name: self.name.unwrap_or_else(|| existing.item.name.clone()),
                ingredients: self
                    .ingredients
                    .unwrap_or_else(|| existing.item.ingredients.clone()),
            },
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// True when every field is omitted (a no-op payload).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none()
    }
}
