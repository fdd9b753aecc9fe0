//! Restaurant location (store) domain model.
//!
//! A location exclusively owns its embedded [`Address`] value and its
//! `menu` of [`Item`]s; neither is shared across locations. Embedded
//! entities keep their Base shape — they carry no independent
//! Create/Update/Read distinction inside a location payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::address::Address;
use crate::models::item::Item;

/// A restaurant location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Server-generated store ID; the authoritative identity for the
    /// resource.
    pub id: Uuid,
    pub address: Address,
    /// Menu in insertion order. No uniqueness constraint on item
    /// names; each item carries its own id.
    pub menu: Vec<Item>,
}

/// Creation payload for a new location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLocation {
    pub id: Uuid,
    pub address: Address,
    pub menu: Vec<Item>,
}

/// Partial update; the store ID comes from the request path.
///
/// A present `address` replaces the whole embedded address; a present
/// `menu` replaces the whole list (no per-item patching). Absent and
/// empty `menu` are distinct: `None` leaves the menu unchanged,
/// `Some(vec![])` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub address: Option<Address>,
    pub menu: Option<Vec<Item>>,
}

/// Representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRead {
    #[serde(flatten)]
    pub location: Location,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

impl CreateLocation {
    /// Promote a validated creation payload to the Read shape at time
    /// `now`. `now` must be a single clock read for the operation.
    #[must_use]
    pub fn into_read(self, now: DateTime<Utc>) -> LocationRead {
        LocationRead {
            location: Location {
                id: self.id,
                address: self.address,
                menu: self.menu,
            },
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateLocation {
    /// Merge this payload onto the stored instance for `target`.
    ///
    /// Replacement is wholesale: a supplied menu replaces the entire
    /// list and a supplied address replaces the entire embedded value.
    /// `id` and `created_at` never change; `updated_at` is set to
    /// `now`. Fails with [`Error::NotFound`] when no existing instance
    /// is supplied.
    pub fn apply(
        self,
        target: Uuid,
        existing: Option<&LocationRead>,
        now: DateTime<Utc>,
    ) -> Result<LocationRead> {
        let existing = existing.ok_or(Error::NotFound {
            entity: "location",
            id: target,
        })?;

        Ok(LocationRead {
            location: Location {
                id: existing.location.id,
                address: self
                    .address
                    .unwrap_or_else(|| existing.location.address.clone()),
                menu: self.menu.unwrap_or_else(|| existing.location.menu.clone()),
            },
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// True when every field is omitted (a no-op payload).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.menu.is_none()
    }
}
