//! Postal address domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// The postal address of a location. All descriptive fields are
/// required text; presence is the only constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Persistent address ID (server-generated).
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Creation payload; the ID is server-generated when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddress {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Partial update; the address ID comes from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRead {
    #[serde(flatten)]
    pub address: Address,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

impl CreateAddress {
    /// Promote a validated creation payload to the Read shape at time
    /// `now`.
    #[must_use]
    pub fn into_read(self, now: DateTime<Utc>) -> AddressRead {
        AddressRead {
            address: Address {
                id: self.id,
                street: self.street,
                city: self.city,
                state: self.state,
                postal_code: self.postal_code,
                country: self.country,
            },
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateAddress {
    /// Merge this payload onto the stored instance for `target`.
    /// Same contract as [`crate::models::item::UpdateItem::apply`].
    pub fn apply(
        self,
        target: Uuid,
        existing: Option<&AddressRead>,
        now: DateTime<Utc>,
    ) -> Result<AddressRead> {
        let existing = existing.ok_or(Error::NotFound {
            entity: "address",
            id: target,
        })?;

        let prev = &existing.address;
        Ok(AddressRead {
            address: Address {
                id: prev.id,
                street: self.street.unwrap_or_else(|| prev.street.clone()),
                city: self.city.unwrap_or_else(|| prev.city.clone()),
                state: self.state.unwrap_or_else(|| prev.state.clone()),
                postal_code: self.postal_code.unwrap_or_else(|| prev.postal_code.clone()),
                country: self.country.unwrap_or_else(|| prev.country.clone()),
            },
            created_at: existing.created_at,
            updated_at: now,
        })
    }
}
