//! Error types for the menuboard schema layer.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for schema-layer operations.
///
/// Nothing here is fatal to the process; every failure is scoped to a
/// single validate or merge invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The merge target does not exist. Raised by this layer only as a
    /// precondition failure — the storage collaborator decides what
    /// "not found" means for lookups.
    #[error("entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One or more fields failed type, presence, or format constraints.
///
/// Violations are collected, never short-circuited at the first
/// failure, so a client can fix every problem in one round trip.
#[derive(Debug, Clone, Error, Serialize)]
#[error("validation failed: {} field violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Paths of all violated fields, in report order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.path.as_str())
    }
}

/// A single field-level violation.
///
/// `rejected` is the offending input value (`null` when the field was
/// absent). Serializable so an HTTP collaborator can emit the
/// violation list as a response body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    /// Dotted field path, with sequence indices: `menu[2].name`.
    pub path: String,
    pub constraint: Constraint,
    pub rejected: serde_json::Value,
}

/// The closed set of constraints a field can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Required field absent or null.
    Required,
    ExpectedString,
    ExpectedArray,
    ExpectedObject,
    /// Not a syntactically valid UUID.
    InvalidUuid,
    /// Not an RFC 3339 timestamp.
    InvalidTimestamp,
    /// `updated_at` precedes `created_at`.
    TimestampOrder,
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::ExpectedString => "expected_string",
            Self::ExpectedArray => "expected_array",
            Self::ExpectedObject => "expected_object",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::TimestampOrder => "timestamp_order",
        };
        f.write_str(name)
    }
}
