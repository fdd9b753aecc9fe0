//! Typed accessors over raw `serde_json::Value` input.
//!
//! Every accessor records violations into a [`Report`] instead of
//! returning early, so one pass over the input yields the complete
//! violation list. An accessor returning `None` has already recorded
//! why.

use chrono::{DateTime, Utc};
use menuboard_core::error::{Constraint, FieldViolation, ValidationError};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::path::Path;

/// Collects field violations across one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Report {
    violations: Vec<FieldViolation>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: &Path, constraint: Constraint, rejected: &Value) {
        self.violations.push(FieldViolation {
            path: path.to_string(),
            constraint,
            rejected: rejected.clone(),
        });
    }

    /// Close the pass: the typed value on a clean report, the full
    /// violation list otherwise. `value` is `None` only when at least
    /// one violation was recorded while extracting it.
    pub(crate) fn into_result<T>(
        self,
        entity: &'static str,
        value: Option<T>,
    ) -> Result<T, ValidationError> {
        match value {
            Some(v) if self.violations.is_empty() => Ok(v),
            _ => {
                debug_assert!(!self.violations.is_empty());
                tracing::debug!(
                    entity,
                    violations = self.violations.len(),
                    "rejected raw input"
                );
                Err(ValidationError::new(self.violations))
            }
        }
    }
}

/// The input must be a JSON object.
pub(crate) fn object<'a>(
    value: &'a Value,
    path: &Path,
    report: &mut Report,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            report.push(path, Constraint::ExpectedObject, other);
            None
        }
    }
}

/// Required text field. Empty strings are permitted; absence and null
/// are not.
pub(crate) fn require_str(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
) -> Option<String> {
    let at = path.field(field);
    match obj.get(field) {
        None | Some(Value::Null) => {
            report.push(&at, Constraint::Required, &Value::Null);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            report.push(&at, Constraint::ExpectedString, other);
            None
        }
    }
}

/// Optional text field for Update payloads: absent means no change.
pub(crate) fn update_str(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
) -> Option<String> {
    match obj.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            report.push(&path.field(field), Constraint::ExpectedString, other);
            None
        }
    }
}

/// Sequence-of-text field with the empty-sequence default: absence is
/// not an error, it is an empty list. Each element is validated
/// independently at its own index path.
pub(crate) fn str_list_or_empty(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
) -> Option<Vec<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(value) => str_list(value, &path.field(field), report),
    }
}

/// Sequence-of-text field for Update payloads: absent means no
/// change, an empty list means clear.
pub(crate) fn update_str_list(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
) -> Option<Vec<String>> {
    let value = obj.get(field)?;
    str_list(value, &path.field(field), report)
}

fn str_list(value: &Value, at: &Path, report: &mut Report) -> Option<Vec<String>> {
    let Value::Array(elements) = value else {
        report.push(at, Constraint::ExpectedArray, value);
        return None;
    };

    let mut out = Vec::with_capacity(elements.len());
    let mut clean = true;
    for (i, element) in elements.iter().enumerate() {
        match element {
            Value::String(s) => out.push(s.clone()),
            other => {
                report.push(&at.index(i), Constraint::ExpectedString, other);
                clean = false;
            }
        }
    }
    clean.then_some(out)
}

/// Identifier field: generated when absent, syntax-checked when
/// supplied. The supplied value is never trusted beyond syntax.
pub(crate) fn uuid_or_generated(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
    generate: impl FnOnce() -> Uuid,
) -> Option<Uuid> {
    let at = path.field(field);
    match obj.get(field) {
        None | Some(Value::Null) => Some(generate()),
        Some(Value::String(s)) => match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(_) => {
                report.push(&at, Constraint::InvalidUuid, &Value::String(s.clone()));
                None
            }
        },
        Some(other) => {
            report.push(&at, Constraint::InvalidUuid, other);
            None
        }
    }
}

/// Required RFC 3339 timestamp field, normalized to UTC.
pub(crate) fn require_timestamp(
    obj: &Map<String, Value>,
    path: &Path,
    field: &str,
    report: &mut Report,
) -> Option<DateTime<Utc>> {
    let at = path.field(field);
    match obj.get(field) {
        None | Some(Value::Null) => {
            report.push(&at, Constraint::Required, &Value::Null);
            None
        }
        Some(Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(_) => {
                report.push(&at, Constraint::InvalidTimestamp, &Value::String(s.clone()));
                None
            }
        },
        Some(other) => {
            report.push(&at, Constraint::InvalidTimestamp, other);
            None
        }
    }
}

/// Enforce `updated_at >= created_at` once both parsed.
pub(crate) fn check_timestamp_order(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    path: &Path,
    report: &mut Report,
) {
    if let (Some(created), Some(updated)) = (created_at, updated_at)
        && updated < created
    {
        report.push(
            &path.field("updated_at"),
            Constraint::TimestampOrder,
            &Value::String(updated.to_rfc3339()),
        );
    }
}
