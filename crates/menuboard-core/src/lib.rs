//! menuboard-core — Domain models for the restaurant-locations API.
//!
//! This crate provides:
//! - The Base / Create / Update / Read shapes for each entity
//!   ([`models`])
//! - The update-merge rule for partial modifications
//! - The default-generation seam ([`DefaultSource`]) for ids and
//!   timestamps
//! - Error types ([`Error`], [`ValidationError`])
//! - The storage-collaborator seam ([`repository`])
//! - Static schema-documentation fixtures ([`docs`])
//!
//! Raw-input validation lives in the `menuboard-validate` crate.

pub mod defaults;
pub mod docs;
pub mod error;
pub mod models;
pub mod repository;

pub use defaults::{DefaultSource, SystemDefaults};
pub use error::{Constraint, Error, FieldViolation, Result, ValidationError};
