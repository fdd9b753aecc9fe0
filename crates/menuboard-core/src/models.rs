//! Domain models for menuboard.
//!
//! Each entity module carries the four shapes of the variant pattern:
//! a Base struct, `CreateX`, `UpdateX` (all fields optional), and
//! `XRead` (Base flattened plus timestamps). Update merge lives with
//! the entity it merges.

pub mod address;
pub mod item;
pub mod location;
