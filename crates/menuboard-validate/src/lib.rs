//! menuboard-validate — Validation of raw decoded input into
//! `menuboard-core` types.
//!
//! Each entity module exposes one validator per variant. A validator
//! takes a `serde_json::Value` (a decoded request body) and returns
//! either a fully-typed instance with defaults applied, or a
//! [`ValidationError`](menuboard_core::ValidationError) carrying every
//! field violation found — validation never stops at the first
//! failure, and never returns a partial object.
//!
//! Embedded entities (a location's address and menu items) are always
//! validated at their Base shape, with violation paths prefixed by the
//! containing field and, for sequences, the element index
//! (`menu[2].name`).

mod path;
mod raw;

pub mod address;
pub mod item;
pub mod location;
