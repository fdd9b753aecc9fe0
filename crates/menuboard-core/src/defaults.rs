//! Default-value generation seam.
//!
//! Generated ids and timestamps are the only non-deterministic inputs
//! to this layer. They come through [`DefaultSource`] so tests can
//! inject fixed values; production code uses [`SystemDefaults`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Capability for construction-time defaults.
///
/// Callers must read `now()` once per operation and thread the value
/// through, so that `created_at`/`updated_at` comparisons within one
/// operation are well-ordered.
pub trait DefaultSource: Send + Sync {
    fn new_id(&self) -> Uuid;
    fn now(&self) -> DateTime<Utc>;
}

/// Production defaults: random v4 UUIDs and the system UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDefaults;

impl DefaultSource for SystemDefaults {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
