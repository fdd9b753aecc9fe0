//! Repository trait for the storage collaborator.
//!
//! This layer ships no storage implementation; the trait fixes the
//! shapes exchanged at the seam. Targeting for update and delete uses
//! the path-derived id, never an id from the request body. Concurrent
//! writes to the same location are arbitrated by the implementor
//! (last-write-wins or otherwise) — this layer has no opinion.

use uuid::Uuid;

use crate::error::Result;
use crate::models::location::{CreateLocation, LocationRead, UpdateLocation};

pub trait LocationRepository: Send + Sync {
    fn create(&self, input: CreateLocation) -> impl Future<Output = Result<LocationRead>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<LocationRead>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateLocation,
    ) -> impl Future<Output = Result<LocationRead>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<()>> + Send;
}
