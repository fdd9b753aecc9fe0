//! End-to-end flow against an in-memory storage collaborator:
//! validate raw input, create, merge a partial update, read back.

use std::collections::HashMap;
use std::sync::Mutex;

use menuboard_core::defaults::{DefaultSource, SystemDefaults};
use menuboard_core::error::{Error, Result};
use menuboard_core::models::location::{CreateLocation, LocationRead, UpdateLocation};
use menuboard_core::repository::LocationRepository;
use menuboard_validate::location;
use serde_json::json;
use uuid::Uuid;

/// Test double for the storage collaborator. Last write wins, which
/// is the collaborator's call to make.
struct MemoryLocationRepository {
    store: Mutex<HashMap<Uuid, LocationRead>>,
    defaults: SystemDefaults,
}

impl MemoryLocationRepository {
    fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            defaults: SystemDefaults,
        }
    }
}

impl LocationRepository for MemoryLocationRepository {
    async fn create(&self, input: CreateLocation) -> Result<LocationRead> {
        let read = input.into_read(self.defaults.now());
        let mut store = self.store.lock().unwrap();
        store.insert(read.location.id, read.clone());
        Ok(read)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<LocationRead> {
        let store = self.store.lock().unwrap();
        store.get(&id).cloned().ok_or(Error::NotFound {
            entity: "location",
            id,
        })
    }

    async fn update(&self, id: Uuid, input: UpdateLocation) -> Result<LocationRead> {
        let now = self.defaults.now();
        let mut store = self.store.lock().unwrap();
        let merged = input.apply(id, store.get(&id), now)?;
        store.insert(id, merged.clone());
        Ok(merged)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.remove(&id).map(|_| ()).ok_or(Error::NotFound {
            entity: "location",
            id,
        })
    }
}

#[tokio::test]
async fn create_merge_read_flow() {
    let repo = MemoryLocationRepository::new();
    let defaults = SystemDefaults;

    // Create: raw body in, validated instance out, persisted by the
    // collaborator.
    let body = json!({
        "address": {
            "street": "600 W 125th St",
            "city": "New York",
            "state": "NY",
            "postal_code": "10027",
            "country": "US",
        },
        "menu": [
            {"name": "Big Mac", "ingredients": ["Mac Sauce", "Bun"]},
        ],
    });
    let create = location::create_location(&body, &defaults).unwrap();
    let created = repo.create(create).await.unwrap();
    let id = created.location.id;

    // Partial update: replace the menu wholesale, leave the address.
    let patch = json!({"menu": [{"name": "Big Mac", "ingredients": ["Mac Sauce"]}]});
    let update = location::update_location(&patch, &defaults).unwrap();
    let merged = repo.update(id, update).await.unwrap();

    assert_eq!(merged.location.id, id);
    assert_eq!(merged.location.address, created.location.address);
    assert_eq!(merged.location.menu.len(), 1);
    assert_eq!(
        merged.location.menu[0].ingredients,
        vec!["Mac Sauce".to_string()]
    );
    assert_eq!(merged.created_at, created.created_at);
    assert!(merged.updated_at >= created.updated_at);

    // Read back what was persisted.
    let fetched = repo.get_by_id(id).await.unwrap();
    assert_eq!(fetched, merged);
}

#[tokio::test]
async fn update_of_a_missing_location_is_not_found() {
    let repo = MemoryLocationRepository::new();
    let id = Uuid::new_v4();

    let err = repo.update(id, UpdateLocation::default()).await.unwrap_err();
    match err {
        Error::NotFound { entity, id: got } => {
            assert_eq!(entity, "location");
            assert_eq!(got, id);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let repo = MemoryLocationRepository::new();
    let defaults = SystemDefaults;

    let body = json!({
        "address": {
            "street": "1 Broadway",
            "city": "New York",
            "state": "NY",
            "postal_code": "10004",
            "country": "US",
        },
    });
    let created = repo
        .create(location::create_location(&body, &defaults).unwrap())
        .await
        .unwrap();
    let id = created.location.id;

    repo.delete(id).await.unwrap();
    assert!(matches!(
        repo.get_by_id(id).await,
        Err(Error::NotFound { .. })
    ));
}
