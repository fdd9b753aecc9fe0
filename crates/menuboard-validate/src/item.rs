//! Item validators, one per variant.

use menuboard_core::defaults::DefaultSource;
use menuboard_core::error::ValidationError;
use menuboard_core::models::item::{CreateItem, Item, ItemRead, UpdateItem};
use serde_json::Value;

use crate::path::Path;
use crate::raw::{self, Report};

/// Validate raw input at the Base shape. The id is generated through
/// `defaults` when absent.
pub fn item(input: &Value, defaults: &dyn DefaultSource) -> Result<Item, ValidationError> {
    let mut report = Report::new();
    let parsed = item_at(input, &Path::root(), &mut report, defaults);
    report.into_result("item", parsed)
}

/// Validate a creation payload. Identity is generated, not
/// client-controlled; a supplied id is only syntax-checked.
pub fn create_item(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<CreateItem, ValidationError> {
    item(input, defaults).map(|base| CreateItem {
        id: base.id,
        name: base.name,
        ingredients: base.ingredients,
    })
}

/// Validate a partial-update payload. Absent fields mean "leave
/// unchanged"; for `ingredients`, an explicit empty list means clear.
pub fn update_item(input: &Value) -> Result<UpdateItem, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).map(|obj| UpdateItem {
        name: raw::update_str(obj, &path, "name", &mut report),
        ingredients: raw::update_str_list(obj, &path, "ingredients", &mut report),
    });

    report.into_result("item", parsed)
}

/// Validate a Read-shaped instance: the Base shape plus required,
/// well-ordered timestamps.
pub fn item_read(input: &Value, defaults: &dyn DefaultSource) -> Result<ItemRead, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).and_then(|obj| {
        let base = item_at(input, &path, &mut report, defaults);
        let created_at = raw::require_timestamp(obj, &path, "created_at", &mut report);
        let updated_at = raw::require_timestamp(obj, &path, "updated_at", &mut report);
        raw::check_timestamp_order(created_at, updated_at, &path, &mut report);

        Some(ItemRead {
            item: base?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    });

    report.into_result("item", parsed)
}

/// Base-shape validation at an arbitrary path, for embedding in a
/// composite entity.
pub(crate) fn item_at(
    input: &Value,
    path: &Path,
    report: &mut Report,
    defaults: &dyn DefaultSource,
) -> Option<Item> {
    let obj = raw::object(input, path, report)?;

    let id = raw::uuid_or_generated(obj, path, "id", report, || defaults.new_id());
    let name = raw::require_str(obj, path, "name", report);
    let ingredients = raw::str_list_or_empty(obj, path, "ingredients", report);

    Some(Item {
        id: id?,
        name: name?,
        ingredients: ingredients?,
    })
}
