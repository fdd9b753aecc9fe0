//! Location validators: the composite (embedding) case.
//!
//! The embedded address and each menu element are validated at their
//! Base shape regardless of the outer variant, with violation paths
//! prefixed by the containing field (`address.street`, `menu[2].name`).
//! Any nested failure fails the whole composite; all nested failures
//! are reported together.

use menuboard_core::defaults::DefaultSource;
use menuboard_core::error::{Constraint, ValidationError};
use menuboard_core::models::item::Item;
use menuboard_core::models::location::{
    CreateLocation, Location, LocationRead, UpdateLocation,
};
use serde_json::Value;

use crate::path::Path;
use crate::raw::{self, Report};
use crate::{address, item};

/// Validate raw input at the Base shape.
pub fn location(input: &Value, defaults: &dyn DefaultSource) -> Result<Location, ValidationError> {
    let mut report = Report::new();
    let parsed = location_at(input, &Path::root(), &mut report, defaults);
    report.into_result("location", parsed)
}

/// Validate a creation payload for a new location.
pub fn create_location(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<CreateLocation, ValidationError> {
    location(input, defaults).map(|base| CreateLocation {
        id: base.id,
        address: base.address,
        menu: base.menu,
    })
}

/// Validate a partial-update payload.
///
/// A present `address` or `menu` is validated at the Base shape and
/// will replace the stored value wholesale on merge. Absent fields
/// stay `None` (no change); an explicit empty `menu` clears the list.
pub fn update_location(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<UpdateLocation, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).map(|obj| {
        let address = obj
            .get("address")
            .and_then(|value| address::address_at(value, &path.field("address"), &mut report, defaults));

        let menu = obj
            .get("menu")
            .and_then(|value| menu_at(value, &path.field("menu"), &mut report, defaults));

        UpdateLocation { address, menu }
    });

    report.into_result("location", parsed)
}

/// Validate a Read-shaped instance.
pub fn location_read(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<LocationRead, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).and_then(|obj| {
        let base = location_at(input, &path, &mut report, defaults);
        let created_at = raw::require_timestamp(obj, &path, "created_at", &mut report);
        let updated_at = raw::require_timestamp(obj, &path, "updated_at", &mut report);
        raw::check_timestamp_order(created_at, updated_at, &path, &mut report);

        Some(LocationRead {
            location: base?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    });

    report.into_result("location", parsed)
}

fn location_at(
    input: &Value,
    path: &Path,
    report: &mut Report,
    defaults: &dyn DefaultSource,
) -> Option<Location> {
    let obj = raw::object(input, path, report)?;

    let id = raw::uuid_or_generated(obj, path, "id", report, || defaults.new_id());

    // Exactly one embedded address, required at the Base shape.
    let address = match obj.get("address") {
        None | Some(Value::Null) => {
            report.push(&path.field("address"), Constraint::Required, &Value::Null);
            None
        }
        Some(value) => address::address_at(value, &path.field("address"), report, defaults),
    };

    // Absent menu defaults to an empty list for Base/Create.
    let menu = match obj.get("menu") {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(value) => menu_at(value, &path.field("menu"), report, defaults),
    };

    Some(Location {
        id: id?,
        address: address?,
        menu: menu?,
    })
}

/// Validate a menu sequence element by element. Each element is
/// checked independently so one bad item does not mask violations in
/// its siblings.
fn menu_at(
    value: &Value,
    at: &Path,
    report: &mut Report,
    defaults: &dyn DefaultSource,
) -> Option<Vec<Item>> {
    let Value::Array(elements) = value else {
        report.push(at, Constraint::ExpectedArray, value);
        return None;
    };

    let mut menu = Vec::with_capacity(elements.len());
    let mut clean = true;
    for (i, element) in elements.iter().enumerate() {
        match item::item_at(element, &at.index(i), report, defaults) {
            Some(item) => menu.push(item),
            None => clean = false,
        }
    }
    clean.then_some(menu)
}
