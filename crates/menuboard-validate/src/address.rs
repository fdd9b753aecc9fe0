//! Address validators, one per variant.

use menuboard_core::defaults::DefaultSource;
use menuboard_core::error::ValidationError;
use menuboard_core::models::address::{Address, AddressRead, CreateAddress, UpdateAddress};
use serde_json::Value;

use crate::path::Path;
use crate::raw::{self, Report};

/// Validate raw input at the Base shape.
pub fn address(input: &Value, defaults: &dyn DefaultSource) -> Result<Address, ValidationError> {
    let mut report = Report::new();
    let parsed = address_at(input, &Path::root(), &mut report, defaults);
    report.into_result("address", parsed)
}

/// Validate a creation payload.
pub fn create_address(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<CreateAddress, ValidationError> {
    address(input, defaults).map(|base| CreateAddress {
        id: base.id,
        street: base.street,
        city: base.city,
        state: base.state,
        postal_code: base.postal_code,
        country: base.country,
    })
}

/// Validate a partial-update payload.
pub fn update_address(input: &Value) -> Result<UpdateAddress, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).map(|obj| UpdateAddress {
        street: raw::update_str(obj, &path, "street", &mut report),
        city: raw::update_str(obj, &path, "city", &mut report),
        state: raw::update_str(obj, &path, "state", &mut report),
        postal_code: raw::update_str(obj, &path, "postal_code", &mut report),
        country: raw::update_str(obj, &path, "country", &mut report),
    });

    report.into_result("address", parsed)
}

/// Validate a Read-shaped instance.
pub fn address_read(
    input: &Value,
    defaults: &dyn DefaultSource,
) -> Result<AddressRead, ValidationError> {
    let mut report = Report::new();
    let path = Path::root();

    let parsed = raw::object(input, &path, &mut report).and_then(|obj| {
        let base = address_at(input, &path, &mut report, defaults);
        let created_at = raw::require_timestamp(obj, &path, "created_at", &mut report);
        let updated_at = raw::require_timestamp(obj, &path, "updated_at", &mut report);
        raw::check_timestamp_order(created_at, updated_at, &path, &mut report);

        Some(AddressRead {
            address: base?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    });

    report.into_result("address", parsed)
}

/// Base-shape validation at an arbitrary path, for embedding.
pub(crate) fn address_at(
    input: &Value,
    path: &Path,
    report: &mut Report,
    defaults: &dyn DefaultSource,
) -> Option<Address> {
    let obj = raw::object(input, path, report)?;

    let id = raw::uuid_or_generated(obj, path, "id", report, || defaults.new_id());
    let street = raw::require_str(obj, path, "street", report);
    let city = raw::require_str(obj, path, "city", report);
    let state = raw::require_str(obj, path, "state", report);
    let postal_code = raw::require_str(obj, path, "postal_code", report);
    let country = raw::require_str(obj, path, "country", report);

    Some(Address {
        id: id?,
        street: street?,
        city: city?,
        state: state?,
        postal_code: postal_code?,
        country: country?,
    })
}
