//! Value generation: one [`GeneratedValue`] per field definition.
//!
//! Dispatch is a single match over [`FieldKind`]; every arm is total, so a
//! schema that parsed always generates. Unknown type tags yield `""`.

pub mod finance;
pub mod primitives;
pub mod semantic;

use dummyforge_core::{FieldDefinition, FieldKind, IpVersion};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::faker_rs::FakerProvider;
use crate::record::{GeneratedValue, Record};

/// Generate one value for `field`, recursing into objects and arrays.
pub fn generate_field_value(
    field: &FieldDefinition,
    provider: &FakerProvider,
    rng: &mut dyn RngCore,
) -> GeneratedValue {
    match &field.kind {
        FieldKind::String => GeneratedValue::Text(primitives::sample_string(rng)),
        FieldKind::Number(range) | FieldKind::Sales(range) => {
            GeneratedValue::Int(primitives::int_in_range(*range, rng))
        }
        FieldKind::Boolean => GeneratedValue::Bool(rng.random_bool(0.5)),
        FieldKind::Date(range) => {
            GeneratedValue::Timestamp(primitives::instant_between(*range, rng))
        }
        FieldKind::Email => GeneratedValue::Text(provider.email(rng)),
        FieldKind::Phone => GeneratedValue::Text(provider.phone(rng)),
        FieldKind::Address => GeneratedValue::Text(semantic::address(provider, rng)),
        FieldKind::FullName => GeneratedValue::Text(provider.full_name(rng)),
        FieldKind::Company => GeneratedValue::Text(provider.company(rng)),
        FieldKind::Department => {
            GeneratedValue::Text(semantic::department(provider.locale(), rng).to_string())
        }
        FieldKind::Percentage => GeneratedValue::Float(primitives::percentage(rng)),
        FieldKind::ProductCode => GeneratedValue::Text(primitives::product_code(rng)),
        FieldKind::Currency(options) => {
            GeneratedValue::Text(finance::currency_amount(options, rng))
        }
        FieldKind::IpAddress(IpVersion::V4) => GeneratedValue::Text(provider.ipv4(rng)),
        FieldKind::IpAddress(IpVersion::V6) => GeneratedValue::Text(provider.ipv6(rng)),
        FieldKind::Url => GeneratedValue::Text(provider.url(rng)),
        FieldKind::Color => GeneratedValue::Text(provider.color(rng)),
        FieldKind::CreditCard => GeneratedValue::Text(provider.credit_card(rng)),
        FieldKind::LatLong(kind) => semantic::lat_long(*kind, rng),
        FieldKind::Object(children) => {
            GeneratedValue::Object(generate_record(children, provider, rng))
        }
        FieldKind::Array(items) => match &items.item {
            Some(item) => GeneratedValue::Array(
                (0..items.length)
                    .map(|_| generate_field_value(item, provider, rng))
                    .collect(),
            ),
            None => GeneratedValue::Array(Vec::new()),
        },
        FieldKind::Unknown(tag) => {
            debug!(
                field = %field.name,
                type_tag = %tag,
                "unknown field type; generating empty string"
            );
            GeneratedValue::Text(String::new())
        }
    }
}

/// Generate one record: every field once, in schema order, keyed by name.
///
/// A repeated name keeps its first position and takes the later value.
pub fn generate_record(
    fields: &[FieldDefinition],
    provider: &FakerProvider,
    rng: &mut dyn RngCore,
) -> Record {
    let mut record = Record::with_capacity(fields.len());
    for field in fields {
        let value = generate_field_value(field, provider, rng);
        record.insert(field.name.as_str(), value);
    }
    record
}
