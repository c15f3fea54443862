//! Conversion of structured values into parameter mappings.

use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::keys::ExclusionSet;
use crate::reflect::{Field, FieldValue, Reflect};

/// Request parameters derived from a descriptor.
///
/// Keys keep the declaration order of the fields they came from. Nested
/// structures appear as JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Parameters(JsonMap<String, JsonValue>);

impl Parameters {
    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Whether `key` became a parameter
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Parameter names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of top-level parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field became a parameter
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

impl From<Parameters> for JsonValue {
    fn from(params: Parameters) -> Self {
        params.into_value()
    }
}

/// Build the parameter mapping of `value`, skipping top-level fields in `excluded`.
///
/// Nested structures are expanded without consulting `excluded`. Opaque values
/// are dropped.
pub fn build_parameters<R: Reflect + ?Sized>(value: &R, excluded: &ExclusionSet<'_>) -> Parameters {
    let mut map = JsonMap::new();
    for field in value.fields() {
        if excluded.contains(field.name) {
            continue;
        }
        insert_field(&mut map, field);
    }
    Parameters(map)
}

/// Expand every field of `value` into a mapping, with no exclusions.
pub(crate) fn collect_fields<R: Reflect + ?Sized>(value: &R) -> JsonMap<String, JsonValue> {
    let mut map = JsonMap::new();
    for field in value.fields() {
        insert_field(&mut map, field);
    }
    map
}

fn insert_field(map: &mut JsonMap<String, JsonValue>, field: Field<'_>) {
    match field.value {
        FieldValue::Nested(inner) => {
            map.insert(field.name.to_string(), JsonValue::Object(collect_fields(inner)));
        }
        FieldValue::Primitive(primitive) => {
            map.insert(field.name.to_string(), primitive.into_value());
        }
        FieldValue::Opaque(_) => {
            log::trace!("Dropping field without a parameter form: {}", field.name);
        }
    }
}
