//! Field listing for structured values.
//!
//! A type takes part in parameter generation by implementing [`Reflect`]:
//! it lists its named fields in declaration order, classifying every value
//! up front as one of three kinds.
//!
//! - [`FieldValue::Nested`] values expand into a sub-mapping of their own fields.
//! - [`FieldValue::Primitive`] values are stored in the parameter mapping as-is.
//! - [`FieldValue::Opaque`] values are left out of the mapping but still render
//!   into a path template.
//!
//! # Examples
//!
//! ```
//! use paramkit_core::reflect::{Field, Reflect};
//!
//! struct Filter {
//!     status: String,
//! }
//!
//! impl Reflect for Filter {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::primitive("status", self.status.as_str())]
//!     }
//! }
//!
//! let filter = Filter { status: "open".into() };
//! assert_eq!(filter.fields()[0].name, "status");
//! ```

use std::fmt;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::introspect;

/// A value whose named fields can be listed.
pub trait Reflect {
    /// Named fields of this value, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A single named field yielded by [`Reflect::fields`].
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Field name, as it appears in parameters and `{name}` path tokens
    pub name: &'a str,
    /// Classified field value
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Create a field from an already classified value
    pub fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }

    /// A field that expands into a nested parameter mapping
    pub fn nested(name: &'a str, value: &'a dyn Reflect) -> Self {
        Self::new(name, FieldValue::Nested(value))
    }

    /// A field stored verbatim in the parameter mapping
    pub fn primitive(name: &'a str, value: impl Into<JsonValue>) -> Self {
        Self::new(name, FieldValue::Primitive(Primitive::new(value)))
    }

    /// A primitive field with its own human-readable form for path substitution
    pub fn primitive_with_display(
        name: &'a str,
        value: impl Into<JsonValue>,
        display: impl fmt::Display,
    ) -> Self {
        Self::new(
            name,
            FieldValue::Primitive(Primitive::with_display(value, display)),
        )
    }

    /// A field with no parameter representation, rendered through `Debug`
    pub fn opaque(name: &'a str, value: &impl fmt::Debug) -> Self {
        Self::new(name, FieldValue::Opaque(format!("{value:?}")))
    }
}

/// Classification of a field value.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// A structure expanded into a sub-mapping
    Nested(&'a dyn Reflect),
    /// A value with a parameter representation
    Primitive(Primitive),
    /// A value with no parameter representation; holds its fallback rendering
    Opaque(String),
}

impl FieldValue<'_> {
    /// Text used when this value replaces a `{name}` token in a path template.
    ///
    /// Nested values render as the compact JSON of their sub-mapping.
    pub fn render(&self) -> String {
        match self {
            Self::Nested(inner) => JsonValue::Object(introspect::collect_fields(*inner)).to_string(),
            Self::Primitive(primitive) => primitive.render(),
            Self::Opaque(fallback) => fallback.clone(),
        }
    }

    /// Whether this value contributes to the parameter mapping
    pub fn is_representable(&self) -> bool {
        !matches!(self, Self::Opaque(_))
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested(inner) => f
                .debug_tuple("Nested")
                .field(&introspect::collect_fields(*inner))
                .finish(),
            Self::Primitive(primitive) => f.debug_tuple("Primitive").field(primitive).finish(),
            Self::Opaque(fallback) => f.debug_tuple("Opaque").field(fallback).finish(),
        }
    }
}

/// A leaf value that can be placed in a parameter mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    value: JsonValue,
    display: Option<String>,
}

impl Primitive {
    /// Wrap a JSON-representable value
    pub fn new(value: impl Into<JsonValue>) -> Self {
        Self {
            value: value.into(),
            display: None,
        }
    }

    /// Wrap a value that renders differently in paths than in parameters
    pub fn with_display(value: impl Into<JsonValue>, display: impl fmt::Display) -> Self {
        Self {
            value: value.into(),
            display: Some(display.to_string()),
        }
    }

    /// The value stored in the parameter mapping
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Consume the primitive, returning the stored value
    pub fn into_value(self) -> JsonValue {
        self.value
    }

    /// Text used for path substitution.
    ///
    /// An explicit display form wins, then a string value is used as-is,
    /// otherwise the compact JSON text of the value.
    pub fn render(&self) -> String {
        if let Some(display) = &self.display {
            return display.clone();
        }
        match &self.value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl Reflect for JsonMap<String, JsonValue> {
    fn fields(&self) -> Vec<Field<'_>> {
        self.iter()
            .map(|(name, value)| match value {
                JsonValue::Object(inner) => Field::nested(name, inner),
                JsonValue::Null => Field::new(name, FieldValue::Opaque("null".to_string())),
                other => Field::primitive(name, other.clone()),
            })
            .collect()
    }
}

impl Reflect for JsonValue {
    fn fields(&self) -> Vec<Field<'_>> {
        match self {
            JsonValue::Object(map) => map.fields(),
            _ => Vec::new(),
        }
    }
}
