use serde_json::Value;

use crate::accessor::FieldAccessor;
use crate::property::Property;
use crate::types::FieldType;

/// Property for plain text fields; carries the base contract unchanged.
#[derive(Debug)]
pub struct StringProperty {
    accessor: FieldAccessor,
}

impl StringProperty {
    pub fn new(accessor: FieldAccessor) -> Self {
        Self { accessor }
    }
}

impl Property for StringProperty {
    fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }
}

/// Property for integer and floating-point fields.
#[derive(Debug)]
pub struct NumericProperty {
    accessor: FieldAccessor,
}

impl NumericProperty {
    pub fn new(accessor: FieldAccessor) -> Self {
        Self { accessor }
    }
}

impl Property for NumericProperty {
    fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    fn mapping_type(&self) -> &'static str {
        match self.accessor.field_type() {
            FieldType::Float => "double",
            _ => "long",
        }
    }
}

/// Property for boolean fields.
#[derive(Debug)]
pub struct BooleanProperty {
    accessor: FieldAccessor,
}

impl BooleanProperty {
    pub fn new(accessor: FieldAccessor) -> Self {
        Self { accessor }
    }
}

impl Property for BooleanProperty {
    fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    fn mapping_type(&self) -> &'static str {
        "boolean"
    }
}

/// Property for timestamp fields, stored in RFC 3339 source form.
#[derive(Debug)]
pub struct DateTimeProperty {
    accessor: FieldAccessor,
}

impl DateTimeProperty {
    pub fn new(accessor: FieldAccessor) -> Self {
        Self { accessor }
    }
}

impl Property for DateTimeProperty {
    fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    fn mapping_type(&self) -> &'static str {
        "date"
    }
}

/// Property for nested object and array fields.
///
/// The exact-match default mode cannot index arbitrary nested structures,
/// so the value is persisted as its serialized JSON text, kept as a stored
/// copy, and restored on read.
#[derive(Debug)]
pub struct ObjectProperty {
    accessor: FieldAccessor,
}

impl ObjectProperty {
    pub fn new(accessor: FieldAccessor) -> Self {
        Self { accessor }
    }
}

impl Property for ObjectProperty {
    fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    fn transform_to_source(&self, value: Value) -> Value {
        if value.is_null() {
            return Value::Null;
        }
        Value::String(value.to_string())
    }

    fn transform_from_source(&self, value: Value) -> Value {
        match value {
            Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
            other => other,
        }
    }

    fn is_stored(&self) -> bool {
        true
    }
}
