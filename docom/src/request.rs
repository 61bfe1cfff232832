use std::collections::HashMap;

use chrono::DateTime;
use serde_json::{Number, Value};

use crate::types::FieldType;

/// A raw request parameter: absent, or a textual value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawValue(Option<String>);

impl RawValue {
    /// The absent value (missing parameter or explicit null marker).
    pub fn null() -> Self {
        Self(None)
    }

    pub fn of(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self.0.as_deref(), Some(""))
    }

    /// The raw text, empty for absent values.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Coerces the raw text into the given field type's storable value.
    ///
    /// Returns `None` when the value is absent or does not parse, including
    /// an empty string against any type that needs parsing.
    pub fn coerce(&self, target: FieldType) -> Option<Value> {
        let text = self.0.as_deref()?;
        match target {
            FieldType::String => Some(Value::String(text.to_string())),
            FieldType::Integer => text.trim().parse::<i64>().ok().map(Value::from),
            FieldType::Float => {
                let parsed = text.trim().parse::<f64>().ok()?;
                Number::from_f64(parsed).map(Value::Number)
            }
            FieldType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            FieldType::DateTime => DateTime::parse_from_rfc3339(text.trim())
                .ok()
                .map(|ts| Value::String(ts.to_rfc3339())),
            FieldType::Object => serde_json::from_str::<Value>(text).ok().filter(Value::is_object),
            FieldType::Array => serde_json::from_str::<Value>(text).ok().filter(Value::is_array),
        }
    }
}

/// Supplies named raw parameter values during request binding.
pub trait RequestContext {
    fn get(&self, name: &str) -> RawValue;
}

/// Map-backed request context for tests and non-HTTP embedders.
#[derive(Debug, Clone, Default)]
pub struct ParamRequest {
    params: HashMap<String, String>,
}

impl ParamRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl RequestContext for ParamRequest {
    fn get(&self, name: &str) -> RawValue {
        self.params
            .get(name)
            .map(|value| RawValue::of(value.as_str()))
            .unwrap_or_else(RawValue::null)
    }
}
