use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Localization template key carried by [`InvalidInput`] payloads.
pub const INVALID_INPUT_KEY: &str = "Property.invalidInput";

/// Direction of a failed field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => f.write_str("read"),
            AccessMode::Write => f.write_str("write"),
        }
    }
}

/// An entity denied access to one of its fields.
///
/// Property operations never propagate this: it is reported to the
/// diagnostics sink and the operation degrades (an unreadable field is
/// persisted as absent, an unwritable field keeps its prior value).
#[derive(Debug, Clone, Error)]
#[error("{mode} access denied for field {entity_type}.{field}")]
pub struct AccessError {
    pub entity_type: String,
    pub field: String,
    pub mode: AccessMode,
}

impl AccessError {
    pub fn read(entity_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            field: field.into(),
            mode: AccessMode::Read,
        }
    }

    pub fn write(entity_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            field: field.into(),
            mode: AccessMode::Write,
        }
    }
}

/// User-facing validation failure raised when a request value cannot be
/// coerced to the field's declared type.
///
/// The serialized payload (`templateKey` / `field` / `value`) is the
/// contract for localization layers; the `Display` rendering is a plain
/// fallback. Recoverable by the caller, never process-fatal.
#[derive(Debug, Clone, Error, Serialize)]
#[error("invalid input for field {field}: '{value}'")]
pub struct InvalidInput {
    #[serde(rename = "templateKey")]
    pub template_key: &'static str,
    /// Qualified field name, `<EntityType>.<field>`.
    pub field: String,
    /// The offending raw text.
    pub value: String,
}

impl InvalidInput {
    /// `field` is the already-qualified `<EntityType>.<field>` name, as
    /// produced by `FieldAccessor::qualified_name`.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            template_key: INVALID_INPUT_KEY,
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Failure while declaring or emitting the index mapping.
///
/// Unlike the fail-soft paths this one propagates: mapping generation runs
/// once at startup/schema-sync time and may fail the whole operation.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("mapping already contains a property named {name}")]
    DuplicateProperty { name: String },

    #[error("failed to write mapping: {0}")]
    Write(#[from] serde_json::Error),
}

/// One registered field-level error: the field name and the raw value that
/// was rejected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub value: String,
}

/// Per-field error registration channel surfaced to callers of request
/// binding, for UI display alongside the raised [`InvalidInput`].
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            value: value.into(),
        });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
