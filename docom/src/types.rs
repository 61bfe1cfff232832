use serde::{Deserialize, Serialize};

/// Declared type of an entity field, driving coercion and the default
/// property variant selected by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    Object,
    Array,
}

/// Declarative schema entry for one entity field.
///
/// `primitive` marks a field whose type cannot represent absence;
/// `required` is the explicit "must not be absent" declaration. Together
/// they fix the property's nullability at registration time.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    pub field_type: FieldType,
    pub primitive: bool,
    pub required: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            primitive: false,
            required: false,
        }
    }

    /// Marks the field's type as unable to represent absence.
    pub fn primitive(mut self) -> Self {
        self.primitive = true;
        self
    }

    /// Adds the explicit "must not be absent" declaration.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Field declarations for one entity type, consumed by the registry.
#[derive(Debug, Clone, Default)]
pub struct EntitySchema {
    pub entity_type: String,
    pub fields: Vec<FieldDecl>,
}

impl EntitySchema {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, decl: FieldDecl) -> Self {
        self.fields.push(decl);
        self
    }
}
