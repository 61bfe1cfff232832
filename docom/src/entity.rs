use std::collections::HashMap;

use serde_json::Value;

use crate::errors::AccessError;

/// Contract every persisted entity exposes to the property layer.
///
/// Besides typed field storage, entities keep a side "source" map recording
/// the last transformed stored representation per property. It lets later
/// code compare what is currently assigned against what was loaded,
/// independent of any mutation the field underwent since.
pub trait Entity {
    /// Entity type name, used to qualify fields in error messages.
    fn entity_type(&self) -> &str;

    fn get_field(&self, name: &str) -> Result<Value, AccessError>;

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), AccessError>;

    /// Records the stored representation last read for a property.
    fn set_source(&mut self, name: &str, value: Value);

    fn source(&self, name: &str) -> Option<&Value>;
}

/// Map-backed entity holding only fields declared up front.
///
/// Access to an undeclared field is denied, which is also how tests
/// simulate an entity refusing a property's accessor.
#[derive(Debug, Clone, Default)]
pub struct MapEntity {
    entity_type: String,
    fields: HashMap<String, Value>,
    source: HashMap<String, Value>,
}

impl MapEntity {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: HashMap::new(),
            source: HashMap::new(),
        }
    }

    /// Declares a field with its initial value.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Entity for MapEntity {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn get_field(&self, name: &str) -> Result<Value, AccessError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AccessError::read(&self.entity_type, name))
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), AccessError> {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AccessError::write(&self.entity_type, name)),
        }
    }

    fn set_source(&mut self, name: &str, value: Value) {
        self.source.insert(name.to_string(), value);
    }

    fn source(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }
}
