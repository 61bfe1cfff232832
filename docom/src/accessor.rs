use serde_json::Value;

use crate::entity::Entity;
use crate::errors::AccessError;
use crate::types::{FieldDecl, FieldType};

/// Immutable binding between a property and one declared entity field.
///
/// Bound once at registration time, which is also when the accessor is
/// granted access to the field regardless of its declared visibility. An
/// entity that still denies an access yields [`AccessError`], which the
/// property layer treats as a fail-soft condition.
#[derive(Debug, Clone)]
pub struct FieldAccessor {
    entity_type: String,
    decl: FieldDecl,
}

impl FieldAccessor {
    pub fn bind(entity_type: impl Into<String>, decl: FieldDecl) -> Self {
        Self {
            entity_type: entity_type.into(),
            decl,
        }
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn field_type(&self) -> FieldType {
        self.decl.field_type
    }

    /// Whether the field's type cannot represent absence.
    pub fn is_primitive(&self) -> bool {
        self.decl.primitive
    }

    /// Whether a "must not be absent" declaration is present.
    pub fn is_required(&self) -> bool {
        self.decl.required
    }

    /// Qualified field name, `<EntityType>.<field>`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.entity_type, self.decl.name)
    }

    pub fn get(&self, entity: &dyn Entity) -> Result<Value, AccessError> {
        entity.get_field(self.name())
    }

    pub fn set(&self, entity: &mut dyn Entity, value: Value) -> Result<(), AccessError> {
        entity.set_field(self.name(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_declared_metadata() {
        let accessor = FieldAccessor::bind("User", FieldDecl::new("age", FieldType::Integer).primitive().required());
        assert_eq!(accessor.name(), "age");
        assert_eq!(accessor.entity_type(), "User");
        assert_eq!(accessor.field_type(), FieldType::Integer);
        assert!(accessor.is_primitive());
        assert!(accessor.is_required());
        assert_eq!(accessor.qualified_name(), "User.age");
    }
}
