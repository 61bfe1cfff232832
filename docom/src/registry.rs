use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;
use crate::entity::{Entity, MapEntity};
use crate::errors::{FieldErrors, InvalidInput, SchemaError};
use crate::factory::build_property;
use crate::mapping::MappingBuilder;
use crate::property::Property;
use crate::request::RequestContext;
use crate::types::EntitySchema;

/// The property set built for one registered entity type, one descriptor
/// per declared field. Read-only after construction and shared across
/// threads.
pub struct EntityProperties {
    schema: EntitySchema,
    properties: Vec<Arc<dyn Property>>,
}

impl std::fmt::Debug for EntityProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityProperties")
            .field("schema", &self.schema)
            .field(
                "properties",
                &self.properties.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl EntityProperties {
    fn build(schema: EntitySchema) -> Result<Self, SchemaError> {
        for (index, decl) in schema.fields.iter().enumerate() {
            if schema.fields[..index].iter().any(|other| other.name == decl.name) {
                return Err(SchemaError::DuplicateProperty { name: decl.name.clone() });
            }
        }
        let properties = schema
            .fields
            .iter()
            .map(|decl| build_property(&schema.entity_type, decl))
            .collect();
        Ok(Self { schema, properties })
    }

    pub fn entity_type(&self) -> &str {
        &self.schema.entity_type
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn properties(&self) -> &[Arc<dyn Property>] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Arc<dyn Property>> {
        self.properties.iter().find(|property| property.name() == name)
    }

    /// Creates a blank map-backed entity with every declared field present
    /// and absent-valued, then runs each property's `init` hook so
    /// auto-created values are in place.
    pub fn new_entity(&self, diag: &dyn Diagnostics) -> MapEntity {
        let mut entity = MapEntity::new(self.entity_type());
        for decl in &self.schema.fields {
            entity = entity.with_field(&decl.name, Value::Null);
        }
        for property in &self.properties {
            property.init(&mut entity, diag);
        }
        entity
    }

    /// Emits one mapping fragment per property into the builder.
    pub fn create_mappings(&self, builder: &mut MappingBuilder) -> Result<(), SchemaError> {
        for property in &self.properties {
            property.create_mapping(builder)?;
        }
        Ok(())
    }

    /// Produces the storable document for the entity, one entry per
    /// property. Unreadable fields degrade to absent values.
    pub fn write_to_source(&self, entity: &dyn Entity, diag: &dyn Diagnostics) -> Map<String, Value> {
        let mut document = Map::new();
        for property in &self.properties {
            document.insert(property.name().to_string(), property.write_to_source(entity, diag));
        }
        document
    }

    /// Loads a stored document back into the entity's fields and source
    /// map. Entries absent from the document load as absent values.
    pub fn read_from_source(&self, entity: &mut dyn Entity, document: &Map<String, Value>, diag: &dyn Diagnostics) {
        for property in &self.properties {
            let value = document.get(property.name()).cloned().unwrap_or(Value::Null);
            property.read_from_source(entity, value, diag);
        }
    }

    /// Binds the entity's fields from the request, in declaration order.
    ///
    /// Stops at the first field whose value fails validation; fields bound
    /// before it keep their new values, later fields stay untouched.
    pub fn read_from_request(
        &self,
        entity: &mut dyn Entity,
        ctx: &dyn RequestContext,
        errors: &mut FieldErrors,
        diag: &dyn Diagnostics,
    ) -> Result<(), InvalidInput> {
        for property in &self.properties {
            property.read_from_request(entity, ctx, errors, diag)?;
        }
        Ok(())
    }
}

static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<EntityProperties>>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, Arc<EntityProperties>>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Builds the property set for the schema and registers it under its
/// entity type, replacing any earlier registration.
pub fn register_entity(schema: EntitySchema) -> Result<Arc<EntityProperties>, SchemaError> {
    let set = Arc::new(EntityProperties::build(schema)?);
    registry()
        .write()
        .unwrap()
        .insert(set.entity_type().to_string(), Arc::clone(&set));
    Ok(set)
}

/// Looks up the registered property set for an entity type.
pub fn get_entity(entity_type: &str) -> Option<Arc<EntityProperties>> {
    registry().read().unwrap().get(entity_type).cloned()
}
