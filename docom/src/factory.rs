use std::sync::{Arc, OnceLock, RwLock};

use crate::accessor::FieldAccessor;
use crate::property::{BooleanProperty, DateTimeProperty, NumericProperty, ObjectProperty, Property, StringProperty};
use crate::types::{FieldDecl, FieldType};

/// Creates the property variant for a field declaration.
///
/// Registered factories are consulted in registration order before the
/// built-in defaults, so embedders can take over any field shape they
/// recognize.
pub trait PropertyFactory: Send + Sync {
    /// Whether this factory handles the given declaration.
    fn accepts(&self, decl: &FieldDecl) -> bool;

    /// Builds the property for the field bound by `accessor`.
    fn create(&self, accessor: FieldAccessor) -> Arc<dyn Property>;
}

static FACTORIES: OnceLock<RwLock<Vec<Arc<dyn PropertyFactory>>>> = OnceLock::new();

fn factories() -> &'static RwLock<Vec<Arc<dyn PropertyFactory>>> {
    FACTORIES.get_or_init(|| RwLock::new(Vec::new()))
}

/// Registers a custom property factory, consulted before the defaults.
pub fn register_factory(factory: Arc<dyn PropertyFactory>) {
    factories().write().unwrap().push(factory);
}

/// Resolves the property for one field of an entity type.
///
/// The built-in defaults cover every [`FieldType`], so resolution is
/// total: a declaration no custom factory accepts falls through to the
/// standard variant for its declared type.
pub fn build_property(entity_type: &str, decl: &FieldDecl) -> Arc<dyn Property> {
    let accessor = FieldAccessor::bind(entity_type, decl.clone());
    if let Some(factory) = factories().read().unwrap().iter().find(|factory| factory.accepts(decl)) {
        return factory.create(accessor);
    }
    match decl.field_type {
        FieldType::String => Arc::new(StringProperty::new(accessor)),
        FieldType::Integer | FieldType::Float => Arc::new(NumericProperty::new(accessor)),
        FieldType::Boolean => Arc::new(BooleanProperty::new(accessor)),
        FieldType::DateTime => Arc::new(DateTimeProperty::new(accessor)),
        FieldType::Object | FieldType::Array => Arc::new(ObjectProperty::new(accessor)),
    }
}
