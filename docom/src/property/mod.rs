//! The property descriptor contract and its standard field-type variants.

mod standard;

pub use standard::{BooleanProperty, DateTimeProperty, NumericProperty, ObjectProperty, StringProperty};

use serde_json::Value;

use crate::accessor::FieldAccessor;
use crate::diagnostics::Diagnostics;
use crate::entity::Entity;
use crate::errors::{FieldErrors, InvalidInput, SchemaError};
use crate::mapping::{MappingBuilder, MappingFragment};
use crate::request::RequestContext;

/// Describes how one entity field is persisted into the document store and
/// loaded back, declared in the index mapping, and populated from request
/// parameters.
///
/// Field-type variants override the transform and mapping hooks; the
/// default bodies fix the base contract: identity transforms, an
/// exact-match non-analyzed storage-light mapping, fail-soft field access,
/// and fail-loud request validation.
///
/// Descriptors are built once at registration time, hold no mutable state,
/// and are shared across threads as `Arc<dyn Property>`. Serializing
/// concurrent mutation of a single entity is the caller's responsibility.
pub trait Property: Send + Sync {
    /// The accessor binding this property to its entity field.
    fn accessor(&self) -> &FieldAccessor;

    /// Name of the property, normally just the field name.
    fn name(&self) -> &str {
        self.accessor().name()
    }

    /// Whether absence is accepted as a value for this property.
    ///
    /// Fixed at construction: null is allowed when the field's type can
    /// represent absence and no `required` declaration overrides it.
    fn null_allowed(&self) -> bool {
        !self.accessor().is_primitive() && !self.accessor().is_required()
    }

    /// Variants that auto-create their value report `false` so no setter
    /// is exposed for the field.
    fn accepts_setter(&self) -> bool {
        true
    }

    /// Initializes the property's field on a freshly created entity.
    ///
    /// Does nothing by default; variants that auto-create their value
    /// override this (and typically report `false` from
    /// [`accepts_setter`](Property::accepts_setter)). A denied write is a
    /// fail-soft condition like the other entity-touching operations:
    /// report to `diag` and skip.
    fn init(&self, _entity: &mut dyn Entity, _diag: &dyn Diagnostics) {}

    /// Transforms a field value into its storable representation.
    fn transform_to_source(&self, value: Value) -> Value {
        value
    }

    /// Transforms a stored value back to its field representation.
    fn transform_from_source(&self, value: Value) -> Value {
        value
    }

    /// Reads the field from the entity and returns its storable
    /// representation.
    ///
    /// A denied read degrades instead of failing the save: the failure is
    /// reported to `diag` and the field is persisted as absent.
    fn write_to_source(&self, entity: &dyn Entity, diag: &dyn Diagnostics) -> Value {
        match self.accessor().get(entity) {
            Ok(value) => self.transform_to_source(value),
            Err(err) => {
                diag.access_failure(&err);
                Value::Null
            }
        }
    }

    /// Writes a stored value back into the entity's field and records the
    /// transformed value in the entity's source map.
    ///
    /// A denied write is reported to `diag` and skipped; the source map is
    /// only written after a successful field write.
    fn read_from_source(&self, entity: &mut dyn Entity, value: Value, diag: &dyn Diagnostics) {
        let value = self.transform_from_source(value);
        match self.accessor().set(entity, value.clone()) {
            Ok(()) => entity.set_source(self.name(), value),
            Err(err) => diag.access_failure(&err),
        }
    }

    /// Storage data type tag used in the mapping.
    fn mapping_type(&self) -> &'static str {
        "string"
    }

    /// Whether the raw value is kept as an additional verbatim copy.
    fn is_stored(&self) -> bool {
        false
    }

    /// Emits this property's mapping fragment into the builder.
    fn create_mapping(&self, builder: &mut MappingBuilder) -> Result<(), SchemaError> {
        let fragment = MappingFragment::new(self.mapping_type()).stored(self.is_stored());
        builder.add(self.name(), &fragment)
    }

    /// Binds the entity's field from the request context.
    ///
    /// An absent parameter leaves the field untouched, so omitted
    /// parameters never clear existing values (partial update). A value
    /// that cannot be coerced aborts with [`InvalidInput`]; a denied field
    /// write is reported to `diag` and skipped.
    fn read_from_request(
        &self,
        entity: &mut dyn Entity,
        ctx: &dyn RequestContext,
        errors: &mut FieldErrors,
        diag: &dyn Diagnostics,
    ) -> Result<(), InvalidInput> {
        if ctx.get(self.name()).is_null() {
            return Ok(());
        }
        let value = self.transform_from_request(self.name(), ctx, errors)?;
        if let Err(err) = self.accessor().set(entity, value) {
            diag.access_failure(&err);
        }
        Ok(())
    }

    /// Extracts and coerces the field value from the request.
    ///
    /// An empty string against a field that can represent absence becomes
    /// the absent value. Anything that fails coercion into the declared
    /// type registers a field error and aborts binding of this property
    /// with a user-facing, recoverable [`InvalidInput`].
    fn transform_from_request(
        &self,
        name: &str,
        ctx: &dyn RequestContext,
        errors: &mut FieldErrors,
    ) -> Result<Value, InvalidInput> {
        let raw = ctx.get(name);
        if raw.is_empty_string() && !self.accessor().is_primitive() {
            return Ok(Value::Null);
        }
        match raw.coerce(self.accessor().field_type()) {
            Some(value) => Ok(value),
            None => {
                errors.register(name, raw.as_str());
                Err(InvalidInput::new(self.accessor().qualified_name(), raw.as_str()))
            }
        }
    }
}
