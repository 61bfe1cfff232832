//! docom core library.
//!
//! Field property descriptors for document-store object mapping: each
//! registered entity field gets one descriptor governing its storable
//! representation, its index-mapping fragment, and its binding from raw
//! request parameters.
//!
//! Descriptors fail soft on field access (a denied read or write is
//! reported to the diagnostics sink and the operation degrades) and fail
//! loud on request validation (an uncoercible value registers a field
//! error and raises a user-facing, recoverable [`InvalidInput`]).

pub mod accessor;
pub mod diagnostics;
pub mod entity;
pub mod errors;
pub mod factory;
pub mod mapping;
pub mod property;
pub mod registry;
pub mod request;
pub mod types;

pub use accessor::FieldAccessor;
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use entity::{Entity, MapEntity};
pub use errors::*;
pub use factory::{PropertyFactory, build_property, register_factory};
pub use mapping::{IndexMode, MappingBuilder, MappingFragment};
pub use property::{
    BooleanProperty, DateTimeProperty, NumericProperty, ObjectProperty, Property, StringProperty,
};
pub use registry::{EntityProperties, get_entity, register_entity};
pub use request::{ParamRequest, RawValue, RequestContext};
pub use types::{EntitySchema, FieldDecl, FieldType};
