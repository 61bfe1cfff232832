use std::io::Write;

use serde_json::{Map, Value, json};

use crate::errors::SchemaError;

/// Indexing mode declared for a property. The base contract fixes every
/// property to the exact-match, non-analyzed mode; variants needing
/// full-text search emit an analyzed fragment instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    #[default]
    NotAnalyzed,
    Analyzed,
}

impl IndexMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexMode::NotAnalyzed => "not_analyzed",
            IndexMode::Analyzed => "analyzed",
        }
    }
}

/// Schema declaration for one property in the index mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingFragment {
    /// Storage data type tag. Consumers treat unknown tags as opaque.
    pub mapping_type: String,
    /// Whether an additional verbatim copy of the value is kept.
    pub stored: bool,
    pub index: IndexMode,
}

impl MappingFragment {
    pub fn new(mapping_type: impl Into<String>) -> Self {
        Self {
            mapping_type: mapping_type.into(),
            stored: false,
            index: IndexMode::default(),
        }
    }

    pub fn stored(mut self, stored: bool) -> Self {
        self.stored = stored;
        self
    }

    pub fn index(mut self, index: IndexMode) -> Self {
        self.index = index;
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "type": self.mapping_type,
            "store": if self.stored { "yes" } else { "no" },
            "index": self.index.as_str(),
        })
    }
}

/// Accumulates per-property fragments into the index mapping document.
#[derive(Debug, Default)]
pub struct MappingBuilder {
    properties: Map<String, Value>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one named fragment. A name can only be declared once per
    /// mapping.
    pub fn add(&mut self, name: &str, fragment: &MappingFragment) -> Result<(), SchemaError> {
        if self.properties.contains_key(name) {
            return Err(SchemaError::DuplicateProperty { name: name.to_string() });
        }
        self.properties.insert(name.to_string(), fragment.to_value());
        Ok(())
    }

    pub fn fragment(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert("properties".to_string(), Value::Object(self.properties.clone()));
        Value::Object(root)
    }

    /// Writes the mapping document to the sink. Sink failures propagate;
    /// mapping emission runs at schema-sync time and may fail it outright.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), SchemaError> {
        serde_json::to_writer_pretty(writer, &self.to_value())?;
        Ok(())
    }
}
