use serde_json::Value;

pub mod error;
pub mod schema;
pub mod shape;

pub use error::SynthError;
pub use schema::{Schema, SchemaField};
pub use shape::{resolve_shape, PrimitiveKind, Shape};

/// A synthesized record: field name to value, in schema order.
pub type MockObject = serde_json::Map<String, Value>;

/// Supplies schemas by name.
///
/// Implementations return [`SynthError::SchemaNotFound`] when no declaration with
/// the requested name exists, and may return an empty [`Schema`]; emptiness is
/// rejected by the synthesizer.
pub trait SchemaSource {
    fn load_schema(&self, name: &str) -> Result<Schema, SynthError>;
}

impl SchemaSource for std::collections::HashMap<String, Schema> {
    fn load_schema(&self, name: &str) -> Result<Schema, SynthError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| SynthError::SchemaNotFound {
                name: name.to_string(),
                source_path: "<memory>".to_string(),
            })
    }
}
