//! Canonical JSON form of a schema.
//!
//! Identity passthrough: the schema is serialized as-is, with fields in
//! declaration order. [`parse_canonical`] is its inverse and anchors the
//! information-preservation tests of the other targets.

use schemacraft_core::Schema;

use crate::emitter::SchemaEmitter;
use crate::error::ExportError;

#[derive(Debug, Default, Clone, Copy)]
pub struct CanonicalEmitter;

impl SchemaEmitter for CanonicalEmitter {
    fn render(&self, schema: &Schema) -> Result<String, ExportError> {
        Ok(schema.to_json_pretty()?)
    }
}

pub fn emit_canonical(schema: &Schema) -> Result<String, ExportError> {
    CanonicalEmitter.render(schema)
}

pub fn parse_canonical(text: &str) -> Result<Schema, ExportError> {
    Ok(Schema::from_json(text)?)
}
