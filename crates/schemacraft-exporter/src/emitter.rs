use schemacraft_core::Schema;

use crate::error::ExportError;

/// Standardized interface for every export target.
///
/// Emitters are pure: the same schema always renders to the same text, and
/// the schema is only read.
pub trait SchemaEmitter {
    fn render(&self, schema: &Schema) -> Result<String, ExportError>;
}
