pub mod error;
pub mod schema;

pub use error::ModelError;
pub use schema::{
    ColumnDef, ColumnName, IndexDef, IndexName, ReferenceAction, RelationshipDef,
    RelationshipKind, Schema, TableDef, TableName, TemporalDefault,
};
