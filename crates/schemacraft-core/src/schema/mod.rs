pub mod column;
pub mod database;
pub mod index;
pub mod names;
pub mod reference;
pub mod relationship;
pub mod table;

pub use column::{ColumnDef, TemporalDefault};
pub use database::Schema;
pub use index::IndexDef;
pub use names::{ColumnName, IndexName, TableName};
pub use reference::ReferenceAction;
pub use relationship::{RelationshipDef, RelationshipKind};
pub use table::TableDef;
