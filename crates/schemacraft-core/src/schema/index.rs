#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::{ColumnName, IndexName};

/// Secondary index on a table. Column order is the index key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct IndexDef {
    pub name: IndexName,
    pub columns: Vec<ColumnName>,
    #[serde(default)]
    pub unique: bool,
}
