#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::{column::ColumnDef, index::IndexDef, names::TableName};

/// A table. Column and index order is declaration order in every rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct TableDef {
    pub name: TableName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub indexes: Vec<IndexDef>,
}

impl TableDef {
    pub fn new(name: impl Into<TableName>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            columns,
            indexes: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Copy of the table with every column passed through
    /// [`ColumnDef::with_inferred_temporal_default`].
    pub fn with_inferred_temporal_defaults(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(ColumnDef::with_inferred_temporal_default)
                .collect(),
            ..self.clone()
        }
    }
}
