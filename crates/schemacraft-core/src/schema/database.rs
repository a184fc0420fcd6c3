#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::{relationship::RelationshipDef, table::TableDef};

/// Dialect-neutral description of a whole database.
///
/// Values are built upstream and handed to the exporters as-is. Table names
/// are expected to be unique and relationships to point at existing columns,
/// but neither is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Schema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub relationships: Vec<RelationshipDef>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Schema {
    pub fn new(name: impl Into<String>, tables: Vec<TableDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tables,
            relationships: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Parse the canonical JSON form.
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Canonical JSON form: two-space indent, fields in declaration order.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Ingestion shim for the `created_at` / `updated_at` convention.
    ///
    /// Returns a copy where every column without an explicit
    /// [`TemporalDefault`](crate::TemporalDefault) gets one inferred from its
    /// exact name. Emitters only look at the tag.
    pub fn with_inferred_temporal_defaults(&self) -> Self {
        Self {
            tables: self
                .tables
                .iter()
                .map(TableDef::with_inferred_temporal_defaults)
                .collect(),
            ..self.clone()
        }
    }
}
