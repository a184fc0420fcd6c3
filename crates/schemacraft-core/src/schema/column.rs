#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::ColumnName;

/// Column name that conventionally carries the row creation time.
pub const CREATED_AT_COLUMN: &str = "created_at";
/// Column name that conventionally carries the last modification time.
pub const UPDATED_AT_COLUMN: &str = "updated_at";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ColumnDef {
    pub name: ColumnName,
    /// Dialect-neutral type tag, e.g. `UUID`, `VARCHAR(255)` or `DECIMAL(5,2)`.
    pub r#type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    /// Literal or expression, emitted verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal: Option<TemporalDefault>,
}

fn default_nullable() -> bool {
    true
}

/// Timestamp behaviour an ORM can maintain on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TemporalDefault {
    /// Set once when the row is inserted.
    AutoCreateTimestamp,
    /// Refreshed on every update.
    AutoUpdateTimestamp,
}

impl TemporalDefault {
    /// Infer the tag from the `created_at` / `updated_at` naming convention.
    /// Only exact names match.
    pub fn from_column_name(name: &str) -> Option<Self> {
        match name {
            CREATED_AT_COLUMN => Some(TemporalDefault::AutoCreateTimestamp),
            UPDATED_AT_COLUMN => Some(TemporalDefault::AutoUpdateTimestamp),
            _ => None,
        }
    }
}

impl ColumnDef {
    /// Shorthand for a nullable, non-key column.
    pub fn new(name: impl Into<ColumnName>, r#type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            nullable: true,
            primary_key: false,
            unique: false,
            default: None,
            description: None,
            temporal: None,
        }
    }

    /// NOT NULL has to be spelled out: not nullable and not already implied by the primary key.
    pub fn needs_not_null(&self) -> bool {
        !self.nullable && !self.primary_key
    }

    /// UNIQUE has to be spelled out: unique and not already implied by the primary key.
    pub fn needs_unique(&self) -> bool {
        self.unique && !self.primary_key
    }

    /// Nullable in the ORM sense. Primary keys are never optional.
    pub fn is_optional(&self) -> bool {
        self.nullable && !self.primary_key
    }

    /// Copy of this column with `temporal` filled from the naming convention
    /// when it was not set explicitly. The convention only applies to columns
    /// that carry a non-empty default.
    pub fn with_inferred_temporal_default(&self) -> Self {
        let mut column = self.clone();
        let has_default = column.default.as_deref().is_some_and(|d| !d.is_empty());
        if column.temporal.is_none() && has_default {
            column.temporal = TemporalDefault::from_column_name(&column.name);
        }
        column
    }
}
