#[cfg(feature = "schema")]
use std::borrow::Cow;

#[cfg(feature = "schema")]
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::schema::{
    names::{ColumnName, TableName},
    reference::ReferenceAction,
};

/// Foreign key edge between two table/column pairs.
///
/// Nothing checks that the referenced tables or columns exist; emitters
/// render whatever they are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct RelationshipDef {
    pub from_table: TableName,
    pub from_column: ColumnName,
    pub to_table: TableName,
    pub to_column: ColumnName,
    pub r#type: RelationshipKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferenceAction>,
}

impl RelationshipDef {
    /// The action to render; relationships without one cascade.
    pub fn on_delete_or_default(&self) -> ReferenceAction {
        self.on_delete.clone().unwrap_or_default()
    }
}

/// Cardinality tag of a relationship. Unknown tags are kept verbatim and,
/// like [`ReferenceAction`], values compare by their wire spelling.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    Other(String),
}

impl RelationshipKind {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipKind::OneToOne => "one_to_one",
            RelationshipKind::OneToMany => "one_to_many",
            RelationshipKind::ManyToOne => "many_to_one",
            RelationshipKind::ManyToMany => "many_to_many",
            RelationshipKind::Other(raw) => raw,
        }
    }
}

impl From<String> for RelationshipKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "one_to_one" => RelationshipKind::OneToOne,
            "one_to_many" => RelationshipKind::OneToMany,
            "many_to_one" => RelationshipKind::ManyToOne,
            "many_to_many" => RelationshipKind::ManyToMany,
            _ => RelationshipKind::Other(raw),
        }
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        match kind {
            RelationshipKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl PartialEq for RelationshipKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for RelationshipKind {
    fn schema_name() -> Cow<'static, str> {
        "RelationshipKind".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["one_to_one", "one_to_many", "many_to_one", "many_to_many"]
        })
    }
}
