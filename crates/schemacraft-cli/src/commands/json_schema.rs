use anyhow::{Context, Result};
use clap::ValueEnum;
use schemacraft_config::SchemaCraftConfig;
use schemacraft_core::Schema;
use schemars::schema_for;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Schema files given to `export`.
    Model,
    /// The schemacraft.json configuration file.
    Config,
}

pub fn cmd_json_schema(kind: SchemaKind) -> Result<()> {
    println!("{}", render_json_schema(kind)?);
    Ok(())
}

fn render_json_schema(kind: SchemaKind) -> Result<String> {
    let schema = match kind {
        SchemaKind::Model => schema_for!(Schema),
        SchemaKind::Config => schema_for!(SchemaCraftConfig),
    };
    serde_json::to_string_pretty(&schema).context("serialize JSON schema")
}
