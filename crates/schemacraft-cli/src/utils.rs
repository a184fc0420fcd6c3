use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use schemacraft_config::SchemaCraftConfig;
use schemacraft_core::Schema;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "schemacraft.json";

/// Load the config file, or the defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<SchemaCraftConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(SchemaCraftConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: SchemaCraftConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// Load a schema file. The extension picks the parser.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let ext = path.extension().and_then(|s| s.to_str());
    let content = fs::read_to_string(path)
        .with_context(|| format!("read schema file: {}", path.display()))?;

    let schema: Schema = match ext {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parse JSON schema: {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML schema: {}", path.display()))?,
        _ => bail!(
            "unsupported schema file extension: {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    };

    debug!(
        path = %path.display(),
        tables = schema.tables.len(),
        relationships = schema.relationships.len(),
        "loaded schema"
    );
    Ok(schema)
}
