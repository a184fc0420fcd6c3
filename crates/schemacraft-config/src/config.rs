#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::export_format::ExportFormat;

fn default_generator() -> String {
    "SchemaCraft".to_string()
}

/// SQL DDL export configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SqlConfig {
    /// Quote table, column, constraint and index names with the dialect's
    /// quote character. Default: `false`.
    #[serde(default)]
    pub quote_identifiers: bool,
}

/// Prisma schema export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PrismaConfig {
    /// `provider` of the generated `datasource db` block.
    /// Default: `"postgresql"`
    #[serde(default = "default_prisma_provider")]
    pub provider: String,
    /// Environment variable holding the connection URL.
    /// Default: `"DATABASE_URL"`
    #[serde(default = "default_prisma_url_env")]
    pub url_env: String,
    /// Width field names are padded to. Default: `20`
    #[serde(default = "default_prisma_field_width")]
    pub field_width: usize,
}

fn default_prisma_provider() -> String {
    "postgresql".to_string()
}

fn default_prisma_url_env() -> String {
    "DATABASE_URL".to_string()
}

fn default_prisma_field_width() -> usize {
    20
}

impl Default for PrismaConfig {
    fn default() -> Self {
        Self {
            provider: default_prisma_provider(),
            url_env: default_prisma_url_env(),
            field_width: default_prisma_field_width(),
        }
    }
}

/// Drizzle export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DrizzleConfig {
    /// Module the column builders are imported from.
    /// Default: `"drizzle-orm/pg-core"`
    #[serde(default = "default_drizzle_module")]
    pub module: String,
}

fn default_drizzle_module() -> String {
    "drizzle-orm/pg-core".to_string()
}

impl Default for DrizzleConfig {
    fn default() -> Self {
        Self {
            module: default_drizzle_module(),
        }
    }
}

/// Top-level schemacraft configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SchemaCraftConfig {
    /// Name written into generated headers.
    #[serde(default = "default_generator")]
    pub generator: String,
    /// Format used when none is given on the command line.
    #[serde(default)]
    pub default_format: ExportFormat,
    #[serde(default)]
    pub sql: SqlConfig,
    #[serde(default)]
    pub prisma: PrismaConfig,
    #[serde(default)]
    pub drizzle: DrizzleConfig,
}

impl Default for SchemaCraftConfig {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            default_format: ExportFormat::default(),
            sql: SqlConfig::default(),
            prisma: PrismaConfig::default(),
            drizzle: DrizzleConfig::default(),
        }
    }
}

impl SchemaCraftConfig {
    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn sql(&self) -> &SqlConfig {
        &self.sql
    }

    pub fn prisma(&self) -> &PrismaConfig {
        &self.prisma
    }

    pub fn drizzle(&self) -> &DrizzleConfig {
        &self.drizzle
    }
}
