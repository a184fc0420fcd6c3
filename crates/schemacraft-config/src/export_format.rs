use std::fmt;
use std::str::FromStr;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PostgreSQL DDL.
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "postgres"))]
    Postgresql,
    /// MySQL DDL.
    Mysql,
    /// Prisma schema file.
    Prisma,
    /// Drizzle ORM table definitions.
    Drizzle,
    /// Canonical JSON.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Postgresql,
        ExportFormat::Mysql,
        ExportFormat::Prisma,
        ExportFormat::Drizzle,
        ExportFormat::Json,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Postgresql => "postgresql",
            ExportFormat::Mysql => "mysql",
            ExportFormat::Prisma => "prisma",
            ExportFormat::Drizzle => "drizzle",
            ExportFormat::Json => "json",
        }
    }

    /// Version banner shown next to the rendered text.
    pub fn target_label(self) -> &'static str {
        match self {
            ExportFormat::Postgresql => "PostgreSQL 15+",
            ExportFormat::Mysql => "MySQL 8.0+",
            ExportFormat::Prisma => "Prisma 5.0+",
            ExportFormat::Drizzle => "Drizzle ORM",
            ExportFormat::Json => "JSON Schema",
        }
    }

    /// Extension for a downloaded or written artifact.
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Postgresql | ExportFormat::Mysql => "sql",
            ExportFormat::Prisma => "prisma",
            ExportFormat::Drizzle => "ts",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(ExportFormat::Postgresql),
            "mysql" => Ok(ExportFormat::Mysql),
            "prisma" | "prisma-style" => Ok(ExportFormat::Prisma),
            "drizzle" | "drizzle-style" => Ok(ExportFormat::Drizzle),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}
