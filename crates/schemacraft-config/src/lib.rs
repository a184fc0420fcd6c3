pub mod config;
pub mod error;
pub mod export_format;

pub use config::{DrizzleConfig, PrismaConfig, SchemaCraftConfig, SqlConfig};
pub use error::ConfigError;
pub use export_format::ExportFormat;
