use schemacraft_config::{ExportFormat, SchemaCraftConfig};
use schemacraft_core::Schema;
use tracing::debug;

use crate::canonical::CanonicalEmitter;
use crate::drizzle::DrizzleEmitter;
use crate::emitter::SchemaEmitter;
use crate::error::ExportError;
use crate::prisma::PrismaEmitter;
use crate::sql::{SqlDialect, SqlEmitter};

/// Rendered text plus the metadata shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub text: String,
    pub line_count: usize,
    pub target_label: &'static str,
}

/// Entry point that picks an emitter per format.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: SchemaCraftConfig,
}

impl Exporter {
    pub fn new(config: SchemaCraftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchemaCraftConfig {
        &self.config
    }

    pub fn export(
        &self,
        schema: &Schema,
        format: ExportFormat,
    ) -> Result<ExportOutput, ExportError> {
        let text = self.render(schema, format)?;
        let line_count = text.split('\n').count();
        debug!(
            format = %format,
            tables = schema.tables.len(),
            relationships = schema.relationships.len(),
            lines = line_count,
            "rendered schema export"
        );
        Ok(ExportOutput {
            format,
            text,
            line_count,
            target_label: format.target_label(),
        })
    }

    /// Like [`Exporter::export`], with the format given by name.
    pub fn export_by_name(
        &self,
        schema: &Schema,
        format: &str,
    ) -> Result<ExportOutput, ExportError> {
        let format: ExportFormat = format.parse()?;
        self.export(schema, format)
    }

    fn render(&self, schema: &Schema, format: ExportFormat) -> Result<String, ExportError> {
        if format == ExportFormat::Json {
            return CanonicalEmitter.render(schema);
        }

        // Ingestion: naming-convention timestamps become explicit tags.
        let schema = schema.with_inferred_temporal_defaults();
        match format {
            ExportFormat::Postgresql => {
                SqlEmitter::with_config(SqlDialect::Postgres, &self.config).render(&schema)
            }
            ExportFormat::Mysql => {
                SqlEmitter::with_config(SqlDialect::MySql, &self.config).render(&schema)
            }
            ExportFormat::Prisma => PrismaEmitter::with_config(&self.config).render(&schema),
            ExportFormat::Drizzle => DrizzleEmitter::with_config(&self.config).render(&schema),
            ExportFormat::Json => CanonicalEmitter.render(&schema),
        }
    }
}

/// Render `schema` as `format` with the default configuration.
pub fn export(schema: &Schema, format: ExportFormat) -> Result<ExportOutput, ExportError> {
    Exporter::default().export(schema, format)
}

/// Render `schema` with the format given by name, e.g. `"postgresql"`.
pub fn export_by_name(schema: &Schema, format: &str) -> Result<ExportOutput, ExportError> {
    Exporter::default().export_by_name(schema, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use schemacraft_core::{ColumnDef, TableDef};

    fn schema() -> Schema {
        Schema::new(
            "App",
            vec![TableDef::new(
                "users",
                vec![
                    ColumnDef {
                        primary_key: true,
                        nullable: false,
                        ..ColumnDef::new("id", "UUID")
                    },
                    ColumnDef {
                        default: Some("NOW()".into()),
                        ..ColumnDef::new("created_at", "TIMESTAMP")
                    },
                ],
            )],
        )
    }

    #[rstest]
    #[case(ExportFormat::Postgresql, "PostgreSQL 15+")]
    #[case(ExportFormat::Mysql, "MySQL 8.0+")]
    #[case(ExportFormat::Prisma, "Prisma 5.0+")]
    #[case(ExportFormat::Drizzle, "Drizzle ORM")]
    #[case(ExportFormat::Json, "JSON Schema")]
    fn output_metadata(#[case] format: ExportFormat, #[case] label: &str) {
        let output = export(&schema(), format).unwrap();
        assert_eq!(output.format, format);
        assert_eq!(output.target_label, label);
        assert_eq!(output.line_count, output.text.split('\n').count());
        assert!(!output.text.is_empty());
    }

    #[test]
    fn line_count_counts_trailing_empty_line() {
        let output = export(&Schema::new("", vec![]), ExportFormat::Postgresql).unwrap();
        assert_eq!(
            output.text,
            "-- Database Schema\n-- Generated by SchemaCraft\n-- Dialect: POSTGRESQL\n"
        );
        assert_eq!(output.line_count, 4);
    }

    #[test]
    fn unknown_format_name_is_an_error() {
        let err = export_by_name(&schema(), "sqlite").unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref name) if name == "sqlite"));
        assert_eq!(err.to_string(), "unsupported export format: sqlite");
    }

    #[test]
    fn format_names_dispatch_to_matching_emitter() {
        let by_name = export_by_name(&schema(), "prisma").unwrap();
        let by_enum = export(&schema(), ExportFormat::Prisma).unwrap();
        assert_eq!(by_name, by_enum);
    }

    #[test]
    fn declarative_target_sees_inferred_timestamp_tags() {
        let output = export(&schema(), ExportFormat::Prisma).unwrap();
        assert!(output.text.contains("DateTime? @default(now())"));
    }

    #[test]
    fn canonical_target_is_identity() {
        let source = schema();
        let output = export(&source, ExportFormat::Json).unwrap();
        assert_eq!(crate::parse_canonical(&output.text).unwrap(), source);
    }

    #[test]
    fn exporter_uses_its_config() {
        let config = SchemaCraftConfig {
            generator: "Acme".into(),
            ..Default::default()
        };
        let exporter = Exporter::new(config);
        assert_eq!(exporter.config().generator(), "Acme");
        for format in [ExportFormat::Postgresql, ExportFormat::Prisma, ExportFormat::Drizzle] {
            let output = exporter.export(&schema(), format).unwrap();
            assert!(output.text.contains("Acme"), "{format}");
        }
    }
}
