use schemacraft_config::{PrismaConfig, SchemaCraftConfig};
use schemacraft_core::{ColumnDef, IndexDef, Schema, TableDef, TemporalDefault};
use schemacraft_naming::{pad_field_name, to_model_name};

use crate::emitter::SchemaEmitter;
use crate::error::ExportError;
use crate::typemap::{AbstractType, Target, map_type};

/// Providers without `@db.*` native type attributes.
const PROVIDERS_WITHOUT_NATIVE_TYPES: &[&str] = &["sqlite", "mongodb"];

pub struct PrismaEmitter {
    generator: String,
    config: PrismaConfig,
}

impl Default for PrismaEmitter {
    fn default() -> Self {
        Self::with_config(&SchemaCraftConfig::default())
    }
}

impl PrismaEmitter {
    pub fn with_config(config: &SchemaCraftConfig) -> Self {
        Self {
            generator: config.generator().to_string(),
            config: config.prisma().clone(),
        }
    }

    /// Render a Prisma schema file: generator and datasource preamble, then
    /// one `model` block per table.
    pub fn render_schema(&self, schema: &Schema) -> String {
        let mut lines: Vec<String> = vec![
            format!("// Schema generated by {}", self.generator),
            String::new(),
            "generator client {".into(),
            "  provider = \"prisma-client-js\"".into(),
            "}".into(),
            String::new(),
            "datasource db {".into(),
            format!("  provider = \"{}\"", self.config.provider),
            format!("  url      = env(\"{}\")", self.config.url_env),
            "}".into(),
            String::new(),
        ];

        for table in &schema.tables {
            self.render_model(&mut lines, table);
        }

        lines.join("\n")
    }

    fn render_model(&self, lines: &mut Vec<String>, table: &TableDef) {
        lines.push(format!("model {} {{", to_model_name(&table.name)));
        for column in &table.columns {
            lines.push(format!(
                "  {} {}",
                pad_field_name(&column.name, self.config.field_width),
                self.field_type(column)
            ));
        }
        render_indexes(lines, &table.indexes);
        lines.push("}".into());
        lines.push(String::new());
    }

    /// Type token plus attributes for one field.
    ///
    /// Order: scalar (with `?` when optional), primary key attributes,
    /// `@unique`, native type attribute, timestamp attribute.
    pub fn field_type(&self, column: &ColumnDef) -> String {
        let ty = AbstractType::parse(&column.r#type);
        let scalar = map_type(&ty, Target::Prisma);

        let mut tokens = vec![if column.is_optional() {
            format!("{}?", scalar)
        } else {
            scalar
        }];
        let mut has_default = false;

        if column.primary_key {
            tokens.push("@id".into());
        }
        match ty.base() {
            "UUID" if column.primary_key => {
                tokens.push("@default(uuid())".into());
                has_default = true;
            }
            "SERIAL" => {
                tokens.push("@default(autoincrement())".into());
                has_default = true;
            }
            _ => {}
        }
        if column.needs_unique() {
            tokens.push("@unique".into());
        }
        if let Some(native) = self.native_attribute(&ty) {
            tokens.push(native);
        }
        match column.temporal {
            Some(TemporalDefault::AutoCreateTimestamp) if !has_default => {
                tokens.push("@default(now())".into());
            }
            Some(TemporalDefault::AutoUpdateTimestamp) => tokens.push("@updatedAt".into()),
            _ => {}
        }

        tokens.join(" ")
    }

    fn native_attribute(&self, ty: &AbstractType<'_>) -> Option<String> {
        if PROVIDERS_WITHOUT_NATIVE_TYPES.contains(&self.config.provider.as_str()) {
            return None;
        }
        match ty.base() {
            "VARCHAR" => ty.length().map(|len| format!("@db.VarChar({})", len)),
            "DECIMAL" => ty
                .precision_scale()
                .map(|(p, s)| format!("@db.Decimal({}, {})", p, s)),
            _ => None,
        }
    }
}

fn render_indexes(lines: &mut Vec<String>, indexes: &[IndexDef]) {
    if indexes.is_empty() {
        return;
    }
    lines.push(String::new());
    for idx in indexes {
        let attr = if idx.unique { "@@unique" } else { "@@index" };
        lines.push(format!(
            "  {}([{}], map: \"{}\")",
            attr,
            idx.columns.join(", "),
            idx.name
        ));
    }
}

impl SchemaEmitter for PrismaEmitter {
    fn render(&self, schema: &Schema) -> Result<String, ExportError> {
        Ok(self.render_schema(schema))
    }
}
