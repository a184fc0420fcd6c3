use schemacraft_config::SchemaCraftConfig;
use schemacraft_core::{ColumnDef, IndexDef, Schema, TableDef};

use crate::emitter::SchemaEmitter;
use crate::error::ExportError;
use crate::typemap::{AbstractType, DEFAULT_VARCHAR_LENGTH, Target, map_type};

/// Everything the generated file may reference, imported up front.
const IMPORTS: &[&str] = &[
    "pgTable",
    "uuid",
    "varchar",
    "text",
    "timestamp",
    "boolean",
    "integer",
    "decimal",
    "jsonb",
    "inet",
    "date",
    "index",
    "uniqueIndex",
];

pub struct DrizzleEmitter {
    generator: String,
    module: String,
}

impl Default for DrizzleEmitter {
    fn default() -> Self {
        Self::with_config(&SchemaCraftConfig::default())
    }
}

impl DrizzleEmitter {
    pub fn with_config(config: &SchemaCraftConfig) -> Self {
        Self {
            generator: config.generator().to_string(),
            module: config.drizzle().module.clone(),
        }
    }

    /// Render a TypeScript module with one `pgTable` export per table.
    pub fn render_schema(&self, schema: &Schema) -> String {
        let mut lines: Vec<String> = vec![
            format!("// Schema generated by {}", self.generator),
            String::new(),
            "import {".into(),
        ];
        lines.extend(IMPORTS.iter().map(|name| format!("  {},", name)));
        lines.push(format!("}} from '{}';", self.module));
        lines.push(String::new());

        for table in &schema.tables {
            render_table(&mut lines, table);
        }

        lines.join("\n")
    }
}

fn render_table(lines: &mut Vec<String>, table: &TableDef) {
    lines.push(format!(
        "export const {} = pgTable({}, {{",
        table.name,
        ts_string(&table.name)
    ));
    for column in &table.columns {
        lines.push(format!("  {}: {},", column.name, column_builder(column)));
    }
    if table.indexes.is_empty() {
        lines.push("});".into());
    } else {
        lines.push("}, (table) => [".into());
        for idx in &table.indexes {
            lines.push(format!("  {},", index_builder(idx)));
        }
        lines.push("]);".into());
    }
    lines.push(String::new());
}

/// Builder call chain for one column.
pub fn column_builder(column: &ColumnDef) -> String {
    let ty = AbstractType::parse(&column.r#type);
    let builder = map_type(&ty, Target::Drizzle);
    let name = ts_string(&column.name);

    let mut expr = match ty.base() {
        "VARCHAR" => format!(
            "{}({}, {{ length: {} }})",
            builder,
            name,
            ty.length().unwrap_or(DEFAULT_VARCHAR_LENGTH)
        ),
        "DECIMAL" => match ty.precision_scale() {
            Some((precision, scale)) => format!(
                "{}({}, {{ precision: {}, scale: {} }})",
                builder, name, precision, scale
            ),
            None => format!("{}({})", builder, name),
        },
        _ => format!("{}({})", builder, name),
    };

    let mut has_primary_key = false;
    match ty.base() {
        "UUID" if column.primary_key => {
            expr.push_str(".primaryKey().defaultRandom()");
            has_primary_key = true;
        }
        "SERIAL" if column.primary_key => {
            expr.push_str(".primaryKey().generatedAlwaysAsIdentity()");
            has_primary_key = true;
        }
        "TIMESTAMP" if column.default.as_deref().is_some_and(|d| d.contains("NOW")) => {
            expr.push_str(".defaultNow()");
        }
        _ => {}
    }

    if column.primary_key && !has_primary_key {
        expr.push_str(".primaryKey()");
    }
    if column.needs_not_null() {
        expr.push_str(".notNull()");
    }
    if column.needs_unique() {
        expr.push_str(".unique()");
    }
    expr
}

fn index_builder(idx: &IndexDef) -> String {
    let builder = if idx.unique { "uniqueIndex" } else { "index" };
    let columns: Vec<String> = idx
        .columns
        .iter()
        .map(|c| format!("table.{}", c))
        .collect();
    format!("{}({}).on({})", builder, ts_string(&idx.name), columns.join(", "))
}

/// Single-quoted TypeScript string literal.
fn ts_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl SchemaEmitter for DrizzleEmitter {
    fn render(&self, schema: &Schema) -> Result<String, ExportError> {
        Ok(self.render_schema(schema))
    }
}
