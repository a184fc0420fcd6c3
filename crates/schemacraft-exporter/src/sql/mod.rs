//! DDL rendering shared by every SQL dialect.
//!
//! Output layout, in order: header comment, one `CREATE TABLE` per table,
//! foreign keys as `ALTER TABLE` statements, then all indexes flattened in
//! table-then-index order. Dialect differences come from [`DialectSpec`].

pub mod dialect;

use schemacraft_config::SchemaCraftConfig;
use schemacraft_core::{ColumnDef, IndexDef, RelationshipDef, Schema, TableDef};
use schemacraft_naming::build_foreign_key_name;

pub use dialect::{DialectSpec, SqlDialect};

use crate::emitter::SchemaEmitter;
use crate::error::ExportError;
use crate::typemap::{AbstractType, Target, map_type};

/// Title used in the header when the schema has no name.
const UNTITLED_SCHEMA: &str = "Database Schema";
const INDENT: &str = "    ";

pub struct SqlEmitter {
    dialect: SqlDialect,
    generator: String,
    quote_identifiers: bool,
}

impl SqlEmitter {
    pub fn new(dialect: SqlDialect) -> Self {
        Self::with_config(dialect, &SchemaCraftConfig::default())
    }

    pub fn with_config(dialect: SqlDialect, config: &SchemaCraftConfig) -> Self {
        Self {
            dialect,
            generator: config.generator().to_string(),
            quote_identifiers: config.sql().quote_identifiers,
        }
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Render the whole schema as one DDL script.
    pub fn render_schema(&self, schema: &Schema) -> String {
        let spec = self.dialect.spec();
        let mut lines: Vec<String> = Vec::new();

        let title = if schema.name.is_empty() {
            UNTITLED_SCHEMA
        } else {
            schema.name.as_str()
        };
        lines.push(format!("-- {}", title));
        lines.push(format!("-- Generated by {}", self.generator));
        lines.push(format!("-- Dialect: {}", spec.label));
        lines.push(String::new());

        for table in &schema.tables {
            self.render_table(&mut lines, table);
        }

        if !schema.relationships.is_empty() {
            lines.push("-- Foreign Key Constraints".into());
            for rel in &schema.relationships {
                self.render_foreign_key(&mut lines, rel);
            }
        }

        let indexes: Vec<(&TableDef, &IndexDef)> = schema
            .tables
            .iter()
            .flat_map(|table| table.indexes.iter().map(move |idx| (table, idx)))
            .collect();
        if !indexes.is_empty() {
            lines.push("-- Indexes".into());
            for (table, idx) in indexes {
                lines.push(self.render_index(table, idx));
            }
        }

        lines.join("\n")
    }

    fn ident<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
        self.dialect.spec().quote_ident(name, self.quote_identifiers)
    }

    fn render_table(&self, lines: &mut Vec<String>, table: &TableDef) {
        if let Some(description) = table.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("-- {}", description));
        }
        lines.push(format!("CREATE TABLE {} (", self.ident(&table.name)));
        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|column| self.render_column(column))
            .collect();
        lines.push(columns.join(",\n"));
        lines.push(");".into());
        lines.push(String::new());
    }

    /// One column definition. Modifier order is fixed: `PRIMARY KEY`,
    /// `NOT NULL`, `UNIQUE`, `DEFAULT`; the primary key already implies the
    /// middle two. An auto-increment column outside the primary key must be
    /// a key of its own, so it is always `UNIQUE`.
    pub fn render_column(&self, column: &ColumnDef) -> String {
        let spec = self.dialect.spec();
        let ty = AbstractType::parse(&column.r#type);

        let mut def = format!(
            "{}{} {}",
            INDENT,
            self.ident(&column.name),
            map_type(&ty, Target::Sql(self.dialect))
        );
        let auto_increment = spec.auto_increment_keyword(&ty);
        if let Some(keyword) = auto_increment {
            def.push(' ');
            def.push_str(keyword);
        }
        if column.primary_key {
            def.push_str(" PRIMARY KEY");
        }
        if column.needs_not_null() {
            def.push_str(" NOT NULL");
        }
        if column.needs_unique() || (auto_increment.is_some() && !column.primary_key) {
            def.push_str(" UNIQUE");
        }
        if let Some(default) = column.default.as_deref().filter(|d| !d.is_empty()) {
            def.push_str(" DEFAULT ");
            def.push_str(default);
        }
        def
    }

    fn render_foreign_key(&self, lines: &mut Vec<String>, rel: &RelationshipDef) {
        let constraint = build_foreign_key_name(&rel.from_table, &rel.from_column);
        lines.push(format!("ALTER TABLE {}", self.ident(&rel.from_table)));
        lines.push(format!("{}ADD CONSTRAINT {}", INDENT, self.ident(&constraint)));
        lines.push(format!("{}FOREIGN KEY ({})", INDENT, self.ident(&rel.from_column)));
        lines.push(format!(
            "{}REFERENCES {}({})",
            INDENT,
            self.ident(&rel.to_table),
            self.ident(&rel.to_column)
        ));
        lines.push(format!("{}ON DELETE {};", INDENT, rel.on_delete_or_default()));
        lines.push(String::new());
    }

    fn render_index(&self, table: &TableDef, idx: &IndexDef) -> String {
        let unique = if idx.unique { "UNIQUE " } else { "" };
        let columns: Vec<_> = idx.columns.iter().map(|c| self.ident(c)).collect();
        format!(
            "CREATE {}INDEX {} ON {} ({});",
            unique,
            self.ident(&idx.name),
            self.ident(&table.name),
            columns.join(", ")
        )
    }
}

impl SchemaEmitter for SqlEmitter {
    fn render(&self, schema: &Schema) -> Result<String, ExportError> {
        Ok(self.render_schema(schema))
    }
}
