use std::borrow::Cow;

use crate::typemap::{AbstractType, lookup};

/// SQL dialects with their own DDL spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Postgres,
    MySql,
}

/// Capability table of a dialect: everything the shared DDL template needs
/// to know to spell a statement for it.
#[derive(Debug)]
pub struct DialectSpec {
    /// Shown in the `-- Dialect:` header line.
    pub label: &'static str,
    /// Identifier quote character, used when quoting is enabled.
    pub quote: char,
    /// Base types that are auto-incrementing integers in the abstract model.
    pub auto_increment_bases: &'static [&'static str],
    /// Keyword placed after the type of an auto-incrementing column.
    /// `None` when the dialect's own type already implies it.
    pub auto_increment: Option<&'static str>,
    /// Base type replacements; the abstract suffix is kept.
    pub type_overrides: &'static [(&'static str, &'static str)],
}

static POSTGRES: DialectSpec = DialectSpec {
    label: "POSTGRESQL",
    quote: '"',
    auto_increment_bases: &["SERIAL"],
    auto_increment: None,
    type_overrides: &[],
};

static MYSQL: DialectSpec = DialectSpec {
    label: "MYSQL",
    quote: '`',
    auto_increment_bases: &["SERIAL"],
    auto_increment: Some("AUTO_INCREMENT"),
    type_overrides: &[
        ("SERIAL", "INT"),
        ("UUID", "CHAR(36)"),
        ("JSONB", "JSON"),
        ("INET", "VARCHAR(45)"),
    ],
};

impl SqlDialect {
    pub fn spec(self) -> &'static DialectSpec {
        match self {
            SqlDialect::Postgres => &POSTGRES,
            SqlDialect::MySql => &MYSQL,
        }
    }
}

impl DialectSpec {
    /// Type as written in a column definition. Types without an override
    /// are emitted exactly as given.
    pub fn native_type(&self, ty: &AbstractType<'_>) -> String {
        match lookup(self.type_overrides, ty.base()) {
            Some(native) => format!("{}{}", native, ty.suffix()),
            None => ty.raw().to_string(),
        }
    }

    pub fn auto_increment_keyword(&self, ty: &AbstractType<'_>) -> Option<&'static str> {
        self.auto_increment
            .filter(|_| self.auto_increment_bases.iter().any(|base| *base == ty.base()))
    }

    /// Quote an identifier, doubling embedded quote characters.
    pub fn quote_ident<'a>(&self, ident: &'a str, enabled: bool) -> Cow<'a, str> {
        if !enabled {
            return Cow::Borrowed(ident);
        }
        let q = self.quote;
        let escaped = ident.replace(q, &format!("{q}{q}"));
        Cow::Owned(format!("{q}{escaped}{q}"))
    }
}
