//! Lookup tables from abstract column types to target-native syntax.
//!
//! Every table is plain data. Unknown base types never fail: each target has a
//! fallback type.

use std::sync::LazyLock;

use regex::Regex;

use crate::sql::SqlDialect;

/// Length used for `VARCHAR` columns without a parseable `(n)` suffix.
pub const DEFAULT_VARCHAR_LENGTH: u32 = 255;

/// Prisma scalar per abstract base type.
pub const PRISMA_SCALARS: &[(&str, &str)] = &[
    ("UUID", "String"),
    ("SERIAL", "Int"),
    ("INT", "Int"),
    ("INTEGER", "Int"),
    ("VARCHAR", "String"),
    ("TEXT", "String"),
    ("BOOLEAN", "Boolean"),
    ("TIMESTAMP", "DateTime"),
    ("DATE", "DateTime"),
    ("DECIMAL", "Decimal"),
    ("JSONB", "Json"),
    ("JSON", "Json"),
    ("INET", "String"),
];
pub const PRISMA_FALLBACK: &str = "String";

/// Drizzle column builder per abstract base type.
pub const DRIZZLE_BUILDERS: &[(&str, &str)] = &[
    ("UUID", "uuid"),
    ("SERIAL", "integer"),
    ("INT", "integer"),
    ("INTEGER", "integer"),
    ("VARCHAR", "varchar"),
    ("TEXT", "text"),
    ("TIMESTAMP", "timestamp"),
    ("DATE", "date"),
    ("BOOLEAN", "boolean"),
    ("DECIMAL", "decimal"),
    ("JSONB", "jsonb"),
    ("JSON", "jsonb"),
    ("INET", "inet"),
];
pub const DRIZZLE_FALLBACK: &str = "text";

static LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d+)\s*\)").expect("valid length pattern"));
static PRECISION_SCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*(\d+)\s*,\s*(\d+)\s*\)").expect("valid precision pattern")
});

/// Render targets that consult the type tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sql(SqlDialect),
    Prisma,
    Drizzle,
}

/// A column type tag split into base name and parenthesised suffix.
///
/// `VARCHAR(255)` has base `VARCHAR` and suffix `(255)`. The base is trimmed
/// and uppercased; the raw tag is kept for verbatim SQL output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractType<'a> {
    raw: &'a str,
    base: String,
    suffix: &'a str,
}

impl<'a> AbstractType<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (base, suffix) = match raw.find('(') {
            Some(pos) => (&raw[..pos], &raw[pos..]),
            None => (raw, ""),
        };
        Self {
            raw,
            base: base.trim().to_ascii_uppercase(),
            suffix,
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    /// Single numeric parameter such as the `255` in `VARCHAR(255)`.
    pub fn length(&self) -> Option<u32> {
        LENGTH
            .captures(self.raw)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// `(precision, scale)` from a suffix like `(10,2)`.
    pub fn precision_scale(&self) -> Option<(u32, u32)> {
        let caps = PRECISION_SCALE.captures(self.raw)?;
        Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
    }
}

pub(crate) fn lookup(table: &[(&str, &'static str)], base: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(abstract_type, _)| *abstract_type == base)
        .map(|(_, native)| *native)
}

/// Translate an abstract type into the target's native type token.
///
/// SQL targets return the full type (with suffix), ORM targets return the
/// scalar or builder name only; suffix parameters are placed by the emitters.
pub fn map_type(ty: &AbstractType<'_>, target: Target) -> String {
    match target {
        Target::Sql(dialect) => dialect.spec().native_type(ty),
        Target::Prisma => lookup(PRISMA_SCALARS, ty.base())
            .unwrap_or(PRISMA_FALLBACK)
            .to_string(),
        Target::Drizzle => lookup(DRIZZLE_BUILDERS, ty.base())
            .unwrap_or(DRIZZLE_FALLBACK)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("VARCHAR(255)", "VARCHAR", "(255)")]
    #[case("varchar(64)", "VARCHAR", "(64)")]
    #[case("DECIMAL(5,2)", "DECIMAL", "(5,2)")]
    #[case("TIMESTAMP", "TIMESTAMP", "")]
    #[case(" text ", "TEXT", "")]
    #[case("VARCHAR (10)", "VARCHAR", "(10)")]
    #[case("", "", "")]
    fn parse_splits_base_and_suffix(
        #[case] raw: &str,
        #[case] base: &str,
        #[case] suffix: &str,
    ) {
        let ty = AbstractType::parse(raw);
        assert_eq!(ty.base(), base);
        assert_eq!(ty.suffix(), suffix);
        assert_eq!(ty.raw(), raw);
    }

    #[rstest]
    #[case("VARCHAR(255)", Some(255))]
    #[case("VARCHAR( 32 )", Some(32))]
    #[case("VARCHAR", None)]
    #[case("VARCHAR(max)", None)]
    #[case("VARCHAR(99999999999)", None)]
    #[case("DECIMAL(5,2)", None)]
    fn length_extraction(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(AbstractType::parse(raw).length(), expected);
    }

    #[rstest]
    #[case("DECIMAL(5,2)", Some((5, 2)))]
    #[case("DECIMAL(10, 4)", Some((10, 4)))]
    #[case("DECIMAL(10)", None)]
    #[case("DECIMAL", None)]
    fn precision_scale_extraction(#[case] raw: &str, #[case] expected: Option<(u32, u32)>) {
        assert_eq!(AbstractType::parse(raw).precision_scale(), expected);
    }

    #[rstest]
    #[case("UUID", "String", "uuid")]
    #[case("SERIAL", "Int", "integer")]
    #[case("INT", "Int", "integer")]
    #[case("integer", "Int", "integer")]
    #[case("VARCHAR(255)", "String", "varchar")]
    #[case("TEXT", "String", "text")]
    #[case("BOOLEAN", "Boolean", "boolean")]
    #[case("TIMESTAMP", "DateTime", "timestamp")]
    #[case("DATE", "DateTime", "date")]
    #[case("DECIMAL(5,2)", "Decimal", "decimal")]
    #[case("JSONB", "Json", "jsonb")]
    #[case("JSON", "Json", "jsonb")]
    #[case("INET", "String", "inet")]
    #[case("FROBNICATE", "String", "text")]
    #[case("", "String", "text")]
    fn orm_tables(#[case] raw: &str, #[case] prisma: &str, #[case] drizzle: &str) {
        let ty = AbstractType::parse(raw);
        assert_eq!(map_type(&ty, Target::Prisma), prisma);
        assert_eq!(map_type(&ty, Target::Drizzle), drizzle);
    }

    #[rstest]
    #[case("UUID", "UUID", "CHAR(36)")]
    #[case("SERIAL", "SERIAL", "INT")]
    #[case("JSONB", "JSONB", "JSON")]
    #[case("INET", "INET", "VARCHAR(45)")]
    #[case("VARCHAR(255)", "VARCHAR(255)", "VARCHAR(255)")]
    #[case("DECIMAL(5,2)", "DECIMAL(5,2)", "DECIMAL(5,2)")]
    #[case("FROBNICATE", "FROBNICATE", "FROBNICATE")]
    fn sql_types_per_dialect(#[case] raw: &str, #[case] postgres: &str, #[case] mysql: &str) {
        let ty = AbstractType::parse(raw);
        assert_eq!(map_type(&ty, Target::Sql(SqlDialect::Postgres)), postgres);
        assert_eq!(map_type(&ty, Target::Sql(SqlDialect::MySql)), mysql);
    }

    #[test]
    fn base_names_are_unique_per_table() {
        for table in [PRISMA_SCALARS, DRIZZLE_BUILDERS] {
            for (i, (base, _)) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|(other, _)| other != base),
                    "duplicate entry for {base}"
                );
            }
        }
    }
}
