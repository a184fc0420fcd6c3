//! Naming conventions and helpers for schemacraft exporters.
//!
//! Pure string utilities shared by the SQL and ORM emitters. The crate has no
//! dependencies and none of its functions can fail.

// ============================================================================
// Model Naming (for ORM exporters)
// ============================================================================

/// Convert a snake_case table name into a PascalCase model name.
///
/// Splits on `_`, uppercases the first character of every segment and joins
/// the segments without a separator. Empty segments contribute nothing.
///
/// # Examples
/// ```
/// use schemacraft_naming::to_model_name;
///
/// assert_eq!(to_model_name("workspace_members"), "WorkspaceMembers");
/// assert_eq!(to_model_name("users"), "Users");
/// assert_eq!(to_model_name(""), "");
/// ```
pub fn to_model_name(table: &str) -> String {
    table.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Left-align a field name in a column of `width` characters.
///
/// Names longer than `width` are returned unchanged.
pub fn pad_field_name(name: &str, width: usize) -> String {
    format!("{:<width$}", name, width = width)
}

// ============================================================================
// Constraint Naming (for SQL generation)
// ============================================================================

/// Generate a foreign key constraint name.
/// Format: fk_{from_table}_{from_column}
pub fn build_foreign_key_name(from_table: &str, from_column: &str) -> String {
    format!("fk_{}_{}", from_table, from_column)
}
