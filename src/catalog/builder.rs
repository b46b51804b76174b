//! Statement dispatch: turns parsed DDL facts into catalog entries.
//!
//! Statements must arrive in source order; column comment resolution only
//! finds objects whose CREATE statement was already dispatched. Errors here
//! are per-statement: they are logged and the statement is skipped, the run
//! continues.

use tracing::error;

use crate::filter::{CommentFilterMode, ObjectFilters, ObjectKind};
use crate::parser::{
    normalize_identifier, normalize_type_name, ColumnConstraintKind, ColumnDefinition,
    CommentOnStatement, CreateTableStatement, CreateViewStatement, DdlStatement,
};

use super::entries::{ColumnEntry, ObjectComment, TableColumnDetails};
use super::schema_catalog::SchemaCatalog;

/// Normalizes each dotted name part and rejoins them.
fn normalize_object_name(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| normalize_identifier(p))
        .collect::<Vec<_>>()
        .join(".")
}

/// Renders the catalog data type: normalized base keyword, the declared
/// length or precision/scale arguments, and any trailing type text such as
/// " WITH TIME ZONE".
fn render_data_type(column: &ColumnDefinition) -> String {
    let base = normalize_type_name(&normalize_identifier(&column.base_type));
    let rendered = match (&column.length, &column.precision_scale) {
        (Some(n), _) => format!("{base}({n})"),
        (None, Some((p, s))) => format!("{base}({p},{s})"),
        (None, None) => base,
    };
    match &column.type_suffix {
        Some(suffix) => format!("{rendered}{suffix}"),
        None => rendered,
    }
}

fn build_table_column(table: &str, column: &ColumnDefinition, ordinal: usize) -> ColumnEntry {
    let nullable = !column.constraints.iter().any(|c| {
        matches!(
            c,
            ColumnConstraintKind::NotNull | ColumnConstraintKind::PrimaryKey
        )
    });
    let data_default = column
        .default_expr
        .clone()
        .unwrap_or_else(|| "null".to_string());

    ColumnEntry::table_column(
        table.to_string(),
        normalize_identifier(&column.name),
        ordinal,
        TableColumnDetails {
            data_type: render_data_type(column),
            nullable,
            data_default,
        },
    )
}

fn apply_create_table(
    catalog: &mut SchemaCatalog,
    statement: &CreateTableStatement,
    filters: &ObjectFilters,
) {
    let table_name = normalize_object_name(&statement.name_parts);
    if filters.is_excluded(&table_name, ObjectKind::Table) {
        return;
    }

    let columns = statement
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| build_table_column(&table_name, column, index + 1))
        .collect();
    catalog.append_table_columns(&table_name, columns);
}

fn apply_create_view(
    catalog: &mut SchemaCatalog,
    statement: &CreateViewStatement,
    filters: &ObjectFilters,
) {
    let view_name = normalize_object_name(&statement.name_parts);
    if filters.is_excluded(&view_name, ObjectKind::View) {
        return;
    }

    let columns = statement
        .column_aliases
        .iter()
        .enumerate()
        .map(|(index, alias)| {
            ColumnEntry::view_column(
                view_name.clone(),
                normalize_identifier(alias),
                index + 1,
            )
        })
        .collect();
    catalog.append_view_columns(&view_name, columns);
}

fn apply_comment_on(
    catalog: &mut SchemaCatalog,
    statement: &CommentOnStatement,
    filters: &ObjectFilters,
) {
    let message = statement.message.clone().unwrap_or_default();

    match statement.object_kind.as_str() {
        "COLUMN" => {
            let owner = normalize_object_name(statement.owner_parts());
            let Some(column) = statement.column_part() else {
                error!("Comment statement without a column name");
                return;
            };
            let column = normalize_identifier(column);

            if catalog.has_table(&owner) {
                catalog.attach_table_column_comment(&owner, &column, message);
            } else if catalog.has_view(&owner) {
                catalog.attach_view_column_comment(&owner, &column, message);
            } else {
                // Create table/view statements must precede comment statements
                error!("Table or view with name '{}' not found!", owner);
            }
        }
        kind @ ("TABLE" | "VIEW") => {
            let object_kind = if kind == "TABLE" {
                ObjectKind::Table
            } else {
                ObjectKind::View
            };
            let object_name = normalize_object_name(statement.qualified_name());

            let excluded = filters.is_excluded(&object_name, object_kind);
            let skip = match filters.comment_mode() {
                CommentFilterMode::SkipExcluded => excluded,
                CommentFilterMode::SkipIncluded => !excluded,
            };
            if skip {
                return;
            }

            let comment = ObjectComment::new(object_name, message);
            match object_kind {
                ObjectKind::Table => catalog.put_table_comment(comment),
                ObjectKind::View => catalog.put_view_comment(comment),
            }
        }
        other => {
            error!("Unknown comment statement type: {}", other);
        }
    }
}

/// Dispatches one statement into the catalog.
pub fn apply_statement(
    catalog: &mut SchemaCatalog,
    statement: &DdlStatement,
    filters: &ObjectFilters,
) {
    match statement {
        DdlStatement::CreateTable(stmt) => apply_create_table(catalog, stmt, filters),
        DdlStatement::CreateView(stmt) => apply_create_view(catalog, stmt, filters),
        DdlStatement::CommentOn(stmt) => apply_comment_on(catalog, stmt, filters),
    }
}

/// Dispatches a file's statements in source order.
pub fn apply_statements(
    catalog: &mut SchemaCatalog,
    statements: &[DdlStatement],
    filters: &ObjectFilters,
) {
    for statement in statements {
        apply_statement(catalog, statement, filters);
    }
}
