//! The per-run schema catalog.

use std::collections::BTreeMap;

use super::entries::{ColumnEntry, ObjectComment};

/// Mutable catalog populated while one file's statements are dispatched.
///
/// The column stores are multimaps: an object name maps to an ordered,
/// growable column list, and re-declaring an object appends to its list.
/// The comment stores are plain maps where the last write wins.
///
/// One instance is reused across files: the run controller fills it, hands
/// it to the completion callback, then calls [`SchemaCatalog::clear`] before
/// the next file. It never holds more than one file's metadata.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    table_columns: BTreeMap<String, Vec<ColumnEntry>>,
    view_columns: BTreeMap<String, Vec<ColumnEntry>>,
    table_comments: BTreeMap<String, ObjectComment>,
    view_comments: BTreeMap<String, ObjectComment>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All table comments for the current file.
    pub fn table_comments(&self) -> impl Iterator<Item = &ObjectComment> {
        self.table_comments.values()
    }

    pub fn table_comment(&self, table_name: &str) -> Option<&ObjectComment> {
        self.table_comments.get(table_name)
    }

    /// All view comments for the current file.
    pub fn view_comments(&self) -> impl Iterator<Item = &ObjectComment> {
        self.view_comments.values()
    }

    pub fn view_comment(&self, view_name: &str) -> Option<&ObjectComment> {
        self.view_comments.get(view_name)
    }

    /// Names of all tables with recorded columns, in sorted order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.table_columns.keys().map(String::as_str)
    }

    /// Names of all views with recorded columns, in sorted order.
    pub fn view_names(&self) -> impl Iterator<Item = &str> {
        self.view_columns.keys().map(String::as_str)
    }

    /// All table columns across every table in the current file.
    pub fn all_table_columns(&self) -> impl Iterator<Item = &ColumnEntry> {
        self.table_columns.values().flatten()
    }

    /// One table's columns in declaration order; empty if unknown.
    pub fn table_columns(&self, table_name: &str) -> &[ColumnEntry] {
        self.table_columns
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All view columns across every view in the current file.
    pub fn all_view_columns(&self) -> impl Iterator<Item = &ColumnEntry> {
        self.view_columns.values().flatten()
    }

    /// One view's columns in declaration order; empty if unknown.
    pub fn view_columns(&self, view_name: &str) -> &[ColumnEntry] {
        self.view_columns
            .get(view_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.table_columns.is_empty()
            && self.view_columns.is_empty()
            && self.table_comments.is_empty()
            && self.view_comments.is_empty()
    }

    /// Empties all four collections. Called between files.
    pub fn clear(&mut self) {
        self.table_columns.clear();
        self.view_columns.clear();
        self.table_comments.clear();
        self.view_comments.clear();
    }

    pub(crate) fn append_table_columns(&mut self, name: &str, columns: Vec<ColumnEntry>) {
        self.table_columns
            .entry(name.to_string())
            .or_default()
            .extend(columns);
    }

    pub(crate) fn append_view_columns(&mut self, name: &str, columns: Vec<ColumnEntry>) {
        self.view_columns
            .entry(name.to_string())
            .or_default()
            .extend(columns);
    }

    pub(crate) fn put_table_comment(&mut self, comment: ObjectComment) {
        self.table_comments
            .insert(comment.object_name().to_string(), comment);
    }

    pub(crate) fn put_view_comment(&mut self, comment: ObjectComment) {
        self.view_comments
            .insert(comment.object_name().to_string(), comment);
    }

    pub(crate) fn has_table(&self, name: &str) -> bool {
        self.table_columns.contains_key(name)
    }

    pub(crate) fn has_view(&self, name: &str) -> bool {
        self.view_columns.contains_key(name)
    }

    /// Attaches a comment to the first column of `table` whose name matches
    /// case-insensitively. Returns false when no column matches.
    pub(crate) fn attach_table_column_comment(
        &mut self,
        table: &str,
        column: &str,
        message: String,
    ) -> bool {
        attach_comment(self.table_columns.get_mut(table), column, message)
    }

    /// Attaches a comment to the first matching view column.
    pub(crate) fn attach_view_column_comment(
        &mut self,
        view: &str,
        column: &str,
        message: String,
    ) -> bool {
        attach_comment(self.view_columns.get_mut(view), column, message)
    }
}

fn attach_comment(
    columns: Option<&mut Vec<ColumnEntry>>,
    column: &str,
    message: String,
) -> bool {
    if let Some(columns) = columns {
        for entry in columns.iter_mut() {
            if entry.column_name().eq_ignore_ascii_case(column) {
                entry.set_comment(message);
                return true;
            }
        }
    }
    false
}
