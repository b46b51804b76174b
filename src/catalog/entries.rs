//! Catalog entry types: columns and object comments.

/// Table-only column attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumnDetails {
    /// Normalized base type plus `(n)` or `(p,s)` suffix, e.g. "NUMBER(10,2)"
    pub data_type: String,
    /// False when a NOT NULL or PRIMARY KEY constraint is present
    pub nullable: bool,
    /// Default expression source text, or the literal string "null"
    pub data_default: String,
}

/// Capability split between table and view columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDetails {
    Table(TableColumnDetails),
    /// View columns carry no type, nullability or default
    View,
}

/// One column of a table or view.
///
/// Ordinals are 1-based, dense within one object, assigned in declaration
/// order. The type/nullable/default accessors are defined for table columns
/// only; calling them on a view column is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    object_name: String,
    column_name: String,
    ordinal: usize,
    comment: Option<String>,
    details: ColumnDetails,
}

impl ColumnEntry {
    pub fn table_column(
        object_name: String,
        column_name: String,
        ordinal: usize,
        details: TableColumnDetails,
    ) -> Self {
        Self {
            object_name,
            column_name,
            ordinal,
            comment: None,
            details: ColumnDetails::Table(details),
        }
    }

    pub fn view_column(object_name: String, column_name: String, ordinal: usize) -> Self {
        Self {
            object_name,
            column_name,
            ordinal,
            comment: None,
            details: ColumnDetails::View,
        }
    }

    /// Normalized name of the owning table or view.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Normalized column name.
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// 1-based position within the owning object.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Attached comment message; empty string when none has been attached.
    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// True once a COMMENT ON COLUMN statement has been resolved to this
    /// column, even with an empty message.
    pub fn has_comment(&self) -> bool {
        self.comment.is_some()
    }

    pub(crate) fn set_comment(&mut self, message: String) {
        self.comment = Some(message);
    }

    pub fn is_view_column(&self) -> bool {
        matches!(self.details, ColumnDetails::View)
    }

    /// Declared data type with its length/precision suffix.
    ///
    /// # Panics
    /// Panics for view columns, which have no recorded data type.
    pub fn data_type(&self) -> &str {
        match &self.details {
            ColumnDetails::Table(t) => &t.data_type,
            ColumnDetails::View => panic!("data type is not recorded for view columns"),
        }
    }

    /// Nullability rendered as "Yes" or "No".
    ///
    /// # Panics
    /// Panics for view columns, which have no recorded nullability.
    pub fn nullable(&self) -> &'static str {
        match &self.details {
            ColumnDetails::Table(t) => {
                if t.nullable {
                    "Yes"
                } else {
                    "No"
                }
            }
            ColumnDetails::View => panic!("nullability is not recorded for view columns"),
        }
    }

    /// Default expression source text, or the literal string "null".
    ///
    /// # Panics
    /// Panics for view columns, which have no recorded default.
    pub fn data_default(&self) -> &str {
        match &self.details {
            ColumnDetails::Table(t) => &t.data_default,
            ColumnDetails::View => panic!("data default is not recorded for view columns"),
        }
    }
}

/// A COMMENT ON TABLE/VIEW association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectComment {
    object_name: String,
    message: String,
}

impl ObjectComment {
    pub fn new(object_name: String, message: String) -> Self {
        Self {
            object_name,
            message,
        }
    }

    /// Normalized name of the commented object.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Comment message; empty when the statement carried none.
    pub fn message(&self) -> &str {
        &self.message
    }
}
