//! Wildcard exclusion of tables and views from the catalog.

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::error::SchemaDocError;

/// Kind of catalog object a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Table,
    View,
}

/// How the exclude patterns apply to COMMENT ON TABLE/VIEW statements.
///
/// Column comments are never filtered; they attach to whatever columns the
/// catalog already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentFilterMode {
    /// Drop a table/view comment when its object is excluded. Symmetric with
    /// how CREATE statements are filtered.
    #[default]
    SkipExcluded,
    /// Drop a table/view comment when its object is NOT excluded, keeping
    /// comments only for excluded objects. Compatibility switch for
    /// reproducing the output of older documentation generators that
    /// inverted this test.
    SkipIncluded,
}

/// Compiled exclude pattern with its source text kept for logging.
#[derive(Debug, Clone)]
struct ExcludePattern {
    text: String,
    pattern: Pattern,
}

/// Exclusion configuration for one parsing run.
///
/// Each list is optional and holds case-insensitive `*`/`?` glob patterns.
/// An object is excluded iff at least one pattern for its kind matches its
/// normalized name; with no list configured, nothing of that kind is
/// excluded. There is no include list.
#[derive(Debug, Clone, Default)]
pub struct ObjectFilters {
    tables: Option<Vec<ExcludePattern>>,
    views: Option<Vec<ExcludePattern>>,
    comment_mode: CommentFilterMode,
}

const CASE_INSENSITIVE: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

fn compile(patterns: &[String]) -> Result<Vec<ExcludePattern>, SchemaDocError> {
    patterns
        .iter()
        .map(|text| {
            let pattern = Pattern::new(text).map_err(|e| SchemaDocError::InvalidPattern {
                pattern: text.clone(),
                message: e.msg.to_string(),
            })?;
            Ok(ExcludePattern {
                text: text.clone(),
                pattern,
            })
        })
        .collect()
}

impl ObjectFilters {
    /// Builds filters from optional pattern lists. Fails on the first
    /// malformed pattern.
    pub fn new(
        exclude_tables: Option<&[String]>,
        exclude_views: Option<&[String]>,
    ) -> Result<Self, SchemaDocError> {
        Ok(Self {
            tables: exclude_tables.map(compile).transpose()?,
            views: exclude_views.map(compile).transpose()?,
            comment_mode: CommentFilterMode::default(),
        })
    }

    pub fn with_comment_mode(mut self, mode: CommentFilterMode) -> Self {
        self.comment_mode = mode;
        self
    }

    pub fn comment_mode(&self) -> CommentFilterMode {
        self.comment_mode
    }

    /// Returns true if `name` is excluded from the catalog for its kind.
    pub fn is_excluded(&self, name: &str, kind: ObjectKind) -> bool {
        let patterns = match kind {
            ObjectKind::Table => self.tables.as_deref(),
            ObjectKind::View => self.views.as_deref(),
        };
        let Some(patterns) = patterns else {
            return false;
        };
        for exclude in patterns {
            if exclude.pattern.matches_with(name, CASE_INSENSITIVE) {
                debug!(
                    "Skipped object {} by {} pattern \"{}\"",
                    name,
                    match kind {
                        ObjectKind::Table => "table",
                        ObjectKind::View => "view",
                    },
                    exclude.text
                );
                return true;
            }
        }
        false
    }
}
