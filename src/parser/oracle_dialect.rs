//! Oracle DDL dialect for sqlparser-rs
//!
//! The generic dialect handles the CREATE TABLE / CREATE VIEW grammar this
//! crate cares about; the customization here is limited to Oracle identifier
//! rules (`$` and `#` in identifier bodies, `"` delimited identifiers).
//! COMMENT ON statements never reach this dialect; they are token-parsed in
//! [`super::comment_parser`] because the AST has no notion of COMMENT ON VIEW.

use sqlparser::dialect::Dialect;

/// Dialect for Oracle DDL scripts.
#[derive(Debug, Default)]
pub struct OracleDdlDialect;

impl OracleDdlDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDdlDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '#')
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }
}
