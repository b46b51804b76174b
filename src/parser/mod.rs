//! Oracle DDL parsing front end

mod comment_parser;
mod ddl_parser;
mod identifier;
mod oracle_dialect;
mod statements;

pub use comment_parser::{is_comment_statement, parse_comment_statement};
pub use ddl_parser::{parse_sql, parse_sql_file};
pub use identifier::{normalize_identifier, normalize_type_name};
pub use oracle_dialect::OracleDdlDialect;
pub use statements::{
    ColumnConstraintKind, ColumnDefinition, CommentOnStatement, CreateTableStatement,
    CreateViewStatement, DdlStatement,
};
