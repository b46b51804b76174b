//! Schema catalog building

mod builder;
mod entries;
mod schema_catalog;

pub use builder::{apply_statement, apply_statements};
pub use entries::{ColumnDetails, ColumnEntry, ObjectComment, TableColumnDetails};
pub use schema_catalog::SchemaCatalog;
