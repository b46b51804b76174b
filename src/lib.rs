//! schemadoc: schema documentation catalogs from Oracle DDL scripts
//!
//! This library walks batches of DDL scripts (CREATE TABLE, CREATE VIEW,
//! COMMENT ON) and builds an in-memory catalog per file: tables, views,
//! their columns, and the free-text comments attached to them, for
//! downstream documentation rendering.
//!
//! ```no_run
//! use schemadoc::{collect_sql_files, DdlExtractor, ObjectFilters};
//!
//! let filters = ObjectFilters::new(Some(&["TMP_*".to_string()]), None)?;
//! let mut extractor = DdlExtractor::new(filters);
//! let files = collect_sql_files("ddl".as_ref());
//! extractor.run(&files, |_file, catalog| {
//!     for name in catalog.table_names() {
//!         println!("{}: {} columns", name, catalog.table_columns(name).len());
//!     }
//! });
//! # Ok::<(), schemadoc::SchemaDocError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod extract;
pub mod filter;
pub mod parser;

pub use catalog::{ColumnEntry, ObjectComment, SchemaCatalog};
pub use error::SchemaDocError;
pub use extract::{collect_sql_files, DdlExtractor, RunSummary};
pub use filter::{CommentFilterMode, ObjectFilters, ObjectKind};
