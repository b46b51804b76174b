//! Run controller: drives one extraction run over a batch of DDL scripts.

use std::path::{Path, PathBuf};

use tracing::{debug, error};
use walkdir::WalkDir;

use crate::catalog::{apply_statements, SchemaCatalog};
use crate::error::SchemaDocError;
use crate::filter::ObjectFilters;
use crate::parser::parse_sql_file;

/// Outcome counts for one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files parsed, dispatched and delivered to the callback
    pub files_processed: usize,
    /// Files skipped because they could not be read or parsed
    pub files_skipped: usize,
}

/// Extracts schema catalogs from DDL scripts, one file at a time.
///
/// A single [`SchemaCatalog`] is reused for the whole run: each file fills
/// it, the completion callback observes it, and it is cleared before the
/// next file. Processing is strictly sequential; the catalog is not built
/// for concurrent mutation.
#[derive(Debug, Default)]
pub struct DdlExtractor {
    filters: ObjectFilters,
    catalog: SchemaCatalog,
}

impl DdlExtractor {
    pub fn new(filters: ObjectFilters) -> Self {
        Self {
            filters,
            catalog: SchemaCatalog::new(),
        }
    }

    /// The shared catalog. It holds one file's metadata only while the
    /// completion callback runs; after a run it is empty.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Processes `files` in the order given.
    ///
    /// Per file: parse, dispatch statements in source order, invoke
    /// `on_file_complete` with the populated catalog, then clear the
    /// catalog. A file that fails to read or parse is logged and skipped
    /// with nothing retained from it; the run always continues.
    pub fn run<I, P, F>(&mut self, files: I, mut on_file_complete: F) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&Path, &SchemaCatalog),
    {
        let mut summary = RunSummary::default();

        for file in files {
            let file = file.as_ref();
            debug!("Parsing ddl script: {}", file.display());

            let statements = match parse_sql_file(file) {
                Ok(statements) => statements,
                Err(SchemaDocError::SqlParseError {
                    path,
                    line,
                    column,
                    message,
                }) => {
                    error!(
                        "Syntax error \"{}\", line {}, column {} at {}",
                        message,
                        line,
                        column,
                        path.display()
                    );
                    summary.files_skipped += 1;
                    continue;
                }
                Err(err) => {
                    error!("{}", err);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            apply_statements(&mut self.catalog, &statements, &self.filters);

            on_file_complete(file, &self.catalog);

            self.catalog.clear();
            summary.files_processed += 1;
        }

        summary
    }
}

/// Collects `*.sql` files under `dir`, sorted by path for deterministic
/// output. The extractor itself imposes no order; this is a convenience for
/// the CLI.
pub fn collect_sql_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("sql"))
        })
        .collect();
    files.sort();
    files
}
