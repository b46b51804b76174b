use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schemadoc::{
    collect_sql_files, CommentFilterMode, DdlExtractor, ObjectFilters, SchemaCatalog,
};

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(author, version, about = "Schema documentation catalogs from Oracle DDL scripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract table/view catalogs from a directory of DDL scripts
    Extract {
        /// Directory scanned recursively for .sql files
        #[arg(short, long)]
        dir: PathBuf,

        /// Exclude tables matching this case-insensitive glob (repeatable)
        #[arg(long = "exclude-table")]
        exclude_tables: Vec<String>,

        /// Exclude views matching this case-insensitive glob (repeatable)
        #[arg(long = "exclude-view")]
        exclude_views: Vec<String>,

        /// Keep table/view comments only for excluded objects, matching the
        /// inverted filter behavior of older generators
        #[arg(long)]
        legacy_comment_filter: bool,
    },
}

fn print_catalog(catalog: &SchemaCatalog) {
    for table in catalog.table_names() {
        println!("TABLE {}", table);
        if let Some(comment) = catalog.table_comment(table) {
            println!("  -- {}", comment.message());
        }
        for column in catalog.table_columns(table) {
            println!(
                "  {:>3}  {}  {}  nullable={}  default={}  {}",
                column.ordinal(),
                column.column_name(),
                column.data_type(),
                column.nullable(),
                column.data_default(),
                column.comment()
            );
        }
    }
    for view in catalog.view_names() {
        println!("VIEW {}", view);
        if let Some(comment) = catalog.view_comment(view) {
            println!("  -- {}", comment.message());
        }
        for column in catalog.view_columns(view) {
            println!(
                "  {:>3}  {}  {}",
                column.ordinal(),
                column.column_name(),
                column.comment()
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            dir,
            exclude_tables,
            exclude_views,
            legacy_comment_filter,
        } => {
            let files = collect_sql_files(&dir);
            if files.is_empty() {
                bail!("no .sql files found under {}", dir.display());
            }

            let comment_mode = if legacy_comment_filter {
                CommentFilterMode::SkipIncluded
            } else {
                CommentFilterMode::SkipExcluded
            };
            let filters = ObjectFilters::new(
                (!exclude_tables.is_empty()).then_some(exclude_tables.as_slice()),
                (!exclude_views.is_empty()).then_some(exclude_views.as_slice()),
            )?
            .with_comment_mode(comment_mode);

            let mut extractor = DdlExtractor::new(filters);
            let summary = extractor.run(&files, |file, catalog| {
                println!("== {}", file.display());
                print_catalog(catalog);
            });

            println!(
                "{} file(s) processed, {} skipped",
                summary.files_processed, summary.files_skipped
            );
        }
    }

    Ok(())
}
