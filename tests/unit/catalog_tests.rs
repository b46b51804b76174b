//! Unit tests for statement dispatch and the schema catalog.

use std::path::Path;

use pretty_assertions::assert_eq;

use schemadoc::catalog::apply_statements;
use schemadoc::parser::parse_sql;
use schemadoc::{CommentFilterMode, ObjectFilters, SchemaCatalog};

/// Parses `sql` and dispatches every statement into a fresh catalog.
fn dispatch_with(sql: &str, filters: &ObjectFilters) -> SchemaCatalog {
    let statements = parse_sql(sql, Path::new("test.sql")).expect("parse failed");
    let mut catalog = SchemaCatalog::new();
    apply_statements(&mut catalog, &statements, filters);
    catalog
}

fn dispatch(sql: &str) -> SchemaCatalog {
    dispatch_with(sql, &ObjectFilters::default())
}

fn table_filters(patterns: &[&str]) -> ObjectFilters {
    let patterns: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
    ObjectFilters::new(Some(&patterns), None).unwrap()
}

// ============================================================================
// CREATE TABLE dispatch
// ============================================================================

#[test]
fn test_ordinals_are_dense_and_ordered() {
    let catalog = dispatch("CREATE TABLE T (A NUMBER, B NUMBER, C NUMBER, D NUMBER);");
    let columns = catalog.table_columns("T");
    assert_eq!(columns.len(), 4);
    let ordinals: Vec<usize> = columns.iter().map(|c| c.ordinal()).collect();
    assert_eq!(ordinals, vec![1, 2, 3, 4]);
    let names: Vec<&str> = columns.iter().map(|c| c.column_name()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_data_type_rendering() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER(10,2), B VARCHAR2(30), C DATE, D address_t);",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].data_type(), "NUMBER(10,2)");
    assert_eq!(columns[1].data_type(), "VARCHAR2(30)");
    assert_eq!(columns[2].data_type(), "DATE");
    // Base keyword is upper-cased and a trailing _T suffix stripped
    assert_eq!(columns[3].data_type(), "ADDRESS");
}

#[test]
fn test_data_type_with_trailing_type_words() {
    let catalog = dispatch(
        "CREATE TABLE T (A TIMESTAMP(6) WITH TIME ZONE, B TIMESTAMP WITH TIME ZONE);",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].data_type(), "TIMESTAMP(6) WITH TIME ZONE");
    assert_eq!(columns[1].data_type(), "TIMESTAMP WITH TIME ZONE");
}

#[test]
fn test_nullability_derivation() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER NOT NULL, B NUMBER, C NUMBER PRIMARY KEY);",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].nullable(), "No");
    assert_eq!(columns[1].nullable(), "Yes");
    assert_eq!(columns[2].nullable(), "No");
}

#[test]
fn test_default_rendering() {
    let catalog = dispatch("CREATE TABLE T (A NUMBER DEFAULT 0, B NUMBER);");
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].data_default(), "0");
    assert_eq!(columns[1].data_default(), "null");
}

#[test]
fn test_redeclared_table_appends_columns() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER);\nCREATE TABLE T (B NUMBER);",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].column_name(), "A");
    assert_eq!(columns[1].column_name(), "B");
    // Each declaration restarts its own ordinal sequence
    assert_eq!(columns[1].ordinal(), 1);
}

#[test]
fn test_quoted_table_name_normalized() {
    let catalog = dispatch("CREATE TABLE \"Users\" (\"Id\" NUMBER);");
    let columns = catalog.table_columns("Users");
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].column_name(), "Id");
}

// ============================================================================
// CREATE VIEW dispatch
// ============================================================================

#[test]
fn test_view_columns_recorded_with_ordinals() {
    let catalog = dispatch("CREATE VIEW V (X, Y) AS SELECT A, B FROM T;");
    let columns = catalog.view_columns("V");
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].column_name(), "X");
    assert_eq!(columns[0].ordinal(), 1);
    assert_eq!(columns[1].column_name(), "Y");
    assert_eq!(columns[1].ordinal(), 2);
    assert!(columns[0].is_view_column());
}

#[test]
#[should_panic(expected = "not recorded for view columns")]
fn test_view_column_type_access_panics() {
    let catalog = dispatch("CREATE VIEW V (X) AS SELECT A FROM T;");
    let _ = catalog.view_columns("V")[0].data_type();
}

// ============================================================================
// Object filtering
// ============================================================================

#[test]
fn test_excluded_table_records_no_columns() {
    let filters = table_filters(&["TMP_*"]);
    let catalog = dispatch_with(
        "CREATE TABLE TMP_LOG (A NUMBER);\nCREATE TABLE LOG_TMP (B NUMBER);",
        &filters,
    );
    assert!(catalog.table_columns("TMP_LOG").is_empty());
    assert_eq!(catalog.table_columns("LOG_TMP").len(), 1);
}

#[test]
fn test_view_filter_does_not_affect_tables() {
    let patterns = vec!["V_*".to_string()];
    let filters = ObjectFilters::new(None, Some(&patterns)).unwrap();
    let catalog = dispatch_with(
        "CREATE TABLE V_LIKE_TABLE (A NUMBER);\nCREATE VIEW V_USERS (X) AS SELECT A FROM T;",
        &filters,
    );
    assert_eq!(catalog.table_columns("V_LIKE_TABLE").len(), 1);
    assert!(catalog.view_columns("V_USERS").is_empty());
}

// ============================================================================
// Comment resolution
// ============================================================================

#[test]
fn test_column_comment_attaches_after_definition() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER);\nCOMMENT ON COLUMN T.A IS 'id';",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].comment(), "id");
    assert!(columns[0].has_comment());
}

#[test]
fn test_out_of_order_column_comment_is_dropped() {
    let catalog = dispatch(
        "COMMENT ON COLUMN T.A IS 'id';\nCREATE TABLE T (A NUMBER);",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns.len(), 1);
    assert!(!columns[0].has_comment());
}

#[test]
fn test_column_comment_match_is_case_insensitive_first_wins() {
    let catalog = dispatch(
        "CREATE TABLE T (\"a\" NUMBER, A NUMBER);\nCOMMENT ON COLUMN T.A IS 'x';",
    );
    let columns = catalog.table_columns("T");
    assert_eq!(columns[0].comment(), "x");
    assert!(!columns[1].has_comment());
}

#[test]
fn test_view_column_comment_attaches() {
    let catalog = dispatch(
        "CREATE VIEW V (X) AS SELECT A FROM T;\nCOMMENT ON COLUMN V.X IS 'alias';",
    );
    assert_eq!(catalog.view_columns("V")[0].comment(), "alias");
}

#[test]
fn test_tables_searched_before_views_for_column_comments() {
    let catalog = dispatch(
        "CREATE TABLE O (A NUMBER);\nCREATE VIEW O (A) AS SELECT A FROM T;\nCOMMENT ON COLUMN O.A IS 'c';",
    );
    assert_eq!(catalog.table_columns("O")[0].comment(), "c");
    assert!(!catalog.view_columns("O")[0].has_comment());
}

#[test]
fn test_table_comment_recorded() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER);\nCOMMENT ON TABLE T IS 'a table';",
    );
    let comment = catalog.table_comment("T").expect("comment missing");
    assert_eq!(comment.object_name(), "T");
    assert_eq!(comment.message(), "a table");
    assert!(catalog.view_comment("T").is_none());
}

#[test]
fn test_table_comment_last_write_wins() {
    let catalog = dispatch(
        "COMMENT ON TABLE T IS 'first';\nCOMMENT ON TABLE T IS 'second';",
    );
    assert_eq!(catalog.table_comment("T").unwrap().message(), "second");
    assert_eq!(catalog.table_comments().count(), 1);
}

#[test]
fn test_view_comment_recorded_separately() {
    let catalog = dispatch("COMMENT ON VIEW V IS 'a view';");
    assert_eq!(catalog.view_comment("V").unwrap().message(), "a view");
    assert!(catalog.table_comment("V").is_none());
}

#[test]
fn test_unknown_comment_kind_skipped() {
    let catalog = dispatch(
        "CREATE TABLE T (A NUMBER);\nCOMMENT ON INDEX T_PK IS 'pk';",
    );
    assert!(catalog.table_comment("T_PK").is_none());
    assert!(catalog.view_comment("T_PK").is_none());
    // The rest of the file still dispatched
    assert_eq!(catalog.table_columns("T").len(), 1);
}

// ============================================================================
// Comment filter modes
// ============================================================================

#[test]
fn test_skip_excluded_drops_comment_for_excluded_object() {
    let filters = table_filters(&["TMP_*"]);
    let catalog = dispatch_with(
        "COMMENT ON TABLE TMP_LOG IS 'scratch';\nCOMMENT ON TABLE USERS IS 'kept';",
        &filters,
    );
    assert!(catalog.table_comment("TMP_LOG").is_none());
    assert_eq!(catalog.table_comment("USERS").unwrap().message(), "kept");
}

#[test]
fn test_skip_included_keeps_comment_only_for_excluded_object() {
    let filters =
        table_filters(&["TMP_*"]).with_comment_mode(CommentFilterMode::SkipIncluded);
    let catalog = dispatch_with(
        "COMMENT ON TABLE TMP_LOG IS 'scratch';\nCOMMENT ON TABLE USERS IS 'dropped';",
        &filters,
    );
    assert_eq!(
        catalog.table_comment("TMP_LOG").unwrap().message(),
        "scratch"
    );
    assert!(catalog.table_comment("USERS").is_none());
}

#[test]
fn test_inverted_mode_drops_all_comments_when_nothing_excluded() {
    // With no exclude patterns nothing is excluded, so the two modes
    // disagree on every table/view comment
    let sql = "COMMENT ON TABLE USERS IS 'kept';";
    let default_mode = dispatch(sql);
    assert!(default_mode.table_comment("USERS").is_some());

    let inverted =
        ObjectFilters::default().with_comment_mode(CommentFilterMode::SkipIncluded);
    let inverted_catalog = dispatch_with(sql, &inverted);
    assert!(inverted_catalog.table_comment("USERS").is_none());
}

// ============================================================================
// Catalog lifecycle
// ============================================================================

#[test]
fn test_clear_empties_all_collections() {
    let mut catalog = dispatch(
        "CREATE TABLE T (A NUMBER);\nCREATE VIEW V (X) AS SELECT A FROM T;\n\
         COMMENT ON TABLE T IS 't';\nCOMMENT ON VIEW V IS 'v';",
    );
    assert!(!catalog.is_empty());
    catalog.clear();
    assert!(catalog.is_empty());
    assert!(catalog.table_columns("T").is_empty());
    assert!(catalog.view_columns("V").is_empty());
    assert!(catalog.table_comment("T").is_none());
    assert!(catalog.view_comment("V").is_none());
}

#[test]
fn test_all_columns_iterators() {
    let catalog = dispatch(
        "CREATE TABLE A (X NUMBER);\nCREATE TABLE B (Y NUMBER, Z NUMBER);\n\
         CREATE VIEW V (W) AS SELECT X FROM A;",
    );
    assert_eq!(catalog.all_table_columns().count(), 3);
    assert_eq!(catalog.all_view_columns().count(), 1);
    assert_eq!(catalog.table_names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(catalog.view_names().collect::<Vec<_>>(), vec!["V"]);
}
