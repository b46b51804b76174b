//! Owned statement facts produced by the SQL front end.
//!
//! The catalog builder consumes these plain structs instead of the sqlparser
//! AST, so the front end can be swapped (a different dialect parser, a test
//! fixture) without touching dispatch logic. Identifiers are carried raw,
//! with their original quoting, and normalized at the catalog boundary.

use sqlparser::ast::{
    ColumnDef, ColumnOption, Expr, Ident, ObjectName, Query, SelectItem, SetExpr, Statement,
};

/// A DDL statement the catalog builder understands.
#[derive(Debug, Clone)]
pub enum DdlStatement {
    CreateTable(CreateTableStatement),
    CreateView(CreateViewStatement),
    CommentOn(CommentOnStatement),
}

/// CREATE TABLE facts: raw dotted table name parts plus column definitions
/// in declaration order.
#[derive(Debug, Clone)]
pub struct CreateTableStatement {
    pub name_parts: Vec<String>,
    pub columns: Vec<ColumnDefinition>,
}

/// One column definition from a CREATE TABLE statement.
#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    /// Raw column name, quoting preserved
    pub name: String,
    /// Base type keyword as written (e.g. "VARCHAR2", "number", "address_t")
    pub base_type: String,
    /// Declared length, e.g. the "30" in VARCHAR2(30)
    pub length: Option<String>,
    /// Declared precision and scale, e.g. ("10", "2") in NUMBER(10,2)
    pub precision_scale: Option<(String, String)>,
    /// Type text after the closing paren, e.g. " WITH TIME ZONE" in
    /// TIMESTAMP(6) WITH TIME ZONE
    pub type_suffix: Option<String>,
    /// Constraint kind tags in declaration order
    pub constraints: Vec<ColumnConstraintKind>,
    /// Default expression rendered as source text
    pub default_expr: Option<String>,
}

/// Kind tag of an inline column constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraintKind {
    NotNull,
    Null,
    PrimaryKey,
    Unique,
    Other,
}

/// CREATE VIEW facts: raw dotted view name parts plus output column aliases
/// in declaration order.
#[derive(Debug, Clone)]
pub struct CreateViewStatement {
    pub name_parts: Vec<String>,
    pub column_aliases: Vec<String>,
}

/// COMMENT ON facts.
///
/// `object_kind` is the word declared after ON, upper-cased but otherwise
/// unvalidated; the dispatcher decides what kinds it accepts. For column
/// comments the owning object is every name part but the last.
#[derive(Debug, Clone)]
pub struct CommentOnStatement {
    pub object_kind: String,
    /// Dotted name parts, raw, quoting preserved
    pub name_parts: Vec<String>,
    /// Message text without quotes; None when the statement carries none
    pub message: Option<String>,
}

/// Renders an identifier with its original quoting.
fn raw_ident(ident: &Ident) -> String {
    match ident.quote_style {
        Some(q) => format!("{q}{}{q}", ident.value),
        None => ident.value.clone(),
    }
}

fn raw_object_parts(name: &ObjectName) -> Vec<String> {
    name.0.iter().map(raw_ident).collect()
}

/// Splits a rendered data type into its base keyword, parenthesized
/// arguments and any trailing type text, e.g.
/// "NUMBER(10,2)" -> ("NUMBER", ["10", "2"], None) and
/// "TIMESTAMP(6) WITH TIME ZONE" -> ("TIMESTAMP", ["6"], Some(" WITH TIME ZONE")).
fn split_data_type(rendered: &str) -> (String, Vec<String>, Option<String>) {
    let Some((base, rest)) = rendered.split_once('(') else {
        return (rendered.trim().to_string(), Vec::new(), None);
    };
    let Some((args, tail)) = rest.split_once(')') else {
        return (rendered.trim().to_string(), Vec::new(), None);
    };
    let args = args.split(',').map(|a| a.trim().to_string()).collect();
    let suffix = if tail.trim().is_empty() {
        None
    } else {
        Some(tail.trim_end().to_string())
    };
    (base.trim().to_string(), args, suffix)
}

fn lower_column_def(def: &ColumnDef) -> ColumnDefinition {
    let (base_type, args, type_suffix) = split_data_type(&def.data_type.to_string());
    let (length, precision_scale) = match args.as_slice() {
        [n] => (Some(n.clone()), None),
        [p, s] => (None, Some((p.clone(), s.clone()))),
        _ => (None, None),
    };

    let mut constraints = Vec::new();
    let mut default_expr = None;
    for option in &def.options {
        match &option.option {
            ColumnOption::NotNull => constraints.push(ColumnConstraintKind::NotNull),
            ColumnOption::Null => constraints.push(ColumnConstraintKind::Null),
            ColumnOption::Unique { is_primary, .. } => constraints.push(if *is_primary {
                ColumnConstraintKind::PrimaryKey
            } else {
                ColumnConstraintKind::Unique
            }),
            ColumnOption::Default(expr) => default_expr = Some(expr.to_string()),
            _ => constraints.push(ColumnConstraintKind::Other),
        }
    }

    ColumnDefinition {
        name: raw_ident(&def.name),
        base_type,
        length,
        precision_scale,
        type_suffix,
        constraints,
        default_expr,
    }
}

/// Derives view output column aliases from the SELECT projection when the
/// view declares no explicit column list. Wildcard items are skipped; they
/// cannot be expanded without a live catalog.
fn infer_view_aliases(query: &Query) -> Vec<String> {
    let mut aliases = Vec::new();
    if let SetExpr::Select(select) = query.body.as_ref() {
        for item in &select.projection {
            match item {
                SelectItem::UnnamedExpr(Expr::Identifier(ident)) => {
                    aliases.push(raw_ident(ident));
                }
                SelectItem::UnnamedExpr(Expr::CompoundIdentifier(idents)) => {
                    if let Some(last) = idents.last() {
                        aliases.push(raw_ident(last));
                    }
                }
                SelectItem::ExprWithAlias { alias, .. } => {
                    aliases.push(raw_ident(alias));
                }
                _ => {}
            }
        }
    }
    aliases
}

/// Lowers a sqlparser statement into catalog facts. Statements the catalog
/// does not care about produce None and are silently ignored.
pub fn lower_statement(statement: &Statement) -> Option<DdlStatement> {
    match statement {
        Statement::CreateTable(create) => {
            let columns = create.columns.iter().map(lower_column_def).collect();
            Some(DdlStatement::CreateTable(CreateTableStatement {
                name_parts: raw_object_parts(&create.name),
                columns,
            }))
        }
        Statement::CreateView {
            name,
            columns,
            query,
            ..
        } => {
            let column_aliases = if columns.is_empty() {
                infer_view_aliases(query)
            } else {
                columns.iter().map(|c| raw_ident(&c.name)).collect()
            };
            Some(DdlStatement::CreateView(CreateViewStatement {
                name_parts: raw_object_parts(name),
                column_aliases,
            }))
        }
        _ => None,
    }
}

impl CommentOnStatement {
    /// Full dotted object name for table/view comments.
    pub fn qualified_name(&self) -> &[String] {
        &self.name_parts
    }

    /// Owning object parts for column comments (everything but the last
    /// part). Empty when the name has a single part.
    pub fn owner_parts(&self) -> &[String] {
        match self.name_parts.split_last() {
            Some((_, owner)) => owner,
            None => &[],
        }
    }

    /// Column part for column comments (the last name part).
    pub fn column_part(&self) -> Option<&str> {
        self.name_parts.last().map(String::as_str)
    }
}
