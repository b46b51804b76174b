//! Oracle DDL script parsing
//!
//! Splits a script into statements on `;` (respecting string literals,
//! quoted identifiers and comments), routes COMMENT ON statements to the
//! token parser, and runs everything else through sqlparser. The first
//! syntax error fails the whole file; callers skip the file and move on.

use std::path::Path;

use regex::Regex;
use sqlparser::parser::Parser;

use super::comment_parser::{is_comment_statement, parse_comment_statement};
use super::oracle_dialect::OracleDdlDialect;
use super::statements::{lower_statement, DdlStatement};
use crate::error::SchemaDocError;

/// A single statement's text with its source location
struct Chunk<'a> {
    content: &'a str,
    /// 1-based line of the chunk's first character
    start_line: usize,
}

/// Pulls "Line: X, Column: Y" out of a sqlparser error message.
fn extract_location_from_error(message: &str) -> (usize, usize) {
    let located = Regex::new(r"Line:\s*(\d+),\s*Column:\s*(\d+)")
        .ok()
        .and_then(|re| {
            let caps = re.captures(message)?;
            let line = caps.get(1)?.as_str().parse().ok()?;
            let column = caps.get(2)?.as_str().parse().ok()?;
            Some((line, column))
        });
    located.unwrap_or((1, 1))
}

/// Splits a script on top-level semicolons. A `/` alone on a line (the
/// SQL*Plus terminator) also ends a statement and is dropped.
fn split_statements(content: &str) -> Vec<Chunk<'_>> {
    enum State {
        Normal,
        SingleQuoted,
        DoubleQuoted,
        LineComment,
        BlockComment,
    }

    let mut chunks = Vec::new();
    let mut state = State::Normal;
    let mut chars = content.char_indices().peekable();
    let mut chunk_start = 0usize;
    let mut chunk_start_line = 1usize;
    let mut line = 1usize;
    // True while the current line holds only whitespace so far
    let mut line_blank = true;

    while let Some((idx, ch)) = chars.next() {
        if ch == '\n' {
            line += 1;
        }
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::SingleQuoted;
                    line_blank = false;
                }
                '"' => {
                    state = State::DoubleQuoted;
                    line_blank = false;
                }
                '-' if matches!(chars.peek(), Some((_, '-'))) => {
                    chars.next();
                    state = State::LineComment;
                    line_blank = false;
                }
                '/' if matches!(chars.peek(), Some((_, '*'))) => {
                    chars.next();
                    state = State::BlockComment;
                    line_blank = false;
                }
                ';' => {
                    chunks.push(Chunk {
                        content: &content[chunk_start..idx],
                        start_line: chunk_start_line,
                    });
                    chunk_start = idx + 1;
                    chunk_start_line = line;
                    line_blank = false;
                }
                '/' if line_blank
                    && matches!(chars.peek(), Some((_, '\n' | '\r')) | None) =>
                {
                    chunks.push(Chunk {
                        content: &content[chunk_start..idx],
                        start_line: chunk_start_line,
                    });
                    chunk_start = idx + 1;
                    chunk_start_line = line;
                }
                c if c.is_whitespace() => {}
                _ => line_blank = false,
            },
            State::SingleQuoted => {
                if ch == '\'' {
                    // '' is an escaped quote inside the literal
                    if matches!(chars.peek(), Some((_, '\''))) {
                        chars.next();
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if ch == '"' {
                    state = State::Normal;
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment => {
                if ch == '*' && matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    state = State::Normal;
                }
            }
        }
        if ch == '\n' {
            line_blank = true;
        }
    }

    if chunk_start < content.len() {
        chunks.push(Chunk {
            content: &content[chunk_start..],
            start_line: chunk_start_line,
        });
    }

    chunks
}

/// Parse a single SQL file into catalog statement facts.
pub fn parse_sql_file(path: &Path) -> Result<Vec<DdlStatement>, SchemaDocError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| SchemaDocError::SqlFileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse_sql(content, path)
}

/// Parse SQL text into catalog statement facts. `path` is used for error
/// reporting only.
pub fn parse_sql(content: &str, path: &Path) -> Result<Vec<DdlStatement>, SchemaDocError> {
    let dialect = OracleDdlDialect::new();
    let mut statements = Vec::new();

    for chunk in split_statements(content) {
        if chunk.content.trim().is_empty() {
            continue;
        }

        if is_comment_statement(chunk.content) {
            match parse_comment_statement(chunk.content) {
                Some(stmt) => statements.push(DdlStatement::CommentOn(stmt)),
                None => {
                    return Err(SchemaDocError::SqlParseError {
                        path: path.to_path_buf(),
                        line: chunk.start_line,
                        column: 1,
                        message: "malformed COMMENT ON statement".to_string(),
                    });
                }
            }
            continue;
        }

        match Parser::parse_sql(&dialect, chunk.content) {
            Ok(parsed) => statements.extend(parsed.iter().filter_map(lower_statement)),
            Err(err) => {
                let message = err.to_string();
                let (line, column) = extract_location_from_error(&message);
                return Err(SchemaDocError::SqlParseError {
                    path: path.to_path_buf(),
                    // Chunk lines are relative to the chunk start
                    line: chunk.start_line + line.saturating_sub(1),
                    column,
                    message,
                });
            }
        }
    }

    Ok(statements)
}
