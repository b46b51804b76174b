//! Token-based COMMENT ON parsing for Oracle DDL
//!
//! The sqlparser AST has no representation for Oracle's COMMENT ON VIEW, so
//! comment statements bypass AST parsing entirely and are read straight off
//! the token stream.
//!
//! ## Supported syntax
//!
//! ```sql
//! COMMENT ON TABLE users IS 'Registered users';
//! COMMENT ON COLUMN users.user_id IS 'Surrogate key';
//! COMMENT ON VIEW v_active_users IS 'Users with an active flag';
//! ```
//!
//! The object kind word after ON is not validated here; unknown kinds are
//! the dispatcher's problem (it logs and skips them).

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer};

use super::oracle_dialect::OracleDdlDialect;
use super::statements::CommentOnStatement;

/// Token-based COMMENT ON parser
pub struct CommentTokenParser {
    tokens: Vec<TokenWithSpan>,
    pos: usize,
}

/// Returns true if the first meaningful token of `sql` is the COMMENT
/// keyword. Used to route statements away from the AST parser.
pub fn is_comment_statement(sql: &str) -> bool {
    CommentTokenParser::new(sql)
        .map(|mut p| {
            p.skip_whitespace();
            p.check_keyword(Keyword::COMMENT)
        })
        .unwrap_or(false)
}

/// Parses one COMMENT ON statement. Returns None when the text is not a
/// well-formed comment statement.
pub fn parse_comment_statement(sql: &str) -> Option<CommentOnStatement> {
    CommentTokenParser::new(sql)?.parse()
}

impl CommentTokenParser {
    fn new(sql: &str) -> Option<Self> {
        let dialect = OracleDdlDialect::new();
        let tokens = Tokenizer::new(&dialect, sql)
            .tokenize_with_location()
            .ok()?;

        Some(Self { tokens, pos: 0 })
    }

    fn parse(&mut self) -> Option<CommentOnStatement> {
        self.skip_whitespace();
        if !self.check_keyword(Keyword::COMMENT) {
            return None;
        }
        self.advance();
        self.skip_whitespace();

        if !self.check_keyword(Keyword::ON) {
            return None;
        }
        self.advance();
        self.skip_whitespace();

        // Object kind: any bare word (TABLE, COLUMN, VIEW, or something the
        // dispatcher will reject)
        let object_kind = match self.current() {
            Some(Token::Word(w)) if w.quote_style.is_none() => w.value.to_uppercase(),
            _ => return None,
        };
        self.advance();
        self.skip_whitespace();

        let name_parts = self.parse_dotted_name()?;

        // IS 'message' is optional so the dispatcher can still record an
        // empty comment
        self.skip_whitespace();
        let mut message = None;
        if self.check_keyword(Keyword::IS) {
            self.advance();
            self.skip_whitespace();
            if let Some(Token::SingleQuotedString(s)) = self.current() {
                message = Some(s.clone());
                self.advance();
            }
        }

        Some(CommentOnStatement {
            object_kind,
            name_parts,
            message,
        })
    }

    /// Parses `part(.part)*`, preserving the original quoting of each part.
    fn parse_dotted_name(&mut self) -> Option<Vec<String>> {
        let mut parts = Vec::new();
        loop {
            let part = match self.current() {
                Some(Token::Word(w)) => match w.quote_style {
                    Some(q) => format!("{q}{}{q}", w.value),
                    None => w.value.clone(),
                },
                _ => return None,
            };
            parts.push(part);
            self.advance();

            if self.check_token(&Token::Period) {
                self.advance();
            } else {
                break;
            }
        }
        Some(parts)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn check_token(&self, expected: &Token) -> bool {
        self.current() == Some(expected)
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.current(), Some(Token::Word(w)) if w.keyword == keyword)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(Token::Whitespace(_))) {
            self.advance();
        }
    }
}
