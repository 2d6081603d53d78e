//! The jsonish parser.

use jsonish_common::Location;
use jsonish_diagnostic::ErrorCode;
use jsonish_lexer::{Lexer, Token, TokenKind};
use jsonish_syntax::{Comment, CommentKind};
use tracing::{debug, trace};

use crate::recovery::{ARRAY_SYNC, NestingCounter, OBJECT_SYNC, is_in_set};
use crate::{Literal, ParseOptions, Visitor};

/// The jsonish parser.
///
/// A recursive descent parser that pulls tokens from the lexer and reports
/// what it finds to a [`Visitor`]. It never fails: malformed input is
/// reported through [`Visitor::on_error`] and parsing resumes at the next
/// synchronizing token.
pub struct Parser<'src, 'v, V: Visitor> {
    lexer: Lexer<'src>,
    /// Current significant token; comments and unknown tokens never land here.
    token: Token<'src>,
    options: ParseOptions,
    visitor: &'v mut V,
    /// Number of containers currently open.
    depth: usize,
    errors: usize,
}

impl<'src, 'v, V: Visitor> Parser<'src, 'v, V> {
    pub fn new(source: &'src str, options: ParseOptions, visitor: &'v mut V) -> Self {
        Self {
            lexer: Lexer::new(source),
            token: Token::eof(Location::default()),
            options,
            visitor,
            depth: 0,
            errors: 0,
        }
    }

    /// Parse a complete document. Returns whether a top-level value was found.
    pub fn parse_document(mut self) -> bool {
        self.bump();

        if self.at_end() {
            if !self.options.allow_empty_content {
                self.error(ErrorCode::ValueExpected);
            }
            debug!(errors = self.errors, "parsed empty document");
            return false;
        }

        // A root container beyond the nesting bound is consumed but builds nothing.
        let refused = self.at_container() && self.at_depth_bound();

        if !self.parse_value() {
            self.error(ErrorCode::ValueExpected);
            debug!(errors = self.errors, "document does not start with a value");
            return false;
        }

        if !self.at_end() {
            self.error(ErrorCode::EndOfFileExpected);
        }

        debug!(errors = self.errors, refused, "parsed document");
        !refused
    }

    fn parse_value(&mut self) -> bool {
        match self.current_kind() {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::String => self.parse_string(),
            _ => self.parse_literal(),
        }
    }

    fn parse_object(&mut self) -> bool {
        if self.too_deep() {
            return true;
        }

        self.visitor.on_object_begin(self.token.location);
        self.depth += 1;
        self.bump();

        let mut needs_comma = false;
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            if self.check(TokenKind::Comma) {
                if !needs_comma {
                    self.error(ErrorCode::ValueExpected);
                }
                self.separator(',');
                if self.check(TokenKind::RBrace) && self.options.allow_trailing_comma {
                    break;
                }
            } else if needs_comma {
                self.error(ErrorCode::CommaExpected);
            }
            self.parse_property();
            needs_comma = true;
        }

        self.visitor.on_object_end(self.token.location);
        self.depth -= 1;

        if !self.eat(TokenKind::RBrace) {
            self.error(ErrorCode::CloseBraceExpected);
        }
        true
    }

    fn parse_property(&mut self) {
        if !self.check(TokenKind::String) {
            self.error(ErrorCode::PropertyNameExpected);
            self.synchronize(OBJECT_SYNC);
            return;
        }

        self.visitor
            .on_object_property(&self.token.value, self.token.location);
        self.bump();

        if !self.check(TokenKind::Colon) {
            self.error(ErrorCode::ColonExpected);
            self.synchronize(OBJECT_SYNC);
            return;
        }
        self.separator(':');

        if !self.parse_value() {
            self.error(ErrorCode::ValueExpected);
            self.synchronize(OBJECT_SYNC);
        }
    }

    fn parse_array(&mut self) -> bool {
        if self.too_deep() {
            return true;
        }

        self.visitor.on_array_begin(self.token.location);
        self.depth += 1;
        self.bump();

        let mut needs_comma = false;
        while !self.check(TokenKind::RBracket) && !self.at_end() {
            if self.check(TokenKind::Comma) {
                if !needs_comma {
                    self.error(ErrorCode::ValueExpected);
                }
                self.separator(',');
                if self.check(TokenKind::RBracket) && self.options.allow_trailing_comma {
                    break;
                }
            } else if needs_comma {
                self.error(ErrorCode::CommaExpected);
            }
            if !self.parse_value() {
                self.error(ErrorCode::ValueExpected);
                self.synchronize(ARRAY_SYNC);
            }
            needs_comma = true;
        }

        self.visitor.on_array_end(self.token.location);
        self.depth -= 1;

        if !self.eat(TokenKind::RBracket) {
            self.error(ErrorCode::CloseBracketExpected);
        }
        true
    }

    fn parse_string(&mut self) -> bool {
        self.visitor
            .on_literal_value(Literal::String(&self.token.value), self.token.location);
        self.bump();
        true
    }

    fn parse_literal(&mut self) -> bool {
        let location = self.token.location;
        let value = match self.current_kind() {
            TokenKind::Number => match self.token.text.parse::<f64>() {
                Ok(value) => Literal::Number(value),
                Err(_) => {
                    self.error(ErrorCode::InvalidNumberFormat);
                    Literal::Number(0.0)
                }
            },
            TokenKind::Null => Literal::Null,
            TokenKind::True => Literal::Boolean(true),
            TokenKind::False => Literal::Boolean(false),
            _ => return false,
        };

        self.visitor.on_literal_value(value, location);
        self.bump();
        true
    }

    /// Refuse to open a container beyond the nesting bound. The whole
    /// container is skipped and no events are reported for it.
    fn too_deep(&mut self) -> bool {
        if !self.at_depth_bound() {
            return false;
        }
        trace!(depth = self.depth, "nesting bound reached");
        self.error(ErrorCode::InvalidSymbol);
        self.skip_balanced();
        true
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn current_kind(&self) -> TokenKind {
        self.token.kind
    }

    fn at_end(&self) -> bool {
        self.token.is_eof()
    }

    fn at_container(&self) -> bool {
        matches!(self.current_kind(), TokenKind::LBrace | TokenKind::LBracket)
    }

    fn at_depth_bound(&self) -> bool {
        self.depth >= self.options.max_depth
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn separator(&mut self, separator: char) {
        self.visitor.on_separator(separator, self.token.location);
        self.bump();
    }

    /// Move to the next significant token.
    ///
    /// Lexical errors are reported on the token that carries them. Comments
    /// go to the visitor (or are rejected) and unknown tokens are reported;
    /// neither becomes the current token.
    fn bump(&mut self) {
        loop {
            let token = self.lexer.next_token();

            if let Some(error) = token.error {
                self.report(error.code(), token.location);
            }

            match token.kind {
                TokenKind::LineComment | TokenKind::BlockComment => {
                    if self.options.allow_comments {
                        let kind = if token.kind == TokenKind::LineComment {
                            CommentKind::Line
                        } else {
                            CommentKind::Block
                        };
                        let comment = Comment::new(kind, token.text, token.location);
                        self.visitor.on_comment(&comment);
                    } else {
                        self.report(ErrorCode::InvalidCommentToken, token.location);
                    }
                }
                TokenKind::Unknown => self.report(ErrorCode::InvalidSymbol, token.location),
                _ => {
                    self.token = token;
                    return;
                }
            }
        }
    }

    /// Report an error at the current token.
    fn error(&mut self, code: ErrorCode) {
        self.report(code, self.token.location);
    }

    fn report(&mut self, code: ErrorCode, location: Location) {
        trace!(%code, at = %location.range.start, "syntax error");
        self.errors += 1;
        self.visitor.on_error(code, location);
    }

    /// Discard tokens one at a time until one in `set` (or end of input) is
    /// reached. Brackets inside the skipped run are not matched, so a
    /// half-typed `[` never swallows the enclosing container's closer.
    fn synchronize(&mut self, set: &[TokenKind]) {
        while !self.at_end() && !is_in_set(self.current_kind(), set) {
            trace!(skipped = self.current_kind().describe(), "recovering");
            self.bump();
        }
    }

    /// Skip from the opening delimiter under the cursor past the delimiter of
    /// the same kind that balances it.
    fn skip_balanced(&mut self) {
        let mut nesting = NestingCounter::new(self.current_kind());
        while !self.at_end() {
            let closed = nesting.update(self.current_kind());
            self.bump();
            if closed {
                break;
            }
        }
    }
}
