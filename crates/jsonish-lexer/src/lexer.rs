//! The jsonish lexer.
//! jsonish 词法分析器。

use crate::token::{ScanError, Token, TokenKind};
use jsonish_common::{Location, Position};
use std::borrow::Cow;

/// The jsonish lexer.
/// jsonish 词法分析器。
///
/// Produces tokens on demand with [`Lexer::next_token`]. Whitespace and line
/// breaks never reach the caller.
/// 通过 [`Lexer::next_token`] 按需产生 token。空白和换行不会返回给调用者。
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// Full source text
    /// 完整源码文本
    source: &'src str,
    /// Current byte offset in source
    /// 当前在源码中的字节偏移
    pos: usize,
    /// Line/character of `pos`
    /// `pos` 对应的行/字符位置
    position: Position,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    /// 为给定的源码文本创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            position: Position::ZERO,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Tokenize the entire source, up to and including the `Eof` token.
    /// 对整个源码进行词法分析，直到并包括 `Eof` token。
    pub fn tokenize(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Get the next token. Returns `Eof` forever once the input is exhausted.
    /// 获取下一个 token。输入耗尽后始终返回 `Eof`。
    pub fn next_token(&mut self) -> Token<'src> {
        // Skip whitespace and line breaks - 跳过空白和换行
        self.skip_trivia();

        let start = self.pos;
        let start_position = self.position;

        // Check for end of input - 检查是否到达输入末尾
        let Some(ch) = self.peek_char() else {
            return Token::eof(Location::empty_at(start.into(), start_position));
        };

        let mut decoded = None;
        let mut error = None;

        let kind = match ch {
            // Single character tokens - 单字符 token
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),

            // String literal - 字符串字面量
            '"' => {
                self.advance();
                let (value, err) = self.string_literal();
                decoded = Some(value);
                error = err;
                TokenKind::String
            }

            // Comment or a stray slash - 注释或孤立的斜杠
            '/' => {
                self.advance();
                match self.peek_char() {
                    Some('/') => {
                        self.skip_line_comment();
                        TokenKind::LineComment
                    }
                    Some('*') => {
                        self.advance();
                        error = self.skip_block_comment();
                        TokenKind::BlockComment
                    }
                    _ => TokenKind::Unknown,
                }
            }

            // Negative number - 负数
            '-' => {
                self.advance();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    error = self.number();
                    TokenKind::Number
                } else {
                    TokenKind::Unknown
                }
            }

            // Numbers - 数字
            '0'..='9' => {
                error = self.number();
                TokenKind::Number
            }

            // Keywords or unknown words - 关键字或未知单词
            _ => {
                while let Some(c) = self.peek_char() {
                    if !is_unknown_content(c) {
                        break;
                    }
                    self.advance();
                }
                if self.pos == start {
                    // Not a word character; take it on its own.
                    // 不是单词字符，单独取出。
                    self.advance();
                }
                TokenKind::keyword_from_str(&self.source[start..self.pos])
                    .unwrap_or(TokenKind::Unknown)
            }
        };

        let text = &self.source[start..self.pos];
        // The end position is recomputed from the token text itself, so
        // tokens spanning several lines end on the right line.
        // 结束位置根据 token 文本本身重新计算，跨行 token 也能得到正确的结束行。
        let location = Location::of_text(start, start_position, text);
        self.position = location.end();

        Token {
            kind,
            text,
            value: decoded.map_or(Cow::Borrowed(text), Cow::Owned),
            location,
            error,
        }
    }

    /// Consume one character and return `kind`.
    /// 消耗一个字符并返回 `kind`。
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Skip whitespace and line breaks, keeping `position` in step.
    /// 跳过空白和换行，同时更新 `position`。
    fn skip_trivia(&mut self) {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if is_whitespace(ch) || is_line_break(ch) {
                self.advance();
            } else {
                break;
            }
        }
        self.position = self.position.advance(&self.source[start..self.pos]);
    }

    /// Skip a line comment (`//` to end of line). The first `/` is consumed.
    /// 跳过行注释（`//` 到行尾）。第一个 `/` 已被消耗。
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if is_line_break(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Skip a block comment. The opening `/*` is consumed.
    /// 跳过块注释。开头的 `/*` 已被消耗。
    fn skip_block_comment(&mut self) -> Option<ScanError> {
        loop {
            match self.advance() {
                Some('*') if self.peek_char() == Some('/') => {
                    self.advance();
                    return None;
                }
                Some(_) => {}
                // Unterminated comment - 未终止的注释
                None => return Some(ScanError::UnexpectedEndOfComment),
            }
        }
    }

    /// Parse a string literal. The opening quote is consumed.
    /// 解析字符串字面量。开头的引号已被消耗。
    fn string_literal(&mut self) -> (String, Option<ScanError>) {
        let mut value = String::new();
        let mut error = None;

        loop {
            let Some(ch) = self.peek_char() else {
                error = Some(ScanError::UnexpectedEndOfString);
                break;
            };

            match ch {
                '"' => {
                    self.advance();
                    break;
                }
                '\\' => {
                    self.advance();
                    let Some(escaped) = self.advance() else {
                        error = Some(ScanError::UnexpectedEndOfString);
                        break;
                    };
                    match escaped {
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        '/' => value.push('/'),
                        'b' => value.push('\u{8}'),
                        'f' => value.push('\u{c}'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        'u' => match self.unicode_escape() {
                            Some(c) => value.push(c),
                            None => error = Some(ScanError::InvalidUnicode),
                        },
                        _ => error = Some(ScanError::InvalidEscapeCharacter),
                    }
                }
                // A raw line break ends the string - 原始换行会结束字符串
                c if is_line_break(c) => {
                    error = Some(ScanError::UnexpectedEndOfString);
                    break;
                }
                // Control characters are flagged but kept - 控制字符会被标记但保留
                c if (c as u32) < 0x20 => {
                    error = Some(ScanError::InvalidCharacter);
                    self.advance();
                    value.push(c);
                }
                c => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        (value, error)
    }

    /// Parse the digits of a `\u` escape. The `\u` is consumed.
    /// 解析 `\u` 转义的十六进制数字。`\u` 已被消耗。
    ///
    /// A high surrogate directly followed by an escaped low surrogate decodes
    /// to one character; an unpaired surrogate decodes to U+FFFD.
    fn unicode_escape(&mut self) -> Option<char> {
        let unit = self.hex4()?;

        if (0xD800..0xDC00).contains(&unit) {
            if self.rest().starts_with("\\u") {
                let checkpoint = self.pos;
                self.pos += 2;
                match self.hex4() {
                    Some(low) if (0xDC00..0xE000).contains(&low) => {
                        let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        return Some(char::from_u32(scalar).unwrap_or('\u{FFFD}'));
                    }
                    // Leave the second escape for the main loop - 把第二个转义留给主循环
                    _ => self.pos = checkpoint,
                }
            }
            return Some('\u{FFFD}');
        }

        Some(char::from_u32(unit).unwrap_or('\u{FFFD}'))
    }

    /// Read exactly four hex digits.
    /// 读取恰好四个十六进制数字。
    fn hex4(&mut self) -> Option<u32> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = self.peek_char().and_then(|c| c.to_digit(16))?;
            self.advance();
            value = value * 16 + digit;
        }
        Some(value)
    }

    /// Parse a number literal. Any leading `-` is consumed.
    /// 解析数字字面量。开头的 `-` 已被消耗。
    fn number(&mut self) -> Option<ScanError> {
        // Integer part - 整数部分
        if self.advance() != Some('0') {
            self.skip_digits();
        }

        // Fraction part - 小数部分
        if self.peek_char() == Some('.') {
            self.advance();
            if !self.skip_digits() {
                return Some(ScanError::UnexpectedEndOfNumber);
            }
        }

        // Exponent - 指数部分
        // A marker without digits stays in the token so that numeric
        // conversion rejects it later.
        // 没有数字的指数标记保留在 token 中，稍后数值转换时会被拒绝。
        if let Some('e' | 'E') = self.peek_char() {
            self.advance();
            if let Some('+' | '-') = self.peek_char() {
                self.advance();
            }
            self.skip_digits();
        }

        None
    }

    /// Skip ASCII digits, returning whether there was at least one.
    /// 跳过 ASCII 数字，返回是否至少有一个。
    fn skip_digits(&mut self) -> bool {
        let start = self.pos;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.pos > start
    }
}

/// Whitespace as the JSONC scanner sees it.
/// JSONC 扫描器所认定的空白字符。
fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{B}'
            | '\u{C}'
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200B}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Characters that can be part of a bare word (keyword or garbage).
/// 可以构成裸单词（关键字或无效内容）的字符。
fn is_unknown_content(ch: char) -> bool {
    !is_whitespace(ch)
        && !is_line_break(ch)
        && !matches!(ch, '{' | '}' | '[' | ']' | '"' | ':' | ',' | '/')
}
