//! Lexical analysis for jsonish.
//! jsonish 词法分析模块。
//!
//! This crate provides the lexer that converts JSON-with-comments text into
//! tokens. Whitespace and line breaks are skipped; comments are reported as
//! their own tokens so the parser can decide what to do with them.
//! 本 crate 提供词法分析器，将带注释的 JSON 文本转换为 token 序列。
//! 空白和换行会被跳过；注释作为独立 token 报告，由解析器决定如何处理。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{ScanError, Token, TokenKind};
