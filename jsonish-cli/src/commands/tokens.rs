//! The `jsonish tokens` command.
//! `jsonish tokens` 命令。

use jsonish_lexer::Lexer;
use std::fmt::Write;
use std::path::Path;

/// Print the token stream of a file.
/// 打印文件的 token 流。
pub fn run(file: &Path) -> anyhow::Result<()> {
    let source = super::read_source(file)?;
    print!("{}", list(&source));
    Ok(())
}

/// One line per token: range, kind, raw text and any lexical error.
/// 每个 token 一行：范围、类型、原始文本以及词法错误。
pub fn list(source: &str) -> String {
    let mut out = String::new();

    for token in Lexer::new(source).tokenize() {
        let _ = write!(
            out,
            "{:<12} {:<14} {:?}",
            token.range().to_string(),
            token.kind.describe(),
            token.text
        );
        if let Some(error) = token.error {
            let code = error.code();
            let _ = write!(out, "  {code}: {}", code.description());
        }
        out.push('\n');
    }

    out
}
