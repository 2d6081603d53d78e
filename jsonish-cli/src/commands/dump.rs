//! The `jsonish dump` command.
//! `jsonish dump` 命令。

use crate::output::Console;
use anyhow::Context;
use jsonish_parser::{Parse, ParseOptions, parse_with_options};
use std::path::Path;

/// Print the plain JSON value of a document, even a partially broken one.
/// 打印文档的普通 JSON 值，即使文档部分损坏。
pub fn run(
    file: &Path,
    options: &ParseOptions,
    compact: bool,
    console: &Console,
) -> anyhow::Result<()> {
    let source = super::read_source(file)?;
    let parse = parse_with_options(&source, options);

    if !parse.errors.is_empty() {
        console.recovered(parse.errors.len());
    }

    match render(&parse, compact)? {
        Some(text) => println!("{text}"),
        None => console.warning("document holds no value"),
    }
    Ok(())
}

/// The root value as JSON text, or `None` without a root.
/// 根值的 JSON 文本；没有根节点时为 `None`。
pub fn render(parse: &Parse, compact: bool) -> anyhow::Result<Option<String>> {
    let Some(value) = parse.to_plain() else {
        return Ok(None);
    };
    let text = if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    };
    text.map(Some).context("failed to serialize value")
}
