//! The `jsonish check` command.
//! `jsonish check` 命令。

use crate::output::Console;
use anyhow::{Context, bail};
use jsonish_diagnostic::{SyntaxError, emit};
use jsonish_parser::{ParseOptions, parse_with_options};
use std::path::Path;
use tracing::debug;

/// Check a document for syntax errors.
/// 检查文档中的语法错误。
pub fn run(
    file: &Path,
    options: &ParseOptions,
    json: bool,
    verbose: bool,
    console: &Console,
) -> anyhow::Result<()> {
    let source = super::read_source(file)?;
    let parse = parse_with_options(&source, options);
    debug!(file = %file.display(), errors = parse.errors.len(), "checked document");

    if json {
        println!("{}", errors_to_json(&parse.errors)?);
    } else {
        let name = file.display().to_string();
        for error in &parse.errors {
            emit(&source, &name, error).context("failed to write diagnostic")?;
        }
    }

    if verbose {
        console.note(&format!("parsed {} nodes", parse.tree.len()));
    }

    if !parse.errors.is_empty() {
        bail!("{} syntax error(s) found", parse.errors.len());
    }

    if !json {
        console.clean(&file.display().to_string());
    }
    Ok(())
}

/// Errors as a pretty-printed JSON array.
/// 以格式化 JSON 数组表示的错误。
pub fn errors_to_json(errors: &[SyntaxError]) -> anyhow::Result<String> {
    let entries: Vec<_> = errors
        .iter()
        .map(|error| {
            serde_json::json!({
                "code": error.code.as_str(),
                "message": error.code.description(),
                "range": error.range,
            })
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("failed to serialize errors")
}
