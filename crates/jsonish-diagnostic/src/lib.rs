//! Diagnostic and error reporting for jsonish.
//! jsonish 的诊断和错误报告。
//!
//! This crate defines the closed set of syntax error codes, the error
//! collector filled in during parsing, and ariadne-based rendering.
//! 本 crate 定义封闭的语法错误码集合、解析期间填充的错误收集器，以及基于 ariadne 的渲染。

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ErrorCollector, SyntaxError};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

/// Render a syntax error to stderr.
/// 将语法错误渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, error: &SyntaxError) -> std::io::Result<()> {
    build_report(source, filename, error, true).eprint((filename, Source::from(source)))
}

/// Render a syntax error to a string, without colors.
/// 将语法错误渲染为不带颜色的字符串。
pub fn render(source: &str, filename: &str, error: &SyntaxError) -> String {
    let mut out = Vec::new();
    let report = build_report(source, filename, error, false);
    if report
        .write((filename, Source::from(source)), &mut out)
        .is_err()
    {
        return error.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report<'a>(
    source: &str,
    filename: &'a str,
    error: &SyntaxError,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    // ariadne counts characters, spans count bytes.
    let range = error.span.char_range(source);

    let mut report = Report::build(ReportKind::Error, filename, range.start)
        .with_config(Config::default().with_color(color))
        .with_code(error.code.as_str())
        .with_message(error.code.description())
        .with_label(
            Label::new((filename, range))
                .with_message(format!("at {}", error.range.start))
                .with_color(Color::Red),
        );

    if let Some(help) = error.code.suggestion() {
        report = report.with_help(help);
    }

    report.finish()
}
