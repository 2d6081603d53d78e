//! Terminal messages for the CLI. Everything except `clean` goes to stderr,
//! leaving stdout to the document output of `dump`, `tree` and `tokens`.
//! CLI 的终端消息。除 `clean` 外都输出到 stderr，stdout 留给 `dump`、`tree` 和 `tokens` 的文档输出。

const RED: &str = "31";
const GREEN: &str = "32";
const YELLOW: &str = "33";
const BLUE: &str = "34";

fn tagged(color: &str, tag: &str, msg: &str) -> String {
    format!("\x1b[{color}m{tag}:\x1b[0m {msg}")
}

/// Status messages, silenced as a whole by `--quiet`.
/// 状态消息，`--quiet` 会将其全部静默。
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The line to print, or `None` when quiet.
    fn line(&self, color: &str, tag: &str, msg: &str) -> Option<String> {
        (!self.quiet).then(|| tagged(color, tag, msg))
    }

    /// Report a document that parsed without errors.
    /// 报告解析无误的文档。
    pub fn clean(&self, name: &str) {
        if let Some(line) = self.line(GREEN, "ok", &format!("{name}: no syntax errors")) {
            println!("{line}");
        }
    }

    /// Warn that the output was built from a partially recovered tree.
    /// 警告输出来自部分恢复的语法树。
    pub fn recovered(&self, errors: usize) {
        self.warning(&format!(
            "{errors} syntax error(s) found; output reflects the recovered tree"
        ));
    }

    pub fn warning(&self, msg: &str) {
        if let Some(line) = self.line(YELLOW, "warning", msg) {
            eprintln!("{line}");
        }
    }

    pub fn error(&self, msg: &str) {
        if let Some(line) = self.line(RED, "error", msg) {
            eprintln!("{line}");
        }
    }

    pub fn note(&self, msg: &str) {
        if let Some(line) = self.line(BLUE, "note", msg) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_wraps_only_the_tag() {
        assert_eq!(
            tagged(RED, "error", "bad input"),
            "\x1b[31merror:\x1b[0m bad input"
        );
    }

    #[test]
    fn test_quiet_console_prints_nothing() {
        assert_eq!(Console::new(true).line(YELLOW, "warning", "partial tree"), None);
        assert_eq!(
            Console::new(false).line(YELLOW, "warning", "partial tree"),
            Some(tagged(YELLOW, "warning", "partial tree"))
        );
    }
}
