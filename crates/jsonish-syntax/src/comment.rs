//! Comments seen while parsing.
//! 解析时遇到的注释。

use jsonish_common::Location;

/// A comment. Comments are handed to parse observers but never stored in a
/// [`Tree`](crate::Tree).
/// 注释。注释会交给解析观察者，但不会存入 [`Tree`](crate::Tree)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Raw text, delimiters included.
    pub text: String,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

impl Comment {
    pub fn new(kind: CommentKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Text between the comment delimiters.
    /// 注释分隔符之间的文本。
    pub fn body(&self) -> &str {
        match self.kind {
            CommentKind::Line => self.text.strip_prefix("//").unwrap_or(&self.text),
            CommentKind::Block => {
                let inner = self.text.strip_prefix("/*").unwrap_or(&self.text);
                inner.strip_suffix("*/").unwrap_or(inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_strips_delimiters() {
        let line = Comment::new(CommentKind::Line, "// hi", Location::default());
        assert_eq!(line.body(), " hi");

        let block = Comment::new(CommentKind::Block, "/* a\nb */", Location::default());
        assert_eq!(block.body(), " a\nb ");

        let open = Comment::new(CommentKind::Block, "/* open", Location::default());
        assert_eq!(open.body(), " open");
    }
}
