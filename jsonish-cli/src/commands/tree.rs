//! The `jsonish tree` command.
//! `jsonish tree` 命令。

use crate::output::Console;
use jsonish_parser::{ParseOptions, parse_with_options};
use jsonish_syntax::{NodeId, Tree, format_path};
use std::fmt::Write;
use std::path::Path;

/// Print an outline of the syntax tree.
/// 打印语法树的大纲。
pub fn run(file: &Path, options: &ParseOptions, console: &Console) -> anyhow::Result<()> {
    let source = super::read_source(file)?;
    let parse = parse_with_options(&source, options);

    if !parse.errors.is_empty() {
        console.recovered(parse.errors.len());
    }

    print!("{}", outline(&parse.tree));
    Ok(())
}

/// One line per node, children indented under their container.
/// 每个节点一行，子节点缩进在其容器之下。
pub fn outline(tree: &Tree) -> String {
    let mut out = String::new();

    for id in tree.walk() {
        let depth = tree.ancestors(id).count();
        let node = &tree[id];
        let path = format_path(&tree.path(id));

        let _ = write!(
            out,
            "{:indent$}{path} {} {}",
            "",
            node.node_type(),
            node.to_source_range(),
            indent = depth * 2
        );
        if let Some(preview) = leaf_preview(tree, id) {
            let _ = write!(out, " {preview}");
        }
        out.push('\n');
    }

    out
}

fn leaf_preview(tree: &Tree, id: NodeId) -> Option<String> {
    if tree[id].kind.is_container() {
        return None;
    }
    Some(tree.to_plain_value(id).to_string())
}
