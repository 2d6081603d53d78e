//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod tokens;
pub mod tree;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read a source file, naming the file in the error.
pub fn read_source(file: &Path) -> anyhow::Result<String> {
    fs::read_to_string(file).with_context(|| format!("cannot read file '{}'", file.display()))
}
