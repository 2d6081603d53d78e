//! Position and path queries over a tree.
//! 基于位置和路径的树查询。

use crate::{NodeId, NodeKind, Tree};
use jsonish_common::Position;
use std::fmt;

/// One step of a path from the root: an object key or an array index.
/// 从根出发路径中的一步：对象键或数组索引。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Iterator over the containers enclosing a node, innermost first.
/// 按由内到外的顺序遍历包含某节点的容器。
#[derive(Debug, Clone)]
pub struct Ancestors<'t> {
    tree: &'t Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

impl Tree {
    /// Containers enclosing `id`, innermost first. `id` itself is excluded.
    /// 包含 `id` 的容器，由内到外。不包括 `id` 本身。
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// The deepest node whose range contains `position`.
    /// 范围包含 `position` 的最深节点。
    pub fn node_at(&self, position: Position) -> Option<NodeId> {
        let mut current = self.root()?;
        if !self[current].to_source_range().contains(position) {
            return None;
        }

        'descend: loop {
            for child in self.children(current) {
                if self[child].to_source_range().contains(position) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    /// Segments leading from the topmost ancestor of `id` down to `id`.
    /// 从 `id` 的最顶层祖先到 `id` 的路径段。
    pub fn path(&self, id: NodeId) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut child = id;

        for parent in self.ancestors(id) {
            let segment = match &self[parent].kind {
                NodeKind::Object(object) => object
                    .key_of(child)
                    .map(|key| PathSegment::Key(key.to_string())),
                NodeKind::Array(array) => array.index_of(child).map(PathSegment::Index),
                _ => None,
            };
            segments.extend(segment);
            child = parent;
        }

        segments.reverse();
        segments
    }

    /// Follow `path` from the root.
    /// 从根节点沿 `path` 查找。
    pub fn find(&self, path: &[PathSegment]) -> Option<NodeId> {
        path.iter().try_fold(self.root()?, |current, segment| {
            match (&self[current].kind, segment) {
                (NodeKind::Object(object), PathSegment::Key(key)) => object.get(key),
                (NodeKind::Array(array), PathSegment::Index(index)) => array.get(*index),
                _ => None,
            }
        })
    }
}

/// Render a path as `$.key[0]`.
/// 将路径渲染为 `$.key[0]` 形式。
pub fn format_path(segments: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in segments {
        out.push_str(&segment.to_string());
    }
    out
}
