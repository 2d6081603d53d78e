//! Building a [`Tree`] from parse events.
//! 根据解析事件构建 [`Tree`]。

use jsonish_common::Location;
use jsonish_diagnostic::{ErrorCode, ErrorCollector};
use jsonish_syntax::{Comment, NodeId, NodeKind, NodeType, Tree, TreeError};
use tracing::{debug, trace, warn};

use crate::{Literal, Parse, Visitor};

/// A [`Visitor`] that builds the syntax tree and collects errors.
/// 构建语法树并收集错误的 [`Visitor`]。
///
/// An explicit stack holds the containers that are still open; new nodes are
/// attached to the innermost one. A property name waits in `pending_key`
/// until its value arrives.
/// 显式栈保存仍未关闭的容器；新节点挂接到最内层容器。
/// 属性名保存在 `pending_key` 中，直到它的值到达。
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Tree,
    stack: Vec<NodeId>,
    pending_key: Option<(String, Location)>,
    errors: ErrorCollector,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree and errors gathered so far.
    pub fn finish(self) -> Parse {
        debug!(
            nodes = self.tree.len(),
            errors = self.errors.len(),
            "built syntax tree"
        );
        Parse {
            tree: self.tree,
            errors: self.errors.into_errors(),
        }
    }

    fn begin_container(&mut self, kind: NodeKind, location: Location) {
        let id = self.tree.alloc(kind, location);
        self.attach(id);
        self.stack.push(id);
    }

    fn end_container(&mut self, location: Location) {
        self.pending_key = None;
        let Some(id) = self.stack.pop() else {
            return;
        };
        if let Err(err) = self
            .tree
            .set_end(id, location.span.end, location.range.end)
        {
            warn!(%err, "could not close container");
        }
    }

    /// Attach a fresh node to the innermost open container, or make it the
    /// root when no container is open.
    fn attach(&mut self, id: NodeId) {
        let result = match self.stack.last().copied() {
            None => match self.tree.root() {
                None => self.tree.set_root(id),
                Some(_) => Ok(()),
            },
            Some(parent) => self.attach_to(parent, id),
        };

        if let Err(err) = result {
            warn!(%err, "could not attach node");
        }
    }

    fn attach_to(&mut self, parent: NodeId, id: NodeId) -> Result<(), TreeError> {
        match self.tree[parent].node_type() {
            NodeType::Object => {
                // A value without a property name has nowhere to go.
                let Some((key, key_location)) = self.pending_key.take() else {
                    return Ok(());
                };
                self.tree
                    .object_mut(parent)?
                    .set_with_location(key, key_location, id)?;
            }
            NodeType::Array => {
                self.tree.array_mut(parent)?.add(id)?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl Visitor for TreeBuilder {
    fn on_object_begin(&mut self, location: Location) {
        self.begin_container(NodeKind::object(), location);
    }

    fn on_object_property(&mut self, key: &str, location: Location) {
        self.pending_key = Some((key.to_string(), location));
    }

    fn on_object_end(&mut self, location: Location) {
        self.end_container(location);
    }

    fn on_array_begin(&mut self, location: Location) {
        self.begin_container(NodeKind::array(), location);
    }

    fn on_array_end(&mut self, location: Location) {
        self.end_container(location);
    }

    fn on_literal_value(&mut self, value: Literal<'_>, location: Location) {
        let kind = match value {
            Literal::String(value) => NodeKind::String(value.to_string()),
            Literal::Number(value) => NodeKind::Number(value),
            Literal::Boolean(value) => NodeKind::Boolean(value),
            Literal::Null => NodeKind::Null,
        };
        let id = self.tree.alloc(kind, location);
        self.attach(id);
    }

    fn on_comment(&mut self, comment: &Comment) {
        trace!(kind = ?comment.kind, at = %comment.location.range.start, "discarding comment");
    }

    fn on_error(&mut self, code: ErrorCode, location: Location) {
        self.errors.report(code, location);
    }
}
