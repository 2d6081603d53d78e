//! The node arena.
//! 节点 arena。

use crate::{Array, ArrayMut, Node, NodeId, NodeKind, Object, ObjectMut, TreeError};
use index_vec::IndexVec;
use jsonish_common::{BytePos, Location, Position};
use std::ops::Index;

/// A syntax tree: every node of one document plus the root.
/// 语法树：一个文档的全部节点以及根节点。
///
/// Nodes removed from their container stay in the arena, detached, until the
/// tree is dropped.
/// 从容器中移除的节点以分离状态保留在 arena 中，直到树被释放。
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: IndexVec<NodeId, Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<&Node> {
        self.root.map(|id| &self.nodes[id])
    }

    /// Make a detached node the root of the tree.
    /// 将一个分离节点设为树的根。
    pub fn set_root(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.try_get(id)?;
        if node.parent.is_some() {
            return Err(TreeError::AlreadyAttached(id));
        }
        self.root = Some(id);
        Ok(())
    }

    /// Allocate a detached node.
    /// 分配一个分离节点。
    pub fn alloc(&mut self, kind: NodeKind, location: Location) -> NodeId {
        self.nodes.push(Node::new(kind, location))
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Whether `id` is reachable from the root.
    /// `id` 是否可以从根节点到达。
    pub fn is_attached(&self, id: NodeId) -> bool {
        if self.nodes.get(id).is_none() {
            return false;
        }
        let top = self.ancestors(id).last().unwrap_or(id);
        Some(top) == self.root
    }

    pub fn object(&self, id: NodeId) -> Option<&Object> {
        self.nodes.get(id).and_then(Node::as_object)
    }

    pub fn array(&self, id: NodeId) -> Option<&Array> {
        self.nodes.get(id).and_then(Node::as_array)
    }

    /// Mutable access to an object node.
    /// 对象节点的可变访问。
    pub fn object_mut(&mut self, id: NodeId) -> Result<ObjectMut<'_>, TreeError> {
        match self.try_get(id)?.kind {
            NodeKind::Object(_) => Ok(ObjectMut::new(self, id)),
            _ => Err(TreeError::NotAnObject(id)),
        }
    }

    /// Mutable access to an array node.
    /// 数组节点的可变访问。
    pub fn array_mut(&mut self, id: NodeId) -> Result<ArrayMut<'_>, TreeError> {
        match self.try_get(id)?.kind {
            NodeKind::Array(_) => Ok(ArrayMut::new(self, id)),
            _ => Err(TreeError::NotAnArray(id)),
        }
    }

    /// Children of a node in order; empty for leaves.
    /// 按顺序返回节点的子节点；叶节点返回空。
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.nodes.get(id).map(|node| &node.kind) {
            Some(NodeKind::Object(object)) => object.iter().map(|(_, value)| value).collect(),
            Some(NodeKind::Array(array)) => array.items().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Set the end of a node, keeping its start.
    /// 设置节点的结束位置，保持起始位置不变。
    pub fn set_end(&mut self, id: NodeId, offset: BytePos, end: Position) -> Result<(), TreeError> {
        self.try_get(id)?;
        let location = &mut self.nodes[id].location;
        location.span.end = offset;
        location.range.end = end;
        Ok(())
    }

    /// Walk every node reachable from the root, parents before children.
    /// 遍历从根节点可达的所有节点，父节点先于子节点。
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        order
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_detached() {
        let mut tree = Tree::new();
        let id = tree.alloc(NodeKind::Null, Location::default());
        assert_eq!(tree.len(), 1);
        assert!(tree.parent(id).is_none());
        assert!(!tree.is_attached(id));

        tree.set_root(id).unwrap();
        assert!(tree.is_attached(id));
    }

    #[test]
    fn test_wrong_kind_handles() {
        let mut tree = Tree::new();
        let id = tree.alloc(NodeKind::Boolean(false), Location::default());
        assert_eq!(tree.object_mut(id).err(), Some(TreeError::NotAnObject(id)));
        assert_eq!(tree.array_mut(id).err(), Some(TreeError::NotAnArray(id)));

        let missing = NodeId::new(7);
        assert_eq!(tree.object_mut(missing).err(), Some(TreeError::UnknownNode(missing)));
    }

    #[test]
    fn test_set_root_rejects_attached_node() {
        let mut tree = Tree::new();
        let array = tree.alloc(NodeKind::array(), Location::default());
        let item = tree.alloc(NodeKind::Null, Location::default());
        tree.array_mut(array).unwrap().add(item).unwrap();
        assert_eq!(tree.set_root(item), Err(TreeError::AlreadyAttached(item)));
    }

    #[test]
    fn test_walk_is_preorder() {
        let mut tree = Tree::new();
        let root = tree.alloc(NodeKind::array(), Location::default());
        let inner = tree.alloc(NodeKind::array(), Location::default());
        let a = tree.alloc(NodeKind::Number(1.0), Location::default());
        let b = tree.alloc(NodeKind::Number(2.0), Location::default());
        tree.set_root(root).unwrap();
        tree.array_mut(inner).unwrap().add(a).unwrap();
        tree.array_mut(root).unwrap().add(inner).unwrap();
        tree.array_mut(root).unwrap().add(b).unwrap();

        assert_eq!(tree.walk(), vec![root, inner, a, b]);
    }
}
