//! Mutation handles for containers.
//! 容器的修改句柄。
//!
//! A handle borrows the whole tree so that attaching and detaching can keep
//! parent links and ownership in step.
//! 句柄借用整棵树，以便在挂接和分离时同步维护父链接和所有权。

use crate::{Array, NodeId, NodeKind, Object, Property, Tree, TreeError};
use jsonish_common::Location;

/// Check that `value` may be attached under `container`.
/// 检查 `value` 是否可以挂接到 `container` 下。
fn check_attach(tree: &Tree, container: NodeId, value: NodeId) -> Result<(), TreeError> {
    let node = tree.try_get(value)?;

    if value == container || tree.ancestors(container).any(|id| id == value) {
        return Err(TreeError::WouldCycle(value));
    }
    if node.parent.is_some() || tree.root() == Some(value) {
        return Err(TreeError::AlreadyAttached(value));
    }

    Ok(())
}

fn detach(tree: &mut Tree, id: NodeId) {
    tree.node_mut(id).parent = None;
}

/// Mutable view of an object node.
/// 对象节点的可变视图。
#[derive(Debug)]
pub struct ObjectMut<'t> {
    tree: &'t mut Tree,
    id: NodeId,
}

impl<'t> ObjectMut<'t> {
    pub(crate) fn new(tree: &'t mut Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    fn object(&self) -> &Object {
        match &self.tree[self.id].kind {
            NodeKind::Object(object) => object,
            _ => unreachable!("ObjectMut always refers to an object"),
        }
    }

    fn object_mut(&mut self) -> &mut Object {
        match &mut self.tree.node_mut(self.id).kind {
            NodeKind::Object(object) => object,
            _ => unreachable!("ObjectMut always refers to an object"),
        }
    }

    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.object().get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.object().has(key)
    }

    pub fn len(&self) -> usize {
        self.object().len()
    }

    pub fn is_empty(&self) -> bool {
        self.object().is_empty()
    }

    /// Set `key` to `value`.
    /// 将 `key` 设置为 `value`。
    ///
    /// A new key is appended; an existing key keeps its slot and its old value
    /// is detached and returned.
    /// 新键追加到末尾；已存在的键保持原位置，旧值被分离并返回。
    pub fn set(&mut self, key: impl Into<String>, value: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.insert(key.into(), None, value)
    }

    /// Like [`set`](Self::set), also recording where the key was written.
    /// 与 [`set`](Self::set) 相同，同时记录键在源码中的位置。
    pub fn set_with_location(
        &mut self,
        key: impl Into<String>,
        key_location: Location,
        value: NodeId,
    ) -> Result<Option<NodeId>, TreeError> {
        self.insert(key.into(), Some(key_location), value)
    }

    fn insert(
        &mut self,
        key: String,
        key_location: Option<Location>,
        value: NodeId,
    ) -> Result<Option<NodeId>, TreeError> {
        check_attach(self.tree, self.id, value)?;

        let property = Property {
            key_location,
            value,
        };
        let replaced = self
            .object_mut()
            .entries
            .insert(key, property)
            .map(|old| old.value);

        self.tree.node_mut(value).parent = Some(self.id);
        if let Some(old) = replaced {
            detach(self.tree, old);
        }

        Ok(replaced)
    }

    /// Remove `key`, returning its detached value.
    /// 移除 `key`，返回被分离的值。
    pub fn delete(&mut self, key: &str) -> Option<NodeId> {
        let removed = self.object_mut().entries.shift_remove(key)?;
        detach(self.tree, removed.value);
        Some(removed.value)
    }
}

/// Mutable view of an array node.
/// 数组节点的可变视图。
#[derive(Debug)]
pub struct ArrayMut<'t> {
    tree: &'t mut Tree,
    id: NodeId,
}

impl<'t> ArrayMut<'t> {
    pub(crate) fn new(tree: &'t mut Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    fn array(&self) -> &Array {
        match &self.tree[self.id].kind {
            NodeKind::Array(array) => array,
            _ => unreachable!("ArrayMut always refers to an array"),
        }
    }

    fn array_mut(&mut self) -> &mut Array {
        match &mut self.tree.node_mut(self.id).kind {
            NodeKind::Array(array) => array,
            _ => unreachable!("ArrayMut always refers to an array"),
        }
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.array().get(index)
    }

    pub fn len(&self) -> usize {
        self.array().len()
    }

    pub fn is_empty(&self) -> bool {
        self.array().is_empty()
    }

    /// Append `value`, returning the new length.
    /// 追加 `value`，返回新的长度。
    pub fn add(&mut self, value: NodeId) -> Result<usize, TreeError> {
        check_attach(self.tree, self.id, value)?;

        let items = &mut self.array_mut().items;
        items.push(value);
        let len = items.len();

        self.tree.node_mut(value).parent = Some(self.id);
        Ok(len)
    }

    /// Replace the item at `index`, returning the detached old item.
    /// 替换 `index` 处的元素，返回被分离的旧元素。
    pub fn set(&mut self, index: usize, value: NodeId) -> Result<NodeId, TreeError> {
        let len = self.len();
        if index >= len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        check_attach(self.tree, self.id, value)?;

        let old = std::mem::replace(&mut self.array_mut().items[index], value);
        self.tree.node_mut(value).parent = Some(self.id);
        detach(self.tree, old);
        Ok(old)
    }

    /// Remove the item at `index`, shifting later items down.
    /// 移除 `index` 处的元素，后续元素前移。
    pub fn delete(&mut self, index: usize) -> Option<NodeId> {
        if index >= self.len() {
            return None;
        }
        let removed = self.array_mut().items.remove(index);
        detach(self.tree, removed);
        Some(removed)
    }

    /// Remove `node` from this array, returning the index it had.
    /// 从数组中移除 `node`，返回它原来的索引。
    pub fn delete_node(&mut self, node: NodeId) -> Option<usize> {
        let index = self.array().index_of(node)?;
        self.delete(index);
        Some(index)
    }
}
