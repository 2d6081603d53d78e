//! Node definitions.
//! 节点定义。

use indexmap::IndexMap;
use jsonish_common::{Location, Position, Range, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

index_vec::define_index_type! {
    /// Index of a node in its [`Tree`](crate::Tree).
    /// 节点在 [`Tree`](crate::Tree) 中的索引。
    pub struct NodeId = u32;
    DEBUG_FORMAT = "#{}";
}

/// A node of the syntax tree.
/// 语法树节点。
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub location: Location,
    /// Container holding this node; `None` for the root and detached nodes.
    /// 持有此节点的容器；根节点和已分离节点为 `None`。
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, location: Location) -> Self {
        Self {
            kind,
            location,
            parent: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn start(&self) -> Position {
        self.location.range.start
    }

    pub fn end(&self) -> Position {
        self.location.range.end
    }

    pub fn span(&self) -> Span {
        self.location.span
    }

    /// The `[start, end)` range this node covers in the document.
    /// 此节点在文档中覆盖的 `[start, end)` 区间。
    pub fn to_source_range(&self) -> Range {
        self.location.range
    }

    pub fn as_object(&self) -> Option<&Object> {
        match &self.kind {
            NodeKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match &self.kind {
            NodeKind::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            NodeKind::Boolean(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, NodeKind::Null)
    }
}

/// What a node holds.
/// 节点所持有的内容。
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `{ "key": value, ... }` / 对象
    Object(Object),
    /// `[value, ...]` / 数组
    Array(Array),
    /// `"text"` with escapes resolved / 已解析转义的字符串
    String(String),
    /// Numeric literal / 数字字面量
    Number(f64),
    /// `true` / `false`
    Boolean(bool),
    /// `null`
    Null,
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Object(_) => NodeType::Object,
            NodeKind::Array(_) => NodeType::Array,
            NodeKind::String(_) => NodeType::String,
            NodeKind::Number(_) => NodeType::Number,
            NodeKind::Boolean(_) => NodeType::Boolean,
            NodeKind::Null => NodeType::Null,
        }
    }

    /// An empty object.
    pub fn object() -> Self {
        NodeKind::Object(Object::default())
    }

    /// An empty array.
    pub fn array() -> Self {
        NodeKind::Array(Array::default())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Object(_) | NodeKind::Array(_))
    }
}

/// The discriminant of a [`NodeKind`].
/// [`NodeKind`] 的判别值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::String => "string",
            NodeType::Number => "number",
            NodeType::Boolean => "boolean",
            NodeType::Null => "null",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object contents: unique keys in insertion order.
/// 对象内容：按插入顺序排列的唯一键。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub(crate) entries: IndexMap<String, Property>,
}

/// One `"key": value` entry of an object.
/// 对象中的一个 `"key": value` 条目。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property {
    /// Where the key was written, if the entry came from source text.
    pub key_location: Option<Location>,
    pub value: NodeId,
}

impl Object {
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.entries.get(key).map(|property| property.value)
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in insertion order.
    /// 按插入顺序返回 `(key, value)` 对。
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.entries
            .iter()
            .map(|(key, property)| (key.as_str(), property.value))
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.entries.iter().map(|(key, property)| (key.as_str(), property))
    }

    /// The key under which `node` is stored.
    pub fn key_of(&self, node: NodeId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, property)| property.value == node)
            .map(|(key, _)| key.as_str())
    }
}

/// Array contents: dense, ordered items.
/// 数组内容：稠密、有序的元素。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    pub(crate) items: Vec<NodeId>,
}

impl Array {
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// `(index, value)` pairs in order.
    /// 按顺序返回 `(index, value)` 对。
    pub fn iter(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.items.iter().copied().enumerate()
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.items.iter().position(|&item| item == node)
    }
}
