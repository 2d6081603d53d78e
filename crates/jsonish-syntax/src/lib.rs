//! Syntax tree for jsonish documents.
//! jsonish 文档的语法树。
//!
//! Nodes live in an arena ([`Tree`]) and refer to each other by [`NodeId`].
//! Containers own their children through their entry/item lists; every node
//! keeps a non-owning link to the container that holds it.
//! 节点存放在 arena（[`Tree`]）中，通过 [`NodeId`] 相互引用。
//! 容器通过条目/元素列表拥有子节点；每个节点保存一个指向所属容器的非拥有链接。

mod comment;
mod edit;
mod error;
mod node;
mod query;
mod tree;
mod value;

pub use comment::{Comment, CommentKind};
pub use edit::{ArrayMut, ObjectMut};
pub use error::TreeError;
pub use node::{Array, Node, NodeId, NodeKind, NodeType, Object, Property};
pub use query::{Ancestors, PathSegment, format_path};
pub use tree::Tree;
