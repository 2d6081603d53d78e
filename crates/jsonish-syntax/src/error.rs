//! Errors raised by tree mutation.

use crate::NodeId;

/// Misuse of the tree mutation API.
/// 树修改 API 的误用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0:?} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("node {0:?} is not an object")]
    NotAnObject(NodeId),

    #[error("node {0:?} is not an array")]
    NotAnArray(NodeId),

    #[error("node {0:?} is already attached to a container")]
    AlreadyAttached(NodeId),

    #[error("attaching node {0:?} would make it its own ancestor")]
    WouldCycle(NodeId),

    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
