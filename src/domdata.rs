use indextree::{Arena, NodeId};

use crate::xmlvalue::Value;

/// What is stored in each arena slot.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) value: Value,
    /// The owning document. `None` for document nodes themselves.
    pub(crate) document: Option<Node>,
}

pub(crate) type DomArena = Arena<Entry>;

/// A node in the tree.
///
/// This is a lightweight handle into a [`Dom`] and can be copied. Its
/// identity stays the same while the node is moved around; cloning a node
/// with [`Dom::clone_node`] produces a new identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Dom` struct manages all document tree data in your program. It lets
/// you create, access and manipulate one or more documents.
///
/// `Dom` is implemented in several sections focusing on different aspects
/// of accessing and manipulating the tree: creation, read access, value
/// access, manipulation, parsing, serialization, selection and the JSON
/// codec.
///
/// A `Dom` is not synchronized. Mutation and reads of the same document have
/// to be serialized by the caller.
pub struct Dom {
    pub(crate) arena: DomArena,
}

impl Dom {
    /// Create a new `Dom` instance.
    pub fn new() -> Self {
        Dom {
            arena: DomArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &DomArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    #[inline]
    pub(crate) fn entry(&self, node: Node) -> &Entry {
        self.arena[node.get()].get()
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}
