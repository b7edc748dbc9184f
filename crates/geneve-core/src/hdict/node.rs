//! Tree nodes of the hierarchical store.

use indexmap::IndexMap;

/// Children of a branch, keyed by path segment in insertion order.
pub type Children<V> = IndexMap<String, Node<V>>;

/// A node is either a resolved field value or a branch of named children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node<V> {
    Leaf(V),
    Branch(Children<V>),
}

impl<V> Node<V> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    pub fn children(&self) -> Option<&Children<V>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(children) => Some(children),
        }
    }

    pub fn into_leaf(self) -> Option<V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }
}
