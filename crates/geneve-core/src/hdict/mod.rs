//! Hierarchical dictionary addressed by dotted field paths.
//!
//! Resolved fields of one record are stored here as a tree: `a.b.c` lives
//! at leaf `c` of branch `b` of branch `a`. The store also maintains the
//! list of groups used to emit nested record fragments, deepest first.
//!
//! # Example
//!
//! ```
//! use geneve_core::{FieldPath, HDict};
//!
//! let mut fields = HDict::new();
//! for (path, value) in [("a.b.x", 1), ("a.b.y", 2), ("a.c.z", 3), ("d", 4)] {
//!     fields.set(&path.parse().unwrap(), value).unwrap();
//! }
//!
//! let groups: Vec<String> = fields.groups().map(|g| g.path.to_string()).collect();
//! assert_eq!(groups, vec!["a.b", "a.c", "a", ""]);
//!
//! let path: FieldPath = "a.b.y".parse().unwrap();
//! assert_eq!(fields.get(&path), Ok(&2));
//! ```

mod iter;
mod node;


use std::collections::BTreeMap;

use indexmap::IndexMap;

pub use iter::{Group, Groups, Items, Keys};
pub use node::{Children, Node};

use crate::error::{GeneveError, Result};
use crate::path::FieldPath;

/// Multi-level dictionary with dotted path keys.
#[derive(Debug, Clone, PartialEq)]
pub struct HDict<V> {
    root: Children<V>,
    groups: Vec<FieldPath>,
}

impl<V> Default for HDict<V> {
    fn default() -> Self {
        Self {
            root: IndexMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<V> HDict<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node at `path`, leaf or branch.
    pub fn node(&self, path: &FieldPath) -> Option<&Node<V>> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.root.get(first)?;
        for segment in rest {
            node = node.children()?.get(segment)?;
        }
        Some(node)
    }

    /// Value of the leaf at `path`.
    ///
    /// # Errors
    ///
    /// [`GeneveError::NotFound`] if any segment is missing,
    /// [`GeneveError::NotALeaf`] if the path names a branch.
    pub fn get(&self, path: &FieldPath) -> Result<&V> {
        match self.node(path) {
            Some(Node::Leaf(value)) => Ok(value),
            Some(Node::Branch(_)) => Err(GeneveError::NotALeaf {
                path: path.to_string(),
            }),
            None => Err(GeneveError::NotFound {
                path: path.to_string(),
            }),
        }
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.node(path).is_some_and(Node::is_leaf)
    }

    /// Stores `value` at `path`, creating intermediate branches.
    ///
    /// Returns the previous value if `path` already was a leaf. A branch at
    /// `path` is replaced by the leaf.
    ///
    /// # Errors
    ///
    /// [`GeneveError::LeafInPath`] if a proper prefix of `path` is a leaf.
    /// The store is left untouched.
    pub fn set(&mut self, path: &FieldPath, value: V) -> Result<Option<V>> {
        let (last, init) = path
            .segments()
            .split_last()
            .ok_or_else(|| GeneveError::InvalidPath(String::new()))?;

        // Branches are only created past the last existing node, so a leaf
        // can only be met before anything has been inserted.
        let mut children = &mut self.root;
        for (i, segment) in init.iter().enumerate() {
            let node = children
                .entry(segment.clone())
                .or_insert_with(|| Node::Branch(IndexMap::new()));
            children = match node {
                Node::Branch(next) => next,
                Node::Leaf(_) => {
                    return Err(GeneveError::LeafInPath {
                        path: path.to_string(),
                        leaf: init[..=i].join("."),
                    })
                }
            };
        }

        let previous = children
            .insert(last.clone(), Node::Leaf(value))
            .and_then(Node::into_leaf);
        self.update_groups();
        Ok(previous)
    }

    /// Removes the node at `path`.
    ///
    /// Does nothing and returns `None` if the path does not exist.
    pub fn remove(&mut self, path: &FieldPath) -> Option<Node<V>> {
        let (last, init) = path.segments().split_last()?;
        let mut children = &mut self.root;
        for segment in init {
            children = match children.get_mut(segment)? {
                Node::Branch(next) => next,
                Node::Leaf(_) => return None,
            };
        }
        let removed = children.shift_remove(last)?;
        self.update_groups();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.root.clear();
        self.groups.clear();
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// Leaf paths, depth-first in insertion order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(&self.root)
    }

    /// Leaf paths with their values, depth-first in insertion order.
    pub fn items(&self) -> Items<'_, V> {
        Items::new(&self.root)
    }

    /// Direct leaf children of every group, deepest group first and the
    /// root group last.
    pub fn groups(&self) -> Groups<'_, V> {
        Groups::new(self, &self.groups)
    }

    /// Top-level children.
    pub fn children(&self) -> &Children<V> {
        &self.root
    }

    fn update_groups(&mut self) {
        let mut prefixes = BTreeMap::new();
        let mut any_leaf = false;
        for path in self.keys() {
            any_leaf = true;
            for prefix in path.proper_prefixes() {
                prefixes.entry(prefix.to_string()).or_insert(prefix);
            }
        }

        // Lexicographic from the map, then stable by descending depth.
        let mut groups: Vec<FieldPath> = prefixes.into_values().collect();
        groups.sort_by(|a, b| b.depth().cmp(&a.depth()));
        if any_leaf {
            groups.push(FieldPath::root());
        }
        self.groups = groups;
    }
}

impl<'a, V> IntoIterator for &'a HDict<V> {
    type Item = (FieldPath, &'a V);
    type IntoIter = Items<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
