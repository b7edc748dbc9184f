//! Lazy traversals over an [`HDict`](super::HDict).
//!
//! All iterators walk the tree with an explicit stack, so depth is bounded
//! by memory rather than by the call stack. Each call on the store starts a
//! fresh walk over its current state.

use indexmap::IndexMap;

use super::node::{Children, Node};
use super::HDict;
use crate::path::FieldPath;

/// Pre-order depth-first walk over leaves, siblings in insertion order.
pub struct Items<'a, V> {
    stack: Vec<(FieldPath, indexmap::map::Iter<'a, String, Node<V>>)>,
}

impl<'a, V> Items<'a, V> {
    pub(super) fn new(root: &'a Children<V>) -> Self {
        Self {
            stack: vec![(FieldPath::root(), root.iter())],
        }
    }
}

impl<'a, V> Iterator for Items<'a, V> {
    type Item = (FieldPath, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, siblings) = self.stack.last_mut()?;
            match siblings.next() {
                None => {
                    self.stack.pop();
                }
                Some((segment, Node::Leaf(value))) => {
                    return Some((prefix.child(segment), value));
                }
                Some((segment, Node::Branch(children))) => {
                    let path = prefix.child(segment);
                    self.stack.push((path, children.iter()));
                }
            }
        }
    }
}

/// Leaf paths in the same order as [`Items`].
pub struct Keys<'a, V> {
    inner: Items<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(super) fn new(root: &'a Children<V>) -> Self {
        Self {
            inner: Items::new(root),
        }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = FieldPath;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(path, _)| path)
    }
}

/// Leaf fields directly under one group path.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, V> {
    /// Group path, [`FieldPath::root`] for the top level.
    pub path: &'a FieldPath,
    /// Dotted child path to value. Bare segments for the root group.
    pub fields: IndexMap<String, &'a V>,
}

/// Groups of an [`HDict`], deepest first, root last.
pub struct Groups<'a, V> {
    dict: &'a HDict<V>,
    paths: std::slice::Iter<'a, FieldPath>,
}

impl<'a, V> Groups<'a, V> {
    pub(super) fn new(dict: &'a HDict<V>, paths: &'a [FieldPath]) -> Self {
        Self {
            dict,
            paths: paths.iter(),
        }
    }
}

impl<'a, V> Iterator for Groups<'a, V> {
    type Item = Group<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let children = if path.is_root() {
            Some(&self.dict.root)
        } else {
            self.dict.node(path).and_then(Node::children)
        };

        let fields = children
            .into_iter()
            .flatten()
            .filter_map(|(segment, node)| {
                let value = node.as_leaf()?;
                let key = if path.is_root() {
                    segment.clone()
                } else {
                    format!("{}.{}", path, segment)
                };
                Some((key, value))
            })
            .collect();

        Some(Group { path, fields })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}
