mod arena;
mod handle;
mod iter;


use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::collections::TryReserveError;
use std::mem::replace;
use self::arena::Arena;

pub use self::handle::Handle;
pub use self::iter::{IntoIter, Iter};

/// A possibly empty reference to a node. Links never own the node they point to.
pub type Link = Option<Handle>;

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link,
    right: Link,
    parent: Link,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Link) -> Self {
        Node { left: None, right: None, parent: parent, key: key, value: value }
    }
}

/// The node graph of an unbalanced binary search tree.
///
/// Every node lives in the arena; `left`, `right` and `parent` are navigation links only.
/// For every node, the keys in its left subtree precede its key and the keys in its right
/// subtree follow it.
#[derive(Clone)]
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Link,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self { Tree { nodes: Arena::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn key_value(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (&node.key, &node.value)
    }

    pub fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get_mut(handle);
        (&node.key, &mut node.value)
    }

    /// Inserts a new leaf for `key` unless an equivalent key is already present.
    ///
    /// Returns the handle of the new node and `true`, or the handle of the existing node and
    /// `false`, in which case `key` and `value` are dropped.
    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V)
        -> Result<(Handle, bool), TryReserveError> where C: Compare<K> {

        let mut parent = None;
        let mut link = self.root;
        let mut left = false;

        while let Some(handle) = link {
            let node = self.nodes.get(handle);
            parent = link;

            link = match cmp.compare(&key, &node.key) {
                Equal => {
                    trace!("insert: equivalent key present, keeping the first value");
                    return Ok((handle, false));
                }
                Less => { left = true; node.left }
                Greater => { left = false; node.right }
            };
        }

        let handle = self.nodes.try_alloc(Node::new(key, value, parent))?;

        match parent {
            None => self.root = Some(handle),
            Some(parent) if left => self.nodes.get_mut(parent).left = Some(handle),
            Some(parent) => self.nodes.get_mut(parent).right = Some(handle),
        }

        trace!("insert: new leaf {:?} under {:?}", handle, parent);
        Ok((handle, true))
    }

    /// Returns the node whose key is equivalent to `key`.
    pub fn get<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, K> {
        let mut link = self.root;

        while let Some(handle) = link {
            let node = self.nodes.get(handle);

            link = match cmp.compare(key, &node.key) {
                Equal => return link,
                Less => node.left,
                Greater => node.right,
            };
        }

        None
    }

    /// Returns the node with the smallest key that does not precede `key`.
    ///
    /// An equivalent key wins outright; otherwise the last node passed on the way left is
    /// the closest one seen so far.
    pub fn ceiling<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, K> {
        let mut link = self.root;
        let mut candidate = None;

        while let Some(handle) = link {
            let node = self.nodes.get(handle);

            link = match cmp.compare(key, &node.key) {
                Equal => return link,
                Less => { candidate = link; node.left }
                Greater => node.right,
            };
        }

        candidate
    }

    pub fn first(&self) -> Link { self.root.map(|root| self.min(root)) }

    pub fn last(&self) -> Link { self.root.map(|root| self.max(root)) }

    /// Returns the leftmost node of the subtree rooted at `handle`.
    fn min(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left { handle = left; }
        handle
    }

    fn max(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right { handle = right; }
        handle
    }

    /// Returns the in-order successor of `handle`.
    pub fn successor(&self, handle: Handle) -> Link {
        let node = self.nodes.get(handle);
        if let Some(right) = node.right { return Some(self.min(right)); }

        // Climb past every ancestor reached from its right side; those precede `handle`.
        let mut child = handle;
        let mut link = node.parent;

        while let Some(parent) = link {
            let parent_node = self.nodes.get(parent);
            if parent_node.left == Some(child) { return link; }
            child = parent;
            link = parent_node.parent;
        }

        None
    }

    pub fn predecessor(&self, handle: Handle) -> Link {
        let node = self.nodes.get(handle);
        if let Some(left) = node.left { return Some(self.max(left)); }

        let mut child = handle;
        let mut link = node.parent;

        while let Some(parent) = link {
            let parent_node = self.nodes.get(parent);
            if parent_node.right == Some(child) { return link; }
            child = parent;
            link = parent_node.parent;
        }

        None
    }

    /// Removes the entry held by `handle` and returns it.
    ///
    /// A node with two children is never freed itself: it takes over the entry of its
    /// in-order successor, and the successor's node (which has no left child) is unlinked
    /// instead.
    pub fn remove(&mut self, handle: Handle) -> (K, V) {
        let (left, right) = {
            let node = self.nodes.get(handle);
            (node.left, node.right)
        };

        match (left, right) {
            (None, None) => {
                trace!("remove: {:?} is a leaf", handle);
                let node = self.unlink(handle);
                (node.key, node.value)
            }
            (Some(_), None) | (None, Some(_)) => {
                trace!("remove: promoting the only child of {:?}", handle);
                let node = self.unlink(handle);
                (node.key, node.value)
            }
            (Some(_), Some(right)) => {
                let successor = self.min(right);
                trace!("remove: {:?} has two children, taking the entry of {:?}",
                       handle, successor);

                let Node { key, value, .. } = self.unlink(successor);
                let node = self.nodes.get_mut(handle);
                (replace(&mut node.key, key), replace(&mut node.value, value))
            }
        }
    }

    /// Frees a node with at most one child, moving that child into its place.
    fn unlink(&mut self, handle: Handle) -> Node<K, V> {
        let node = self.nodes.take(handle);
        debug_assert!(node.left.is_none() || node.right.is_none());

        let child = node.left.or(node.right);
        if let Some(child) = child { self.nodes.get_mut(child).parent = node.parent; }

        match node.parent {
            None => self.root = child,
            Some(parent) => {
                let parent = self.nodes.get_mut(parent);
                if parent.left == Some(handle) { parent.left = child; } else { parent.right = child; }
            }
        }

        node
    }
}
