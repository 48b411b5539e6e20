use super::{Link, Tree};

/// In-order iteration that follows parent links instead of keeping a stack.
pub struct Iter<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    front: Link,
    back: Link,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a Tree<K, V>) -> Self {
        Iter { tree: tree, front: tree.first(), back: tree.last(), size: tree.len() }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, size: self.size }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.front?;
        self.size -= 1;

        if self.size == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.tree.successor(handle);
        }

        Some(self.tree.key_value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.back?;
        self.size -= 1;

        if self.size == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.tree.predecessor(handle);
        }

        Some(self.tree.key_value(handle))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Draining iteration: repeatedly removes the minimum or maximum node.
#[derive(Clone)]
pub struct IntoIter<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(tree: Tree<K, V>) -> Self { IntoIter { tree: tree } }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.tree.first().map(|handle| self.tree.remove(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.tree.len(), Some(self.tree.len())) }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.tree.last().map(|handle| self.tree.remove(handle))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
