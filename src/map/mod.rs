//! An ordered map based on an unbalanced binary search tree.

#[cfg(feature = "quickcheck")]
mod quickcheck;

use compare::{Compare, Natural};
use crate::node::{self, Link};
use std::collections::TryReserveError;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::ops;

/// An ordered map based on an unbalanced binary search tree.
///
/// Besides the usual lookups and iterators, the map carries a single traversal cursor: the
/// node most recently touched by [`insert`](#method.insert), [`search`](#method.search),
/// [`upper_bound`](#method.upper_bound), [`first_entry`](#method.first_entry) or
/// [`next_entry`](#method.next_entry). `next_entry` advances it in key order. Any of those
/// operations, as well as a successful [`remove`](#method.remove), repositions the cursor,
/// so a traversal must not be interleaved with them. [`iter`](#method.iter) never touches
/// the cursor.
///
/// No rebalancing is performed: inserting keys in sorted order produces a tree of linear
/// depth.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct TreeMap<K, V, C = Natural<K>> where C: Compare<K> {
    tree: node::Tree<K, V>,
    current: Link,
    cmp: C,
}

impl<K, V> TreeMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { TreeMap::with_cmp(compare::natural()) }
}

impl<K, V, C> TreeMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::compare::{Compare, natural};
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        TreeMap { tree: node::Tree::new(), current: None, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::compare::{Compare, natural};
    /// use parent_tree::TreeMap;
    ///
    /// let map: TreeMap<i32, &str> = TreeMap::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: TreeMap<i32, &str, _> = TreeMap::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map and resets the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.next_entry(), None);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.current = None;
    }

    /// Inserts an entry into the map unless it already contains an equivalent key, returning
    /// `true` if the entry was inserted.
    ///
    /// An existing entry is never overwritten: when the key is already present, the given key
    /// and value are dropped. Either way the cursor is left on the entry for the key.
    ///
    /// # Panics
    ///
    /// Panics if the node storage cannot grow. See [`try_insert`](#method.try_insert).
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.insert(1, "a"));
    /// assert!(!map.insert(1, "b"));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.try_insert(key, value) {
            Ok(inserted) => inserted,
            Err(e) => panic!("`TreeMap::insert()` - {}", e),
        }
    }

    /// Inserts an entry into the map like [`insert`](#method.insert), but returns an error
    /// instead of panicking if the node storage cannot grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.try_insert(1, "a"), Ok(true));
    /// assert_eq!(map.try_insert(1, "b"), Ok(false));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool, TryReserveError> {
        let (handle, inserted) = self.tree.insert(&self.cmp, key, value)?;
        self.current = Some(handle);
        Ok(inserted)
    }

    /// Returns the entry whose key is equivalent to the given key, or `None` if the map does
    /// not contain the key.
    ///
    /// A hit moves the cursor onto the entry; a miss leaves the cursor where it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.search(&2), Some((&2, &"b")));
    /// assert_eq!(map.search(&4), None);
    /// assert_eq!(map.next_entry(), Some((&3, &"c")));
    /// ```
    pub fn search(&mut self, key: &K) -> Option<(&K, &V)> {
        let link = self.tree.get(&self.cmp, key);
        self.seek(link)
    }

    /// Returns the entry with the smallest key that is greater than or equal to the given
    /// key, or `None` if every key in the map is smaller.
    ///
    /// The given key need not itself be present in the map. A hit moves the cursor onto the
    /// entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map: TreeMap<_, _> = vec![(1, "a"), (3, "c"), (4, "d"), (7, "g"), (9, "i")]
    ///     .into_iter().collect();
    ///
    /// assert_eq!(map.upper_bound(&0), Some((&1, &"a")));
    /// assert_eq!(map.upper_bound(&5), Some((&7, &"g")));
    /// assert_eq!(map.upper_bound(&9), Some((&9, &"i")));
    /// assert_eq!(map.upper_bound(&10), None);
    ///
    /// map.upper_bound(&2);
    /// assert_eq!(map.next_entry(), Some((&4, &"d")));
    /// ```
    pub fn upper_bound(&mut self, key: &K) -> Option<(&K, &V)> {
        let link = self.tree.ceiling(&self.cmp, key);
        self.seek(link)
    }

    /// Moves the cursor to the map's first entry and returns it, or returns `None` if the map
    /// is empty.
    ///
    /// This starts an in-order traversal that continues with
    /// [`next_entry`](#method.next_entry).
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.first_entry(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.first_entry(), Some((&1, &"a")));
    /// assert_eq!(map.next_entry(), Some((&2, &"b")));
    /// assert_eq!(map.next_entry(), None);
    /// ```
    pub fn first_entry(&mut self) -> Option<(&K, &V)> {
        self.current = self.tree.first();
        let tree = &self.tree;
        self.current.map(move |handle| tree.key_value(handle))
    }

    /// Advances the cursor to the entry following it in key order and returns that entry.
    ///
    /// Returns `None` and unsets the cursor if the cursor is unset or already on the map's
    /// last entry. An unset cursor stays unset until it is repositioned, e.g. by
    /// [`first_entry`](#method.first_entry).
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// map.first_entry();
    /// assert_eq!(map.next_entry(), Some((&2, &"b")));
    /// assert_eq!(map.next_entry(), Some((&3, &"c")));
    /// assert_eq!(map.next_entry(), None);
    /// assert_eq!(map.next_entry(), None);
    /// ```
    pub fn next_entry(&mut self) -> Option<(&K, &V)> {
        let tree = &self.tree;
        self.current = self.current.and_then(|handle| tree.successor(handle));
        self.current.map(move |handle| tree.key_value(handle))
    }

    /// Removes and returns the entry whose key is equivalent to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// A successful removal unsets the cursor; a miss leaves it where it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&2), Some((2, "b")));
    /// assert_eq!(map.remove(&2), None);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&2), None);
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&3, &"c")]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let handle = self.tree.get(&self.cmp, key)?;
        self.current = None;
        Some(self.tree.remove(handle))
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.get(&self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key. The cursor is not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.get(&self.cmp, key).map(|handle| self.tree.key_value(handle).1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key. The cursor is not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let handle = self.tree.get(&self.cmp, key)?;
        Some(self.tree.key_value_mut(handle).1)
    }

    /// Returns the entry with the map's minimum key, or `None` if the map is empty. The
    /// cursor is not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|handle| self.tree.key_value(handle))
    }

    /// Returns the entry with the map's maximum key, or `None` if the map is empty. The
    /// cursor is not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.max(), Some((&2, &"b")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|handle| self.tree.key_value(handle))
    }

    /// Returns an iterator over the map's entries in key order.
    ///
    /// The iterator is independent of the map's cursor, so any number of them may be in use
    /// at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> { Iter(node::Iter::new(&self.tree)) }

    fn seek(&mut self, link: Link) -> Option<(&K, &V)> {
        let handle = link?;
        self.current = link;
        Some(self.tree.key_value(handle))
    }
}

impl<K, V, C> Debug for TreeMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { TreeMap::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for TreeMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for TreeMap<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: TreeMap<K, V, C> = Default::default();
        map.extend(it);
        map
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for TreeMap<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &'a Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use parent_tree::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<K, V> { IntoIter(node::IntoIter::new(self.tree)) }
}

impl<K, V, C> PartialEq for TreeMap<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for TreeMap<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// use parent_tree::TreeMap;
///
/// let mut map = TreeMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries in key order.
///
/// # Examples
///
/// Acquire through [`TreeMap::iter`](struct.TreeMap.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// use parent_tree::TreeMap;
///
/// let mut map = TreeMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
