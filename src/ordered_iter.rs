use ::ordered_iter::OrderedMapIterator;
use crate::map;

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

#[cfg(test)]
mod test {
    use ::ordered_iter::OrderedMapIterator;
    use crate::TreeMap;

    #[test]
    fn inner_join() {
        let a: TreeMap<_, _> = vec![(1, 'a'), (2, 'b'), (4, 'd')].into_iter().collect();
        let b: TreeMap<_, _> = vec![(2, "two"), (3, "three"), (4, "four")].into_iter().collect();

        let joined: Vec<_> = a.iter().inner_join_map(b.iter()).map(|(k, (x, y))| (*k, *x, *y))
                              .collect();
        assert_eq!(joined, [(2, 'b', "two"), (4, 'd', "four")]);
    }
}
