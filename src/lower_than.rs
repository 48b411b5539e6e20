//! Comparators built from a strict-precedence predicate.

use compare::Compare;
use std::cmp::Ordering::{self, Equal, Greater, Less};

/// A comparator that orders keys using a `lower_than(a, b)` predicate, which must return
/// `true` exactly when `a` strictly precedes `b`.
///
/// Two keys are equivalent when neither precedes the other.
///
/// See [`lower_than`](fn.lower_than.html) for an example.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowerThan<F>(F);

/// Creates a comparator from a strict-precedence predicate.
///
/// The predicate must be irreflexive and transitive, and must not change its answers while
/// keys ordered by it are stored in a map.
///
/// # Examples
///
/// ```
/// use parent_tree::{TreeMap, lower_than};
///
/// let mut map = TreeMap::with_cmp(lower_than(|a: &String, b: &String| a.len() < b.len()));
///
/// map.insert("ccc".to_string(), 3);
/// map.insert("a".to_string(), 1);
/// map.insert("bb".to_string(), 2);
///
/// // Equal lengths are equivalent keys, so the first writer wins.
/// assert!(!map.insert("zz".to_string(), 4));
/// assert_eq!(map.get(&"xx".to_string()), Some(&2));
///
/// assert_eq!(map.iter().map(|e| *e.1).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn lower_than<F>(f: F) -> LowerThan<F> { LowerThan(f) }

impl<K: ?Sized, F> Compare<K> for LowerThan<F> where F: Fn(&K, &K) -> bool {
    fn compare(&self, l: &K, r: &K) -> Ordering {
        if (self.0)(l, r) {
            Less
        } else if (self.0)(r, l) {
            Greater
        } else {
            Equal
        }
    }

    fn compares_lt(&self, l: &K, r: &K) -> bool { (self.0)(l, r) }

    fn compares_gt(&self, l: &K, r: &K) -> bool { (self.0)(r, l) }

    fn compares_eq(&self, l: &K, r: &K) -> bool { !(self.0)(l, r) && !(self.0)(r, l) }
}

#[cfg(test)]
mod test {
    use compare::Compare;
    use quickcheck_macros::quickcheck;
    use std::cmp::Ordering::{Equal, Greater, Less};
    use super::lower_than;

    #[test]
    fn derives_equivalence() {
        let cmp = lower_than(|a: &i32, b: &i32| a / 10 < b / 10);
        assert_eq!(cmp.compare(&11, &19), Equal);
        assert_eq!(cmp.compare(&9, &10), Less);
        assert_eq!(cmp.compare(&20, &19), Greater);
        assert!(cmp.compares_eq(&21, &29));
        assert!(!cmp.compares_lt(&21, &29));
    }

    #[quickcheck]
    fn agrees_with_ord(a: i64, b: i64) -> bool {
        lower_than(|a: &i64, b: &i64| a < b).compare(&a, &b) == a.cmp(&b)
    }
}
