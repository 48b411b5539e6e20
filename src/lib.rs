//! An ordered map based on an unbalanced binary search tree whose nodes carry parent links.
//!
//! The map keeps a traversal cursor of its own (see [`TreeMap`](map/struct.TreeMap.html)),
//! and can be ordered by any [`compare::Compare`] implementation, including one built from a
//! plain `lower_than(a, b)` predicate with [`lower_than`](fn.lower_than.html).

#![deny(missing_docs)]

pub use compare;

pub use self::lower_than::{LowerThan, lower_than};
pub use self::map::TreeMap;

pub mod map;

mod lower_than;
mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
