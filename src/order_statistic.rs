/// A zero-based rank into the sorted order of a map.
///
/// This is an order-statistic extension and is not part of the standard
/// `BTreeMap` API.
///
/// # Examples
///
/// ```
/// use ost_tree::{OSTreeMap, Rank};
///
/// let mut map = OSTreeMap::new();
/// map.insert("a", 10);
/// map.insert("b", 20);
///
/// assert_eq!(map[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
