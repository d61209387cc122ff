use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OSTreeMap;
use crate::Rank;

impl<K, V> OSTreeMap<K, V> {
    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// The rank is zero-based. Returns `None` if `rank >= len()`.
    ///
    /// # Complexity
    ///
    /// O(height): the descent consults subtree sizes, never a full walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([("a", 10), ("c", 30), ("b", 20)]);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert_eq!(map.get_by_rank(3), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw().get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position
    /// `rank` in sorted order.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// violate the map's ordering invariants.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OSTreeMap;
    ///
    /// let mut map = OSTreeMap::from([(10, "a"), (5, "b")]);
    ///
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw_mut().get_by_rank_mut(rank)
    }
}

impl<K: Ord, V> OSTreeMap<K, V> {
    /// Returns the zero-based rank of `key` in sorted order, or `None` if
    /// the key is not present.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OSTreeMap;
    ///
    /// let map = OSTreeMap::from([(10, "a"), (20, "b")]);
    ///
    /// assert_eq!(map.rank_of(&10), Some(0));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw().rank_of(key)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ost_tree::{OSTreeMap, Rank};
///
/// let map = OSTreeMap::from([("a", 1), ("b", 2)]);
///
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for OSTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, value)| value).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ost_tree::{OSTreeMap, Rank};
///
/// let mut map = OSTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for OSTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, value)| value).expect("index out of bounds")
    }
}
