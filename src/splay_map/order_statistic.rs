use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::SplayTreeMap;
use crate::Rank;

impl<K, V> SplayTreeMap<K, V> {
    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// The rank is zero-based; `None` if `rank >= len()`. Order queries
    /// never splay, so this reads through `&self`.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::SplayTreeMap;
    ///
    /// let map = SplayTreeMap::from([("a", 10), ("c", 30), ("b", 20)]);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert_eq!(map.get_by_rank(3), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw().get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position
    /// `rank` in sorted order. Does not splay - rank access is positional,
    /// not a key lookup.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw_mut().get_by_rank_mut(rank)
    }
}

impl<K: Ord, V> SplayTreeMap<K, V> {
    /// Returns the zero-based rank of `key` in sorted order, or `None` if
    /// the key is not present. Does not splay.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::SplayTreeMap;
    ///
    /// let map = SplayTreeMap::from([(10, "a"), (20, "b")]);
    ///
    /// assert_eq!(map.rank_of(&20), Some(1));
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
impl<K, V> Index<Rank> for SplayTreeMap<K, V> {
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
impl<K, V> IndexMut<Rank> for SplayTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, value)| value).expect("index out of bounds")
    }
}
