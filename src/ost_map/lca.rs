use core::borrow::Borrow;

use super::OSTreeMap;

impl<K: Ord, V> OSTreeMap<K, V> {
    /// Returns the entry at the lowest common ancestor of `key1` and `key2`:
    /// the deepest node whose subtree contains both keys (a node counts as
    /// its own ancestor).
    ///
    /// Returns `None` if either key is absent, even when the two keys
    /// straddle an existing node.
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
    /// let mut map = OSTreeMap::new();
    /// for (key, value) in [(1, 'A'), (0, 'B'), (2, 'C'), (3, 'D'), (-1, 'E')] {
    ///     map.insert(key, value);
    /// }
    ///
    /// assert_eq!(map.lowest_common_ancestor(&-1, &3), Some((&1, &'A')));
    /// assert_eq!(map.lowest_common_ancestor(&2, &3), Some((&2, &'C')));
    /// assert_eq!(map.lowest_common_ancestor(&0, &99), None);
    /// ```
    #[must_use]
    pub fn lowest_common_ancestor<Q>(&self, key1: &Q, key2: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw().lowest_common_ancestor(key1, key2)
    }
}
