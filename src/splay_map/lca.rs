use core::borrow::Borrow;

use super::SplayTreeMap;

impl<K: Ord, V> SplayTreeMap<K, V> {
    /// Returns the entry at the lowest common ancestor of `key1` and
    /// `key2`, or `None` if either key is absent.
    ///
    /// Read-only: the query neither splays nor otherwise restructures, so
    /// the answer reflects the shape left behind by earlier accesses.
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
    /// let map = SplayTreeMap::from([(4, "d"), (2, "b"), (6, "f")]);
    ///
    /// // The last insert splayed 6 to the root, so it is everyone's ancestor.
    /// assert_eq!(map.lowest_common_ancestor(&2, &4), Some((&4, &"d")));
    /// assert_eq!(map.lowest_common_ancestor(&2, &6), Some((&6, &"f")));
    /// assert_eq!(map.lowest_common_ancestor(&2, &5), None);
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
