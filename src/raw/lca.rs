//! Lowest-common-ancestor query over the tree structure.
//!
//! Lives on the raw core so both public map variants expose it through the
//! same implementation - the query only reads links and keys and never
//! restructures, so it behaves identically on a plain and a splayed tree.

use core::borrow::Borrow;

use super::raw_ost_map::RawOSTreeMap;

impl<K: Ord, V> RawOSTreeMap<K, V> {
    /// Returns the entry at the deepest node that is an ancestor of both
    /// `key1` and `key2` (a node counts as its own ancestor).
    ///
    /// Descends while both keys are on the same side of the current node;
    /// the first node they straddle (or equal) is the split point. That
    /// candidate only stands if both keys actually exist, which is checked
    /// by full searches from the candidate downward - a descent ending in a
    /// missing child already proves one key absent and answers `None`.
    pub(crate) fn lowest_common_ancestor<Q>(&self, key1: &Q, key2: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        let split = loop {
            let node = self.nodes.get(current);
            let key = node.key().borrow();
            if key < key1 && key < key2 {
                current = node.right()?;
            } else if key > key1 && key > key2 {
                current = node.left()?;
            } else {
                break current;
            }
        };

        self.search_from(Some(split), key1)?;
        self.search_from(Some(split), key2)?;
        Some(self.entry(split))
    }
}
