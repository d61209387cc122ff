use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::string::String;

use crate::ost_map::{IntoIter, IntoKeys, IntoValues, Iter, Keys, Values};
use crate::raw::RawOSTreeMap;

mod lca;
mod order_statistic;

pub use crate::Rank;

/// A self-adjusting ordered map: [`OSTreeMap`](crate::OSTreeMap) semantics
/// plus splaying.
///
/// Every insert and every successful lookup rotates the touched node to the
/// root (zig / zig-zig / zig-zag), so over a sequence of accesses the tree
/// reshapes itself around the working set and each access costs amortized
/// O(log n). A single access can still be O(n) on a degenerate shape - the
/// guarantee is for sequences, not calls. Deletions and lookups that miss
/// do not splay; that asymmetry is deliberate and keeps misses read-only.
///
/// Because splaying restructures the tree, the splaying accessors
/// ([`get`](SplayTreeMap::get), [`get_mut`](SplayTreeMap::get_mut),
/// [`contains_key`](SplayTreeMap::contains_key)) take `&mut self`. All
/// order queries - rank, select, predecessor/successor, min/max, iteration,
/// lowest common ancestor - are shared-borrow reads that never splay.
///
/// # Examples
///
/// ```
/// use ost_tree::SplayTreeMap;
///
/// let mut sessions = SplayTreeMap::new();
/// sessions.insert("alice", 3);
/// sessions.insert("bob", 1);
/// sessions.insert("carol", 7);
///
/// // A hit pulls the entry to the root.
/// assert_eq!(sessions.get(&"bob"), Some(&1));
/// assert_eq!(sessions.root_key_value(), Some((&"bob", &1)));
///
/// // Order statistics are unaffected by the reshaping.
/// assert_eq!(sessions.rank_of(&"carol"), Some(2));
/// ```
#[derive(Clone)]
pub struct SplayTreeMap<K, V> {
    raw: RawOSTreeMap<K, V>,
}

impl<K, V> SplayTreeMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawOSTreeMap::new(),
        }
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry currently at the root: the most recently inserted
    /// or successfully looked-up key, until a deletion disturbs it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::SplayTreeMap;
    ///
    /// let mut map = SplayTreeMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.root_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn root_key_value(&self) -> Option<(&K, &V)> {
        self.raw.root().map(|root| self.raw.entry(root))
    }

    /// Returns the entry with the smallest key. Does not splay.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the entry with the greatest key. Does not splay.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// Iteration never splays; the iterator types are shared with
    /// [`OSTreeMap`](crate::OSTreeMap).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, ordered by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Consumes the map into an iterator over its keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Consumes the map into an iterator over its values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<K: Ord, V> SplayTreeMap<K, V> {
    /// Inserts a key-value pair and splays the touched node to the root.
    ///
    /// Returns `None` if the key was new, or the replaced value if the key
    /// was already present (the node still gets splayed - it was accessed).
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::SplayTreeMap;
    ///
    /// let mut map = SplayTreeMap::new();
    /// assert_eq!(map.insert(7, "a"), None);
    /// assert_eq!(map.insert(7, "b"), Some("a"));
    /// assert_eq!(map.root_key_value(), Some((&7, &"b")));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (old, handle) = self.raw.insert_entry(key, value);
        self.raw.splay(handle);
        old
    }

    /// Returns a reference to the value corresponding to the key, splaying
    /// the entry to the root on a hit. Misses leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::SplayTreeMap;
    ///
    /// let mut map = SplayTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// assert_eq!(map.get(&9), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        self.raw.splay(handle);
        Some(self.raw.entry(handle).1)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// splaying the entry to the root on a hit.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        self.raw.splay(handle);
        Some(self.raw.entry_mut(handle).1)
    }

    /// Returns the key-value pair corresponding to the key, splaying the
    /// entry to the root on a hit.
    #[must_use]
    pub fn get_key_value<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.search(key)?;
        self.raw.splay(handle);
        Some(self.raw.entry(handle))
    }

    /// Returns true if the map contains the specified key. A hit counts as
    /// a successful lookup and splays.
    #[must_use]
    pub fn contains_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present.
    /// Deletions never splay.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if it
    /// was present. Deletions never splay.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the greatest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Returns the entry with the greatest key strictly less than `key`,
    /// which must itself be present. Does not splay.
    #[must_use]
    pub fn predecessor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.predecessor(key)
    }

    /// Returns the entry with the smallest key strictly greater than `key`,
    /// which must itself be present. Does not splay.
    #[must_use]
    pub fn successor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.successor(key)
    }
}

impl<K: fmt::Debug, V> SplayTreeMap<K, V> {
    /// Renders the tree level by level, with each node's child keys and
    /// subtree size. A debugging affordance: the output format is not part
    /// of the crate's stable interface.
    #[must_use]
    pub fn dump_tree(&self) -> String {
        self.raw.fmt_levels()
    }
}

impl<K, V> SplayTreeMap<K, V> {
    /// Raw-tree access for the sibling impl-block files.
    pub(crate) fn raw(&self) -> &RawOSTreeMap<K, V> {
        &self.raw
    }

    pub(crate) fn raw_mut(&mut self) -> &mut RawOSTreeMap<K, V> {
        &mut self.raw
    }
}

// ─── Trait implementations ──────────────────────────────────────────────────

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SplayTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for SplayTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for SplayTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for SplayTreeMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for SplayTreeMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for SplayTreeMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: Hash, V: Hash> Hash for SplayTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self.iter() {
            entry.hash(state);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for SplayTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for SplayTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SplayTreeMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

impl<'a, K, V> IntoIterator for &'a SplayTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for SplayTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut raw = self.raw;
        IntoIter::from_entries(raw.drain_in_order())
    }
}
