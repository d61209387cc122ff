use pretty_assertions::assert_eq;
use proptest::prelude::*;

use ost_tree::{OSTreeMap, SplayTreeMap};

/// Builds the worked example:
///
/// ```text
///      1
///     / \
///    0   2
///   /     \
/// -1       3
/// ```
fn example_map() -> OSTreeMap<i32, char> {
    let mut map = OSTreeMap::new();
    for (key, value) in [(1, 'A'), (0, 'B'), (2, 'C'), (3, 'D'), (-1, 'E')] {
        map.insert(key, value);
    }
    map
}

#[test]
fn worked_example() {
    let map = example_map();
    assert_eq!(map.lowest_common_ancestor(&0, &2), Some((&1, &'A')));
    assert_eq!(map.lowest_common_ancestor(&2, &3), Some((&2, &'C')));
    assert_eq!(map.lowest_common_ancestor(&-1, &0), Some((&0, &'B')));
    assert_eq!(map.lowest_common_ancestor(&-1, &3), Some((&1, &'A')));
    assert_eq!(map.lowest_common_ancestor(&0, &99), None);
}

#[test]
fn argument_order_does_not_matter() {
    let map = example_map();
    assert_eq!(map.lowest_common_ancestor(&3, &-1), Some((&1, &'A')));
    assert_eq!(map.lowest_common_ancestor(&99, &0), None);
}

#[test]
fn a_key_is_its_own_ancestor() {
    let map = example_map();
    assert_eq!(map.lowest_common_ancestor(&2, &2), Some((&2, &'C')));
    assert_eq!(map.lowest_common_ancestor(&2, &3), Some((&2, &'C')));
}

#[test]
fn empty_map_has_no_ancestors() {
    let map: OSTreeMap<i32, char> = OSTreeMap::new();
    assert_eq!(map.lowest_common_ancestor(&0, &1), None);
}

#[test]
fn splayed_root_is_the_ancestor_of_everything() {
    let mut map: SplayTreeMap<i32, i32> = (0..32).map(|k| (k, k)).collect();

    // Splaying 20 to the root makes it the LCA of any pair it belongs to.
    assert_eq!(map.get(&20), Some(&20));
    for other in 0..32 {
        assert_eq!(map.lowest_common_ancestor(&20, &other), Some((&20, &20)));
    }
}

proptest! {
    /// Structural sanity on arbitrary shapes: the LCA of two present keys
    /// always exists and lies between them in key order (inclusive); if
    /// either key is absent the answer is None. Checked on the plain map
    /// and on a splay map reshaped by random accesses.
    #[test]
    fn lca_lies_between_its_arguments(
        keys in proptest::collection::btree_set(0i32..400, 1..200),
        queries in proptest::collection::vec((0i32..400, 0i32..400), 1..100),
        accesses in proptest::collection::vec(0i32..400, 0..50),
    ) {
        let os_map: OSTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
        let mut sp_map: SplayTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
        for k in &accesses {
            let _ = sp_map.get(k);
        }

        for &(a, b) in &queries {
            let both_present = keys.contains(&a) && keys.contains(&b);
            for result in [os_map.lowest_common_ancestor(&a, &b), sp_map.lowest_common_ancestor(&a, &b)] {
                match result {
                    Some((&key, _)) => {
                        prop_assert!(both_present, "lca({}, {}) found {} despite an absent key", a, b, key);
                        prop_assert!(key >= a.min(b) && key <= a.max(b), "lca({}, {}) = {} out of range", a, b, key);
                    }
                    None => prop_assert!(!both_present, "lca({}, {}) missing", a, b),
                }
            }
        }
    }
}
