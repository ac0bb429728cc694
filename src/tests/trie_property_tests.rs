//! Property-based tests for the keypath trie.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::tests::{path_strategy, paths_strategy};
use crate::trie::{Trie, TrieError};

fn build(entries: &[(Vec<u8>, u32)]) -> Trie<u8, u32> {
    let mut trie = Trie::new();
    for (path, value) in entries {
        trie.put(path, *value);
    }
    trie
}

/// Last value written per path, i.e. what the trie should hold.
fn expected(entries: &[(Vec<u8>, u32)]) -> HashMap<Vec<u8>, u32> {
    entries.iter().cloned().collect()
}

proptest! {
    // Property: every stored path reads back the last value written to it
    #[test]
    fn prop_get_returns_last_put(entries in paths_strategy()) {
        let trie = build(&entries);
        for (path, value) in expected(&entries) {
            prop_assert_eq!(trie.get(&path), Ok(&value));
        }
    }

    // Property: putting the same entries twice changes nothing observable
    #[test]
    fn prop_put_is_idempotent(entries in paths_strategy()) {
        let once = build(&entries);
        let mut twice = build(&entries);
        for (path, value) in &entries {
            twice.put(path, *value);
        }

        prop_assert_eq!(once.len(), twice.len());
        let mut a: Vec<u32> = once.values().into_iter().copied().collect();
        let mut b: Vec<u32> = twice.values().into_iter().copied().collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    // Property: overwriting a path keeps every other path intact
    #[test]
    fn prop_overwrite_preserves_descendants(
        entries in paths_strategy(),
        target in path_strategy(),
        value in any::<u32>(),
    ) {
        let mut trie = build(&entries);
        trie.put(&target, value);

        let mut model = expected(&entries);
        model.insert(target.clone(), value);
        for (path, value) in model {
            prop_assert_eq!(trie.get(&path), Ok(&value));
        }
    }

    // Property: an inserted path always matches itself in full
    #[test]
    fn prop_inserted_path_matches_fully(entries in paths_strategy(), path in path_strategy()) {
        let mut trie = build(&entries);
        trie.put(&path, 0);
        prop_assert_eq!(trie.deepest_match(&path), path.as_slice());
    }

    // Property: the match is a prefix that exists, and the next element does not
    #[test]
    fn prop_deepest_match_stops_at_first_miss(entries in paths_strategy(), query in path_strategy()) {
        let trie = build(&entries);
        let matched = trie.deepest_match(&query);

        prop_assert!(query.starts_with(matched));
        if matched.len() < query.len() {
            match trie.get(&query[..=matched.len()]) {
                Err(TrieError::PathNotFound { key, depth }) => {
                    prop_assert_eq!(key, Some(query[matched.len()]));
                    prop_assert_eq!(depth, matched.len());
                }
                Ok(_) => prop_assert!(false, "path beyond the deepest match resolved"),
            }
        }
    }

    // Property: find never reports a missing child
    #[test]
    fn prop_find_never_misses_a_child(entries in paths_strategy(), query in path_strategy()) {
        let trie = build(&entries);
        let matched = trie.deepest_match(&query);
        match trie.find(&query) {
            Ok(value) => {
                prop_assert_eq!(trie.get(matched), Ok(value));
            }
            Err(err) => {
                prop_assert!(err.key().is_none());
                prop_assert_eq!(err.depth(), matched.len());
            }
        }
    }

    // Property: every value precedes the values stored below it, lazily and eagerly
    #[test]
    fn prop_values_parent_before_child(entries in paths_strategy()) {
        let model = expected(&entries);
        // Distinct values per path so positions identify paths
        let tagged: Vec<(Vec<u8>, u32)> = model
            .keys()
            .enumerate()
            .map(|(i, path)| (path.clone(), i as u32))
            .collect();
        let trie = build(&tagged);

        let eager: Vec<u32> = trie.values().into_iter().copied().collect();
        let lazy: Vec<u32> = trie.value_iter().copied().collect();
        prop_assert_eq!(eager.len(), tagged.len());
        prop_assert_eq!(lazy.len(), tagged.len());

        for order in [&eager, &lazy] {
            let position = |v: u32| order.iter().position(|x| *x == v);
            for (parent, pv) in &tagged {
                for (child, cv) in &tagged {
                    if child.len() > parent.len() && child.starts_with(parent) {
                        prop_assert!(position(*pv) < position(*cv));
                    }
                }
            }
        }
    }
}

#[test]
fn test_independent_iterators() {
    let trie = build(&[(vec![1], 1), (vec![1, 2], 2), (vec![3], 3)]);

    let mut first = trie.value_iter();
    let consumed = first.next();
    assert!(consumed.is_some());

    // A new iterator starts over regardless of the first one's progress
    assert_eq!(trie.value_iter().count(), 3);
    assert_eq!(first.count(), 2);
}
