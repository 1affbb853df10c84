//! Property tests checking the automaton-driven search against an
//! independent brute-force edit-distance oracle.

mod common;

use std::collections::HashSet;

use dawglev::{search, Dawg};
use proptest::prelude::*;
use proptest::string::string_regex;

use common::reference_distance;

fn word_strategy() -> impl Strategy<Value = String> {
    string_regex("[a-d]{1,6}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(word_strategy(), 1..12).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn search_is_sound(
        dictionary in dictionary_strategy(),
        query in word_strategy(),
        n in 1u8..3,
    ) {
        let dawg = Dawg::build(dictionary.iter().map(String::as_str)).unwrap();
        let found: Vec<String> = search(&query, n, &dawg).unwrap().collect();
        for word in &found {
            prop_assert!(reference_distance(&query, word) <= n as usize);
        }
    }

    #[test]
    fn search_is_complete(
        dictionary in dictionary_strategy(),
        query in word_strategy(),
        n in 1u8..3,
    ) {
        let dawg = Dawg::build(dictionary.iter().map(String::as_str)).unwrap();
        let found: HashSet<String> = search(&query, n, &dawg).unwrap().collect();
        for word in &dictionary {
            if reference_distance(&query, word) <= n as usize {
                prop_assert!(found.contains(word));
            }
        }
    }

    #[test]
    fn search_never_duplicates(
        dictionary in dictionary_strategy(),
        query in word_strategy(),
        n in 1u8..3,
    ) {
        let dawg = Dawg::build(dictionary.iter().map(String::as_str)).unwrap();
        let mut seen = HashSet::new();
        for word in search(&query, n, &dawg).unwrap() {
            prop_assert!(seen.insert(word));
        }
    }

    #[test]
    fn search_matches_the_dawg_built_from_the_same_dictionary(
        dictionary in dictionary_strategy(),
        query in word_strategy(),
        n in 1u8..3,
    ) {
        let universe: HashSet<String> = dictionary.iter().cloned().collect();
        let dawg = Dawg::build(dictionary.iter().map(String::as_str)).unwrap();
        let found: HashSet<String> = search(&query, n, &dawg).unwrap().collect();
        prop_assert!(found.is_subset(&universe));
    }

    #[test]
    fn larger_tolerance_is_monotonically_more_permissive(
        dictionary in dictionary_strategy(),
        query in word_strategy(),
    ) {
        let dawg = Dawg::build(dictionary.iter().map(String::as_str)).unwrap();
        let low: HashSet<String> = search(&query, 1, &dawg).unwrap().collect();
        let high: HashSet<String> = search(&query, 2, &dawg).unwrap().collect();
        prop_assert!(low.is_subset(&high));
    }

    #[test]
    fn single_edit_distance_is_symmetric_for_search(
        word in word_strategy(),
        mutated in word_strategy(),
    ) {
        // A spot-check of the well-known symmetry of edit distance: if
        // `mutated` is found searching for `word` at tolerance n, then
        // `word` should be found searching for `mutated` at the same n.
        prop_assume!(word != mutated);
        let dictionary = [word.as_str(), mutated.as_str()];
        let dawg = Dawg::build(dictionary).unwrap();

        let forward: HashSet<String> = search(&word, 2, &dawg).unwrap().collect();
        let backward: HashSet<String> = search(&mutated, 2, &dawg).unwrap().collect();

        prop_assert_eq!(forward.contains(&mutated), backward.contains(&word));
    }
}
