//! Search driver: a breadth-first walk of the DAWG synchronized with the
//! Levenshtein automaton, yielding dictionary words within tolerance of the
//! query in the order they are discovered.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::dawg::{Dawg, DawgNode};
use crate::error::ConfigError;
use crate::levenshtein_dfa::{LevenState, LevenshteinAutomaton};

/// A pending search frontier entry: the prefix built so far, the DAWG node
/// it lands on, and the automaton state reached by that prefix.
struct Frame {
    prefix: String,
    node: Rc<DawgNode>,
    state: LevenState,
}

/// Iterator over dictionary words within `n` edits of the query, discovered
/// in FIFO (breadth-first, shortest-candidates-first) order.
pub struct SearchIter {
    automaton: LevenshteinAutomaton,
    worklist: VecDeque<Frame>,
}

impl Iterator for SearchIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.worklist.pop_front() {
            for (sym, child) in frame.node.children() {
                if let Some(next_state) = self.automaton.delta(&frame.state, sym) {
                    let mut next_prefix = frame.prefix.clone();
                    next_prefix.push(sym);
                    self.worklist.push_back(Frame {
                        prefix: next_prefix,
                        node: Rc::clone(child),
                        state: next_state,
                    });
                }
            }

            if frame.node.is_final() && self.automaton.is_final(&frame.state) {
                return Some(frame.prefix);
            }
        }
        None
    }
}

/// Finds every word in `dawg` within edit distance `n` of `query`.
pub fn search(query: &str, n: u8, dawg: &Dawg) -> Result<SearchIter, ConfigError> {
    let automaton = LevenshteinAutomaton::new(query, n)?;
    let initial_state = automaton.initial_state();

    let mut worklist = VecDeque::new();
    worklist.push_back(Frame {
        prefix: String::new(),
        node: Rc::clone(dawg.root()),
        state: initial_state,
    });

    Ok(SearchIter {
        automaton,
        worklist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn run(query: &str, n: u8, words: &[&str]) -> HashSet<String> {
        let dawg = Dawg::build(words).unwrap();
        search(query, n, &dawg).unwrap().collect()
    }

    #[test]
    fn exact_word_is_found_at_zero_effective_edits() {
        let found = run("hello", 1, &["hello", "world"]);
        assert!(found.contains("hello"));
    }

    #[test]
    fn one_edit_away_is_found() {
        let found = run("hello", 1, &["hallo", "help", "xxxxx"]);
        assert!(found.contains("hallo"));
        assert!(!found.contains("help"));
        assert!(!found.contains("xxxxx"));
    }

    #[test]
    fn unrelated_words_are_excluded() {
        let found = run("cat", 1, &["dog", "bird"]);
        assert!(found.is_empty());
    }

    #[test]
    fn tolerance_widens_the_match_set() {
        let found_n1 = run("kitten", 1, &["sitten", "sittin"]);
        let found_n2 = run("kitten", 2, &["sitten", "sittin"]);
        assert!(found_n1.len() <= found_n2.len());
        assert!(found_n2.contains("sittin"));
    }

    #[test]
    fn empty_dictionary_yields_no_matches() {
        let dawg = Dawg::build(Vec::<&str>::new()).unwrap();
        let found: Vec<_> = search("anything", 1, &dawg).unwrap().collect();
        assert!(found.is_empty());
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        let dawg = Dawg::build(["a"]).unwrap();
        assert!(search("a", 0, &dawg).is_err());
    }
}
