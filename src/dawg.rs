//! The dictionary automaton: an immutable minimal deterministic acyclic
//! word graph (DAWG) built from the input dictionary.
//!
//! # Construction
//!
//! Words are inserted into an arena-backed trie, then minimized bottom-up
//! by hash-consing: each node's signature is `(is_final, children-by-id)`,
//! and a register maps signatures already seen to the canonical `Rc` for
//! that subtree. Two subtries with the same signature collapse to the same
//! `Rc<Node>`, which is what distinguishes a DAWG from a plain trie — common
//! suffixes are shared, not duplicated. This is option (a) from the
//! construction contract: build a trie, then hash-cons equivalent subtrees
//! bottom-up; it yields the same structural sharing as incremental
//! Daciuk-Mihov minimization without requiring presorted input.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::error::ConfigError;

/// A node in the minimized word graph. Immutable after construction, shared
/// by `Rc` wherever two subtries turned out structurally equivalent.
#[derive(Debug)]
pub struct DawgNode {
    id: usize,
    final_: bool,
    children: Vec<(char, Rc<DawgNode>)>,
}

impl DawgNode {
    /// Does a word ending here complete a dictionary entry?
    pub fn is_final(&self) -> bool {
        self.final_
    }

    /// The child reached by `sym`, if any.
    pub fn child(&self, sym: char) -> Option<&Rc<DawgNode>> {
        self.children
            .binary_search_by_key(&sym, |(c, _)| *c)
            .ok()
            .map(|i| &self.children[i].1)
    }

    pub fn has_child(&self, sym: char) -> bool {
        self.child(sym).is_some()
    }

    /// Children in ascending symbol order — stable within and across builds,
    /// since it falls out of the `BTreeMap`-ordered trie used to build this
    /// node.
    pub fn children(&self) -> impl Iterator<Item = (char, &Rc<DawgNode>)> {
        self.children.iter().map(|(c, n)| (*c, n))
    }
}

/// The dictionary automaton.
#[derive(Debug, Clone)]
pub struct Dawg {
    root: Rc<DawgNode>,
}

impl Dawg {
    /// The DAWG's root node.
    pub fn root(&self) -> &Rc<DawgNode> {
        &self.root
    }

    /// Builds the minimal DAG accepting exactly `words`. Duplicate words are
    /// a caller error ([`ConfigError::DuplicateWord`]). An empty dictionary
    /// is representable: the root has no children and is not final.
    pub fn build<I, S>(words: I) -> Result<Dawg, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            let word = word.as_ref();
            if !trie.insert(word) {
                return Err(ConfigError::DuplicateWord(word.to_string()));
            }
        }

        let mut register: HashMap<Signature, Rc<DawgNode>> = HashMap::new();
        let mut next_id = 0usize;
        let root = minimize(&trie.arena, 0, &mut register, &mut next_id);
        Ok(Dawg { root })
    }
}

/// `(is_final, [(symbol, canonical child id), ...])` — the hash-consing key.
/// Two trie nodes with the same signature denote the same language from
/// that point on, and collapse to the same `Rc<DawgNode>`.
type Signature = (bool, Vec<(char, usize)>);

struct TrieNode {
    final_: bool,
    children: BTreeMap<char, usize>,
}

struct Trie {
    arena: Vec<TrieNode>,
}

impl Trie {
    fn new() -> Self {
        Trie {
            arena: vec![TrieNode {
                final_: false,
                children: BTreeMap::new(),
            }],
        }
    }

    /// Inserts `word`, returning `false` if it was already present.
    fn insert(&mut self, word: &str) -> bool {
        let mut cur = 0usize;
        for sym in word.chars() {
            cur = match self.arena[cur].children.get(&sym) {
                Some(&next) => next,
                None => {
                    let next = self.arena.len();
                    self.arena.push(TrieNode {
                        final_: false,
                        children: BTreeMap::new(),
                    });
                    self.arena[cur].children.insert(sym, next);
                    next
                }
            };
        }
        if self.arena[cur].final_ {
            return false;
        }
        self.arena[cur].final_ = true;
        true
    }
}

fn minimize(
    arena: &[TrieNode],
    idx: usize,
    register: &mut HashMap<Signature, Rc<DawgNode>>,
    next_id: &mut usize,
) -> Rc<DawgNode> {
    let node = &arena[idx];
    let mut children = Vec::with_capacity(node.children.len());
    for (&sym, &child_idx) in &node.children {
        let child = minimize(arena, child_idx, register, next_id);
        children.push((sym, child));
    }

    let signature: Signature = (
        node.final_,
        children.iter().map(|(c, n)| (*c, n.id)).collect(),
    );

    if let Some(existing) = register.get(&signature) {
        return Rc::clone(existing);
    }

    let id = *next_id;
    *next_id += 1;
    let dawg_node = Rc::new(DawgNode {
        id,
        final_: node.final_,
        children,
    });
    register.insert(signature, Rc::clone(&dawg_node));
    dawg_node
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn accepted(node: &Rc<DawgNode>, prefix: String, out: &mut HashSet<String>) {
        if node.is_final() {
            out.insert(prefix.clone());
        }
        for (sym, child) in node.children() {
            let mut next = prefix.clone();
            next.push(sym);
            accepted(child, next, out);
        }
    }

    fn language(dawg: &Dawg) -> HashSet<String> {
        let mut out = HashSet::new();
        accepted(dawg.root(), String::new(), &mut out);
        out
    }

    #[test]
    fn accepts_exactly_the_input_dictionary() {
        let words = ["foo", "bar", "baz", "bart"];
        let dawg = Dawg::build(words).unwrap();
        let expected: HashSet<String> = words.iter().map(|s| s.to_string()).collect();
        assert_eq!(language(&dawg), expected);
    }

    #[test]
    fn empty_word_is_representable() {
        let dawg = Dawg::build(["", "a"]).unwrap();
        assert!(dawg.root().is_final());
        assert!(dawg.root().has_child('a'));
    }

    #[test]
    fn empty_dictionary_has_no_children_and_nonfinal_root() {
        let dawg = Dawg::build(Vec::<&str>::new()).unwrap();
        assert!(!dawg.root().is_final());
        assert_eq!(dawg.root().children().count(), 0);
    }

    #[test]
    fn duplicate_word_is_a_configuration_error() {
        let err = Dawg::build(["foo", "bar", "foo"]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateWord("foo".to_string()));
    }

    #[test]
    fn shares_common_suffixes() {
        // "ing" and "ed" suffixes recur; the minimized graph should share
        // those subtries rather than duplicate them as a trie would.
        let dawg = Dawg::build(["walking", "talking", "walked", "talked"]).unwrap();
        let walk_k = dawg.root().child('w').unwrap().child('a').unwrap().child('l').unwrap().child('k').unwrap();
        let talk_k = dawg.root().child('t').unwrap().child('a').unwrap().child('l').unwrap().child('k').unwrap();
        // Both "walk" and "talk" are followed by the same {ing, ed} suffix
        // automaton, so they should collapse to the identical Rc.
        assert!(Rc::ptr_eq(walk_k, talk_k));
    }

    #[test]
    fn children_are_in_ascending_symbol_order() {
        let dawg = Dawg::build(["c", "a", "b"]).unwrap();
        let syms: Vec<char> = dawg.root().children().map(|(c, _)| c).collect();
        assert_eq!(syms, vec!['a', 'b', 'c']);
    }
}
