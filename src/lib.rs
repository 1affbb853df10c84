// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate dictionary lookup: a minimal DAWG synchronously traversed
//! alongside a universal Levenshtein automaton.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐
//! │   dawg.rs    │     │ levenshtein_dfa.rs │
//! │ (Dawg,       │     │ (LevenshteinAutomaton,
//! │  DawgNode)   │     │  LevenState)        │
//! └──────────────┘     └───────────────────┘
//!         │                      │
//!         └──────────┬───────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │  search.rs  │
//!              │ (SearchIter)│
//!              └─────────────┘
//! ```
//!
//! `position.rs` and `charvec.rs` supply the position algebra and
//! characteristic vectors the automaton is built from; `contracts.rs`
//! holds debug-only invariant checks over that algebra; `ingest.rs` turns
//! a wordlist file into the distinct set `Dawg::build` expects; `cli`
//! (binary-only) and `error.rs` round out the user-facing surface.
//!
//! # Usage
//!
//! ```
//! use dawglev::{search, Dawg};
//!
//! let dawg = Dawg::build(["hello", "help", "world"]).unwrap();
//! let matches: Vec<String> = search("helo", 1, &dawg).unwrap().collect();
//! assert!(matches.contains(&"hello".to_string()));
//! ```

mod charvec;
mod contracts;
pub mod dawg;
pub mod error;
pub mod ingest;
pub mod levenshtein_dfa;
mod position;
pub mod search;

pub use dawg::{Dawg, DawgNode};
pub use error::ConfigError;
pub use ingest::{ingest_file, ingest_text};
pub use levenshtein_dfa::{LevenState, LevenshteinAutomaton};
pub use search::{search, SearchIter};
