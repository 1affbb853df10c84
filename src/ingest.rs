//! Dictionary ingestion: reading a plain-text wordlist into the distinct
//! set of words [`crate::dawg::Dawg::build`] expects.
//!
//! Input is split on whitespace, and every character that isn't a "word"
//! character (Unicode alphanumeric or underscore) is stripped from each
//! token. Two tokens that collapse to the same word after stripping are
//! folded into one entry — a deliberate simplification, not a bug: a file
//! of punctuation-heavy prose makes for a more interesting dictionary than
//! one that rejects it.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Strips every non-word character from `token`.
fn strip_non_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Splits `text` on whitespace and folds it into a distinct, sorted set of
/// stripped words. Empty words (a token that was all punctuation) are
/// dropped.
pub fn ingest_text(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(strip_non_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Reads `path` and ingests it as a dictionary.
pub fn ingest_file(path: &Path) -> io::Result<BTreeSet<String>> {
    let text = fs::read_to_string(path)?;
    Ok(ingest_text(&text))
}
