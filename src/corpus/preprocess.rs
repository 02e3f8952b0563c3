// Corpus cleaning pipeline.
//
// Turns a raw text file into the normalized token stream the counters
// consume: Project Gutenberg boilerplate is stripped, punctuation removed,
// everything lowercased, and stopwords filtered out. The counters never see
// raw text — this module owns the entire text-to-token contract.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::info;

// (?s) so the END branch swallows the entire license tail.
static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(\*\*\* START OF TH(E|IS) PROJECT GUTENBERG.*?\*\*\*|\*\*\* END OF TH(E|IS) PROJECT GUTENBERG.*)",
    )
    .expect("static regex")
});

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex"));

/// Read the corpus file into memory.
///
/// A missing or unreadable path is fatal — there is no partial-result mode.
pub fn load_corpus(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))
}

/// Strip Project Gutenberg header and footer markers.
///
/// Removes the `*** START OF TH{E,IS} PROJECT GUTENBERG ... ***` marker line
/// and everything from the `*** END OF ...` marker to the end of the text.
/// Text without these markers passes through unchanged.
pub fn strip_gutenberg(text: &str) -> String {
    BOILERPLATE.replace_all(text, "").into_owned()
}

/// Tokenize cleaned text: drop punctuation, lowercase, split on whitespace,
/// and filter against the supplied stopword set.
///
/// The stopword set is passed in explicitly so corpora in different
/// languages can be processed back to back without shared state.
pub fn tokenize(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let cleaned = PUNCTUATION.replace_all(text, "").to_lowercase();

    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .filter(|word| !stopwords.contains(*word))
        .map(|word| word.to_string())
        .collect();

    info!(
        tokens = tokens.len(),
        stopwords = stopwords.len(),
        "Tokenized corpus"
    );

    tokens
}
