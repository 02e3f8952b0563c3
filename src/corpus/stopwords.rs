// Stopword set construction.
//
// Wraps the stop-words crate behind a string language code and merges in an
// optional user-supplied extras file. The resulting set is an explicit value
// handed to the tokenizer — never process-global — so multiple corpora in
// different languages can be analyzed in one process.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Build the stopword set for a language, merged with an optional file of
/// extra words (one per line, blank lines and `#` comments ignored).
///
/// Matching is case-insensitive against lowercase tokens, so every entry is
/// lowercased here once.
pub fn stopword_set(language: &str, extra: Option<&Path>) -> Result<HashSet<String>> {
    let lang = parse_language(language)?;

    let mut set: HashSet<String> = get(lang)
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect();

    if let Some(path) = extra {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file: {}", path.display()))?;
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            set.insert(word.to_lowercase());
        }
    }

    info!(language, stopwords = set.len(), "Built stopword set");
    Ok(set)
}

fn parse_language(language: &str) -> Result<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "english" | "en" => LANGUAGE::English,
        "french" | "fr" => LANGUAGE::French,
        "german" | "de" => LANGUAGE::German,
        "spanish" | "es" => LANGUAGE::Spanish,
        "italian" | "it" => LANGUAGE::Italian,
        "portuguese" | "pt" => LANGUAGE::Portuguese,
        "dutch" | "nl" => LANGUAGE::Dutch,
        "russian" | "ru" => LANGUAGE::Russian,
        other => anyhow::bail!(
            "Unsupported stopword language: {other}. \
             Supported: english, french, german, spanish, italian, portuguese, dutch, russian."
        ),
    };
    Ok(lang)
}
