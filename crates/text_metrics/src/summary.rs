use itertools::Itertools;

use crate::sentences::split_sentences;

/// Number of leading sentences a summary keeps unless configured otherwise.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Extractive summary: the first `max_sentences` sentences of `text`
/// joined by single spaces. If the text has fewer sentences, all of them
/// are returned. Positional truncation, no ranking.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(max_sentences)
        .join(" ")
}
