use itertools::Itertools;

use crate::{fillers::strip_fillers, sentences::split_sentences};

/// A kept sentence must have strictly more words than this.
pub const MIN_SENTENCE_WORDS: usize = 5;
/// A kept sentence must have strictly fewer words than this.
pub const MAX_SENTENCE_WORDS: usize = 18;

/// Rewrites a raw transcript for clarity: strips filler words, then keeps
/// only sentences whose whitespace-delimited word count lies strictly
/// inside (`MIN_SENTENCE_WORDS`, `MAX_SENTENCE_WORDS`). Survivors keep
/// their own terminal punctuation (a `.` is appended to any sentence that
/// carries none) and are joined with single spaces.
///
/// Returns an empty string when no sentence satisfies the filter; callers
/// must tolerate scoring and summarizing empty input.
pub fn improve_clarity(text: &str) -> String {
    let stripped = strip_fillers(text);

    split_sentences(&stripped)
        .into_iter()
        .filter(|sentence| {
            let words = sentence.split_whitespace().count();
            words > MIN_SENTENCE_WORDS && words < MAX_SENTENCE_WORDS
        })
        .map(ensure_terminal_punctuation)
        .join(" ")
}

fn ensure_terminal_punctuation(mut sentence: String) -> String {
    let core = sentence.trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}']);
    if !core.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}
