use crate::sentences::split_sentences;

/// Flesch reading-ease score of `text`.
///
/// `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`, with
/// syllables estimated per word by vowel-group counting. Higher is easier;
/// ordinary prose lands somewhere between 0 and ~100, though the formula
/// is unbounded on both ends.
///
/// Zero words or zero sentences yields `0.0` instead of dividing by zero,
/// so scoring an empty clarity-filter result is always safe.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentence_count = split_sentences(text).len();
    let words: Vec<String> = text
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();

    if sentence_count == 0 || words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    206.835 - 1.015 * (word_count / sentence_count as f64)
        - 84.6 * (syllable_count as f64 / word_count)
}

/// Rounds to two decimal places for display.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_lowercase()
}

/// Heuristic syllable count for a lowercase alphabetic word: number of
/// vowel groups, discounting a silent final `e` (but not `-le` endings),
/// with a floor of one.
fn count_syllables(word: &str) -> usize {
    let mut count = 0;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }
    if word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_scores_zero_without_panicking() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
    }

    #[test]
    fn test_simple_prose_scores_high() {
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!(
            score > 100.0,
            "monosyllabic prose should score very high, got {score}"
        );
    }

    #[test]
    fn test_two_plain_sentences_land_in_easy_range() {
        let score = flesch_reading_ease("This is a simple test. It has two sentences.");
        assert!(
            (80.0..100.0).contains(&score),
            "plain prose should be in the easy band, got {score}"
        );
    }

    #[test]
    fn test_dense_text_scores_lower_than_plain_text() {
        let plain = flesch_reading_ease("The dog ran to the park. He was glad.");
        let dense = flesch_reading_ease(
            "Organizational interdependencies necessitate comprehensive administrative \
             coordination methodologies throughout institutional infrastructures.",
        );
        assert!(
            dense < plain,
            "polysyllabic text ({dense}) should score below plain text ({plain})"
        );
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("sentence"), 2);
        assert_eq!(count_syllables("simple"), 2);
        assert_eq!(count_syllables("readability"), 5);
        // floor of one even for vowel-less tokens
        assert_eq!(count_syllables("hmm"), 1);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(89.0), 89.0);
        assert_eq!(round2(-5.128), -5.13);
    }
}
