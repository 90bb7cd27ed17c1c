use std::sync::LazyLock;

use regex::Regex;

/// Conversational fillers removed from transcripts, in application order.
/// Multi-word terms come before any single word they contain, so
/// "sort of" is gone before the standalone "so" pass runs.
const FILLER_TERMS: &[&str] = &[
    "you know",
    "actually",
    "basically",
    "literally",
    "like",
    "kinda",
    "sort of",
    "so",
];

static FILLER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILLER_TERMS
        .iter()
        .map(|term| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                .expect("filler term should compile to a valid pattern")
        })
        .collect()
});

/// Removes every case-insensitive whole-word occurrence of the known
/// filler terms. Word-boundary matching keeps occurrences embedded in
/// longer words ("likely", "absolutely") intact. Whitespace left behind
/// by a removal is not collapsed; downstream word counting splits on
/// whitespace runs and is unaffected.
pub fn strip_fillers(text: &str) -> String {
    FILLER_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, "").into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_fillers_are_removed() {
        let out = strip_fillers("This is basically a test");
        assert!(
            !out.to_lowercase().contains("basically"),
            "filler should be gone, got: {out}"
        );
        assert!(out.contains("This is"));
        assert!(out.contains("a test"));
    }

    #[test]
    fn test_removal_is_case_insensitive() {
        let out = strip_fillers("Basically, LITERALLY everyone agrees");
        let lower = out.to_lowercase();
        assert!(!lower.contains("basically"), "got: {out}");
        assert!(!lower.contains("literally"), "got: {out}");
        assert!(out.contains("everyone agrees"));
    }

    #[test]
    fn test_embedded_occurrences_are_preserved() {
        let out = strip_fillers("It is likely that something unlike this happens");
        assert!(out.contains("likely"), "embedded 'like' kept, got: {out}");
        assert!(out.contains("unlike"), "embedded 'like' kept, got: {out}");
    }

    #[test]
    fn test_multiword_fillers_are_removed() {
        let out = strip_fillers("It was sort of fine, you know, mostly");
        let lower = out.to_lowercase();
        assert!(!lower.contains("sort of"), "got: {out}");
        assert!(!lower.contains("you know"), "got: {out}");
        assert!(out.contains("fine"));
        assert!(out.contains("mostly"));
    }

    #[test]
    fn test_so_inside_words_survives() {
        let out = strip_fillers("The solution is sound, so we ship it");
        assert!(out.contains("solution"), "got: {out}");
        assert!(out.contains("sound"), "got: {out}");
        assert!(!out.split_whitespace().any(|w| w.eq_ignore_ascii_case("so")));
    }

    #[test]
    fn test_text_without_fillers_is_unchanged() {
        let text = "Plain declarative content with nothing removable";
        assert_eq!(strip_fillers(text), text);
    }
}
