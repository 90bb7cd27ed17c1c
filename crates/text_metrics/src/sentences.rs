/// Characters that may trail terminal punctuation without breaking the
/// sentence boundary (closing quotes and brackets).
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Generic sentence boundary tokenizer.
///
/// A sentence ends at a run of `.`/`!`/`?` (optionally followed by closing
/// quotes or brackets) when the run is followed by whitespace or the end of
/// input. Sentences keep their terminal punctuation and are trimmed of
/// surrounding whitespace; empty fragments are dropped. A period followed
/// by a non-space character ("3.14", "v1.2.0") does not end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminal(chars[i].1) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        if j >= chars.len() || chars[j].1.is_whitespace() {
            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
        i = j;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
