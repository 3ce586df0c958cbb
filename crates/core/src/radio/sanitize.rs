//! Transmission normalization.
//!
//! Raw transcripts arrive with arbitrary casing, punctuation, and spelled
//! out numbers ("Eagle One, Spiked two-seven-zero."). [`sanitize`] flattens
//! all of that into a lowercase, single-spaced token stream before the
//! parser ever looks at it, so no punctuation token can reach the trigger
//! scanner.

use super::vocabulary::Vocabulary;

/// Normalize a raw transmission for tokenization.
///
/// Lowercases the input, replaces every run of characters that is neither
/// alphanumeric nor whitespace with a single space, expands standalone
/// English number words through the vocabulary dictionary, and collapses
/// whitespace runs to single spaces.
///
/// Idempotent: sanitizing already-normalized input returns it unchanged.
pub fn sanitize(text: &str, vocab: &Vocabulary) -> String {
    let lowered = text.to_lowercase();

    let mut flat = String::with_capacity(lowered.len());
    let mut in_junk = false;
    for ch in lowered.chars() {
        if ch.is_alphanumeric() || ch.is_whitespace() {
            flat.push(ch);
            in_junk = false;
        } else if !in_junk {
            // A run of punctuation becomes exactly one space.
            flat.push(' ');
            in_junk = true;
        }
    }

    let mut out = String::with_capacity(flat.len());
    for token in flat.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(vocab.number_word(token).unwrap_or(token));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize_std(text: &str) -> String {
        sanitize(text, &Vocabulary::standard())
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            sanitize_std("ANYFACE, EAGLE 1 SPIKED 2-7-0"),
            "anyface eagle 1 spiked 2 7 0"
        );
    }

    #[test]
    fn punctuation_runs_become_one_space() {
        assert_eq!(sanitize_std("raven 1-4,, spike"), "raven 1 4 spike");
    }

    #[test]
    fn expands_number_words() {
        assert_eq!(
            sanitize_std("Anyface Eagle One, Spiked two seven zero"),
            "anyface eagle 1 spiked 2 7 0"
        );
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let normalized = "anyface eagle 1 spiked 2 7 0";
        assert_eq!(sanitize_std(normalized), normalized);
    }

    #[test]
    fn phonetic_digit_words_pass_through() {
        // "niner" and "tree" are decoded later by the digit table, not
        // rewritten by the sanitizer.
        assert_eq!(sanitize_std("Spiked niner, tree"), "spiked niner tree");
    }
}
