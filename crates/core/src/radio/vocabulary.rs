//! The fixed recognition vocabulary.
//!
//! Everything the parser can recognize lives in a [`Vocabulary`] value:
//! trigger phrases, the digit-word table (including phonetic forms like
//! "niner" and "tree"), and the number-word dictionary used by the
//! sanitizer. A vocabulary is built once, injected into the parser, and
//! never mutated — instances are trivially shareable across threads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The closed set of recognized request types, one per trigger phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RequestWord {
    /// ALPHA CHECK — position readback, no fields.
    AlphaCheck,
    /// BOGEY DOPE — nearest-threat query, optional contact filter.
    BogeyDope,
    /// DECLARE — identification query for a bullseye position.
    Declare,
    /// PICTURE — tactical overview, optional radius.
    Picture,
    /// RADIO CHECK — link check, no fields.
    RadioCheck,
    /// SPIKED — RWR spike bearing report.
    Spiked,
    /// SNAPLOCK — identification query for a BRAA position.
    Snaplock,
}

impl fmt::Display for RequestWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlphaCheck => "alpha check",
            Self::BogeyDope => "bogey dope",
            Self::Declare => "declare",
            Self::Picture => "picture",
            Self::RadioCheck => "radio check",
            Self::Spiked => "spiked",
            Self::Snaplock => "snaplock",
        })
    }
}

/// Immutable recognition tables for one parser instance.
///
/// Construct with [`Vocabulary::standard`]. The tables are fixed data; the
/// type exists so they are injected configuration rather than process-wide
/// state, which keeps parser instances independently testable.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Trigger phrase → request word. Matched as an accumulated-text
    /// suffix; longest matching phrase wins.
    triggers: Vec<(&'static str, RequestWord)>,
    /// Digit word → decimal digit, including phonetic radio forms.
    digits: HashMap<&'static str, u8>,
    /// English number word → digit string, applied by the sanitizer.
    number_words: HashMap<&'static str, &'static str>,
}

impl Vocabulary {
    /// Build the standard GCI vocabulary.
    pub fn standard() -> Self {
        let triggers = vec![
            ("alpha check", RequestWord::AlphaCheck),
            ("bogey dope", RequestWord::BogeyDope),
            ("declare", RequestWord::Declare),
            ("picture", RequestWord::Picture),
            ("radio check", RequestWord::RadioCheck),
            ("spiked", RequestWord::Spiked),
            // Shortened form heard at least as often as the full one.
            ("spike", RequestWord::Spiked),
            ("snaplock", RequestWord::Snaplock),
        ];

        let digits = HashMap::from([
            ("0", 0),
            ("zero", 0),
            ("o", 0),
            ("oh", 0),
            ("1", 1),
            ("one", 1),
            ("wun", 1),
            ("2", 2),
            ("two", 2),
            ("3", 3),
            ("three", 3),
            ("tree", 3),
            ("4", 4),
            ("four", 4),
            ("fower", 4),
            ("5", 5),
            ("five", 5),
            ("fife", 5),
            ("6", 6),
            ("six", 6),
            ("7", 7),
            ("seven", 7),
            ("8", 8),
            ("eight", 8),
            ("ait", 8),
            ("9", 9),
            ("nine", 9),
            ("niner", 9),
        ]);

        let number_words = HashMap::from([
            ("zero", "0"),
            ("oh", "0"),
            ("one", "1"),
            ("two", "2"),
            ("three", "3"),
            ("four", "4"),
            ("five", "5"),
            ("six", "6"),
            ("seven", "7"),
            ("eight", "8"),
            ("nine", "9"),
        ]);

        Self {
            triggers,
            digits,
            number_words,
        }
    }

    /// Find the trigger phrase ending the accumulated segment, if any.
    ///
    /// The whole table is consulted and the longest matching phrase wins,
    /// so recognition does not depend on table order even when one phrase
    /// is a suffix of another. A match must fall on a token boundary: the
    /// character before the phrase (if any) must be a space, so "despiked"
    /// never triggers.
    ///
    /// Returns the request word and the matched phrase length in bytes.
    pub fn trigger_suffix(&self, segment: &str) -> Option<(RequestWord, usize)> {
        let mut best: Option<(RequestWord, usize)> = None;
        for &(phrase, word) in &self.triggers {
            if !segment.ends_with(phrase) {
                continue;
            }
            let start = segment.len() - phrase.len();
            if start > 0 && !segment.as_bytes()[start - 1].is_ascii_whitespace() {
                continue;
            }
            if best.is_none_or(|(_, len)| phrase.len() > len) {
                best = Some((word, phrase.len()));
            }
        }
        best
    }

    /// Decode a single digit word ("7", "seven", "niner", ...).
    pub fn digit(&self, word: &str) -> Option<u8> {
        self.digits.get(word).copied()
    }

    /// Decode a token as a decimal number, most significant digit first.
    ///
    /// Accepts either a single digit word ("niner") or a glued run of
    /// digit characters ("140"). Returns `None` if any part fails to
    /// decode or the token is empty.
    pub fn number(&self, token: &str) -> Option<u32> {
        if let Some(d) = self.digit(token) {
            return Some(u32::from(d));
        }
        if token.is_empty() {
            return None;
        }
        let mut value: u32 = 0;
        for ch in token.chars() {
            let d = self.digit(ch.encode_utf8(&mut [0u8; 4]))?;
            value = value.checked_mul(10)?.checked_add(u32::from(d))?;
        }
        Some(value)
    }

    /// Look up the sanitizer's expansion for an English number word.
    pub fn number_word(&self, word: &str) -> Option<&'static str> {
        self.number_words.get(word).copied()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
