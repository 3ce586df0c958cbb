//! Callsign segment decoding.
//!
//! Pilots identify themselves between the wake word and the trigger, in
//! forms ranging from "eagle 1" through "Raven 1-4" to a bare number. The
//! decoder normalizes all of them to an optional alphabetic prefix followed
//! by space-delimited digits, decoding phonetic digit words and glued digit
//! runs along the way.

use serde::{Deserialize, Serialize};

use super::vocabulary::Vocabulary;

/// A decoded pilot callsign.
///
/// `value` is the normalized form: an optional prefix word followed by
/// space-delimited decimal digits ("raven 1 4"). `is_valid` is true iff at
/// least one digit was decoded; when false, `value` holds whatever raw
/// fragment accumulated before decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callsign {
    /// Normalized callsign text.
    pub value: String,
    /// Whether at least one digit was successfully decoded.
    pub is_valid: bool,
}

/// Decode a callsign segment into its normalized form.
///
/// The first token either decodes to a digit (the callsign is purely
/// numeric from the start) or is kept verbatim as the alphabetic prefix.
/// Every later token is decoded as a digit word, falling back to
/// character-by-character decoding for glued runs like "14". The first
/// undecodable character ends decoding: whatever value and validity have
/// accumulated so far are returned as-is. A partial callsign is a normal
/// outcome here, not an error — the caller decides what validity means.
pub fn parse_callsign(segment: &str, vocab: &Vocabulary) -> Callsign {
    let mut tokens = segment.split_whitespace();

    let mut callsign = Callsign {
        value: String::new(),
        is_valid: false,
    };
    let Some(first) = tokens.next() else {
        return callsign;
    };
    if let Some(d) = vocab.digit(first) {
        push_digit(&mut callsign.value, d);
        callsign.is_valid = true;
    } else {
        callsign.value.push_str(first);
    }

    for token in tokens {
        if let Some(d) = vocab.digit(token) {
            push_digit(&mut callsign.value, d);
            callsign.is_valid = true;
            continue;
        }
        // Glued digits ("14") decode one character at a time.
        for ch in token.chars() {
            match vocab.digit(ch.encode_utf8(&mut [0u8; 4])) {
                Some(d) => {
                    push_digit(&mut callsign.value, d);
                    callsign.is_valid = true;
                }
                None => return callsign,
            }
        }
    }
    callsign
}

fn push_digit(value: &mut String, digit: u8) {
    if !value.is_empty() {
        value.push(' ');
    }
    value.push(char::from(b'0' + digit));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(segment: &str) -> Callsign {
        parse_callsign(segment, &Vocabulary::standard())
    }

    #[test]
    fn prefix_and_single_digit() {
        let c = decode("eagle 1");
        assert_eq!(c.value, "eagle 1");
        assert!(c.is_valid);
    }

    #[test]
    fn glued_digits_decode_in_order() {
        let c = decode("raven 14");
        assert_eq!(c.value, "raven 1 4");
        assert!(c.is_valid);
    }

    #[test]
    fn phonetic_digits_decode() {
        let c = decode("hornet niner tree");
        assert_eq!(c.value, "hornet 9 3");
        assert!(c.is_valid);
    }

    #[test]
    fn purely_numeric_callsign() {
        let c = decode("1 4");
        assert_eq!(c.value, "1 4");
        assert!(c.is_valid);
    }

    #[test]
    fn undecodable_token_stops_with_partial_result() {
        let c = decode("eagle 1 flight");
        assert_eq!(c.value, "eagle 1");
        assert!(c.is_valid);
    }

    #[test]
    fn prefix_alone_is_invalid() {
        let c = decode("eagle");
        assert_eq!(c.value, "eagle");
        assert!(!c.is_valid);
    }

    #[test]
    fn empty_segment_is_invalid() {
        let c = decode("");
        assert_eq!(c.value, "");
        assert!(!c.is_valid);
    }
}
