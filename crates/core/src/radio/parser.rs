//! The transmission parser.
//!
//! One call to [`Parser::parse`] takes a raw transcript through the whole
//! pipeline: sanitize → tokenize → wake word → trigger scan (with callsign
//! extraction) → per-request field parsing. The parser holds only its
//! configured GCI callsign and vocabulary, both immutable, so a single
//! instance serves concurrent calls without synchronization.

use super::callsign::parse_callsign;
use super::request::{Braa, Bullseye, ContactFilter, Request};
use super::sanitize::sanitize;
use super::vocabulary::{RequestWord, Vocabulary};

/// Universal wake word: addresses whichever GCI controller is listening.
pub const ANYFACE: &str = "anyface";

/// Why a transmission could not be interpreted.
///
/// [`Parser::parse`] collapses all of these to `None` — an uninterpretable
/// call is silently ignored on the radio. The classification is kept for
/// diagnostics and for callers that want to answer "say again" on some
/// classes and stay quiet on others.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The transmission did not open with this controller's callsign or
    /// the universal alias. Expected for most radio traffic.
    #[error("transmission is not addressed to this controller")]
    NotAddressed,

    /// Addressed to this controller, but the transmission ended before any
    /// trigger phrase was recognized.
    #[error("no request trigger recognized before the transmission ended")]
    NoTrigger,

    /// A trigger was recognized but no callsign could be decoded from the
    /// text before it.
    #[error("could not decode a callsign from {segment:?}")]
    InvalidCallsign {
        /// The raw callsign segment that failed to decode.
        segment: String,
    },

    /// A trigger and callsign were recognized but the request's field
    /// grammar was violated.
    #[error("malformed fields for a {word} request")]
    BadGrammar {
        /// The request type whose grammar was violated.
        word: RequestWord,
    },
}

/// A radio-call parser configured for one GCI controller.
#[derive(Debug, Clone)]
pub struct Parser {
    /// This controller's own callsign, lowercased.
    callsign: String,
    vocab: Vocabulary,
}

// ── Token cursor ────────────────────────────────────────────────────────────

/// Left-to-right cursor over the sanitized token stream.
struct Cursor<'a> {
    toks: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            toks: text.split_whitespace().collect(),
            pos: 0,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        let tok = self.toks.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.toks.len()
    }
}

// ── Parser implementation ───────────────────────────────────────────────────

impl Parser {
    /// Create a parser for a controller with the standard vocabulary.
    pub fn new(gci_callsign: &str) -> Self {
        Self::with_vocabulary(gci_callsign, Vocabulary::standard())
    }

    /// Create a parser with an explicit vocabulary.
    pub fn with_vocabulary(gci_callsign: &str, vocab: Vocabulary) -> Self {
        Self {
            callsign: gci_callsign.to_lowercase(),
            vocab,
        }
    }

    /// Parse one transmission into a typed request.
    ///
    /// `None` means the transmission could not be interpreted — because it
    /// was not addressed to this controller, no trigger was recognized, or
    /// the request fields were malformed. Use [`Parser::parse_detailed`]
    /// when the distinction matters.
    pub fn parse(&self, tx: &str) -> Option<Request> {
        self.parse_detailed(tx).ok()
    }

    /// Parse one transmission, reporting why interpretation failed.
    pub fn parse_detailed(&self, tx: &str) -> Result<Request, ParseFailure> {
        let sanitized = sanitize(tx, &self.vocab);
        let mut cur = Cursor::new(&sanitized);

        // Wake word: exactly one token, our callsign or the alias.
        let wake = cur.next().ok_or(ParseFailure::NotAddressed)?;
        if wake != self.callsign && wake != ANYFACE {
            return Err(ParseFailure::NotAddressed);
        }

        // Trigger scan: accumulate tokens until a trigger phrase ends the
        // accumulated text. Everything before the phrase is the callsign
        // segment.
        let mut segment = String::new();
        loop {
            let tok = cur.next().ok_or(ParseFailure::NoTrigger)?;
            segment.push(' ');
            segment.push_str(tok);

            let Some((word, phrase_len)) = self.vocab.trigger_suffix(&segment) else {
                continue;
            };
            let callsign_segment = &segment[..segment.len() - phrase_len];
            let callsign = parse_callsign(callsign_segment, &self.vocab);
            if !callsign.is_valid {
                return Err(ParseFailure::InvalidCallsign {
                    segment: callsign_segment.trim().to_string(),
                });
            }
            return self.dispatch(word, callsign.value, &mut cur);
        }
    }

    /// Hand the remaining tokens to the request's field parser.
    fn dispatch(
        &self,
        word: RequestWord,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        match word {
            RequestWord::AlphaCheck => Ok(Request::AlphaCheck { callsign }),
            RequestWord::RadioCheck => Ok(Request::RadioCheck { callsign }),
            RequestWord::BogeyDope => self.parse_bogey_dope(callsign, cur),
            RequestWord::Declare => self.parse_declare(callsign, cur),
            RequestWord::Picture => self.parse_picture(callsign, cur),
            RequestWord::Spiked => self.parse_spiked(callsign, cur),
            RequestWord::Snaplock => self.parse_snaplock(callsign, cur),
        }
    }

    // ── Per-request field parsers ───────────────────────────────────────

    fn parse_spiked(
        &self,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        let bearing = self.parse_bearing(cur, RequestWord::Spiked)?;
        expect_end(cur, RequestWord::Spiked)?;
        Ok(Request::Spiked { callsign, bearing })
    }

    fn parse_bogey_dope(
        &self,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        let filter = match cur.next() {
            None => None,
            Some("airplane" | "airplanes" | "plane" | "planes") => Some(ContactFilter::Airplanes),
            Some("helicopter" | "helicopters" | "helo" | "helos") => {
                Some(ContactFilter::Helicopters)
            }
            Some(_) => {
                return Err(ParseFailure::BadGrammar {
                    word: RequestWord::BogeyDope,
                });
            }
        };
        expect_end(cur, RequestWord::BogeyDope)?;
        Ok(Request::BogeyDope { callsign, filter })
    }

    fn parse_picture(
        &self,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        let radius_nm = match cur.next() {
            None => None,
            Some(tok) => Some(self.vocab.number(tok).ok_or(ParseFailure::BadGrammar {
                word: RequestWord::Picture,
            })?),
        };
        expect_end(cur, RequestWord::Picture)?;
        Ok(Request::Picture {
            callsign,
            radius_nm,
        })
    }

    fn parse_declare(
        &self,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        let word = RequestWord::Declare;
        let bearing = self.parse_bearing(cur, word)?;
        let distance_nm = self.parse_number_field(cur, word)?;
        let altitude_ft = self.parse_altitude_field(cur, word)?;
        expect_end(cur, word)?;
        Ok(Request::Declare {
            callsign,
            bullseye: Bullseye {
                bearing,
                distance_nm,
            },
            altitude_ft,
        })
    }

    fn parse_snaplock(
        &self,
        callsign: String,
        cur: &mut Cursor<'_>,
    ) -> Result<Request, ParseFailure> {
        let word = RequestWord::Snaplock;
        let bearing = self.parse_bearing(cur, word)?;
        let range_nm = self.parse_number_field(cur, word)?;
        let altitude_ft = self.parse_altitude_field(cur, word)?;
        expect_end(cur, word)?;
        Ok(Request::Snaplock {
            callsign,
            braa: Braa {
                bearing,
                range_nm,
                altitude_ft,
            },
        })
    }

    // ── Shared field grammars ───────────────────────────────────────────

    /// Three single-digit tokens, most significant first, composed into
    /// degrees in `[0, 360)`.
    fn parse_bearing(&self, cur: &mut Cursor<'_>, word: RequestWord) -> Result<u16, ParseFailure> {
        let mut degrees: u16 = 0;
        for _ in 0..3 {
            let tok = cur.next().ok_or(ParseFailure::BadGrammar { word })?;
            let d = self
                .vocab
                .digit(tok)
                .ok_or(ParseFailure::BadGrammar { word })?;
            degrees = degrees * 10 + u16::from(d);
        }
        if degrees >= 360 {
            return Err(ParseFailure::BadGrammar { word });
        }
        Ok(degrees)
    }

    /// One token decoded as a decimal number (single digit word or glued
    /// digit run).
    fn parse_number_field(
        &self,
        cur: &mut Cursor<'_>,
        word: RequestWord,
    ) -> Result<u32, ParseFailure> {
        let tok = cur.next().ok_or(ParseFailure::BadGrammar { word })?;
        self.vocab
            .number(tok)
            .ok_or(ParseFailure::BadGrammar { word })
    }

    /// One number token spoken in thousands of feet, stored as feet.
    fn parse_altitude_field(
        &self,
        cur: &mut Cursor<'_>,
        word: RequestWord,
    ) -> Result<u32, ParseFailure> {
        let thousands = self.parse_number_field(cur, word)?;
        thousands
            .checked_mul(1000)
            .ok_or(ParseFailure::BadGrammar { word })
    }
}

/// Fixed grammars consume the whole remainder; leftovers are a violation.
fn expect_end(cur: &Cursor<'_>, word: RequestWord) -> Result<(), ParseFailure> {
    if cur.is_exhausted() {
        Ok(())
    } else {
        Err(ParseFailure::BadGrammar { word })
    }
}
