//! brevity-radio core library.
//!
//! Converts loosely structured GCI radio transmissions from pilots into
//! strongly typed [`Request`] values, and clusters altitude sets into
//! [`Stack`]s for situational-awareness reporting. The main entry points
//! are [`Parser::parse`] for transmissions and [`stacks`] for altitudes.
//!
//! Everything here is a synchronous pure function of its inputs plus the
//! parser's immutable configuration: no I/O, no global state, no panics on
//! malformed input. An uninterpretable transmission is an expected outcome,
//! not an error.

#![warn(missing_docs)]

/// Altitude stack aggregation.
pub mod brevity;
/// Coalition identifiers shared with the telemetry wire.
pub mod coalition;
/// Radio grammar: sanitizer, vocabulary, callsign decoding, and the
/// transmission parser.
pub mod radio;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Parser
pub use radio::parser::{ANYFACE, ParseFailure, Parser};

// Requests
pub use radio::request::{Braa, Bullseye, ContactFilter, Request};

// Callsign and vocabulary
pub use radio::callsign::Callsign;
pub use radio::vocabulary::{RequestWord, Vocabulary};

// Altitude stacks
pub use brevity::stacks::{Stack, stacks};

// Coalition
pub use coalition::Coalition;
