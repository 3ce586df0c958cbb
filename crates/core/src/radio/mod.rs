/// Callsign segment decoding — phonetic and glued digit handling.
pub mod callsign;
/// Transmission parser — wake word, trigger scan, request dispatch.
pub mod parser;
/// Typed request values produced by the parser.
pub mod request;
/// Transmission normalization ahead of tokenization.
pub mod sanitize;
/// Fixed recognition vocabulary — triggers and digit words.
pub mod vocabulary;
