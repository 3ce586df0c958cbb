//! Output rendering for the CLI.
//!
//! Parse results and stacks are printed either as a short human summary or
//! as machine-readable JSON envelopes. JSON is the default when stdout is
//! piped, so scripted callers never have to pass `--output`.

use std::io::{self, IsTerminal};

use brevity_radio_core::{ParseFailure, Request, Stack};
use serde::Serialize;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Short human-readable summary lines.
    Pretty,
    /// Machine-readable JSON envelopes.
    Json,
}

impl Format {
    /// Resolve the `--output` flag, defaulting by whether stdout is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Envelopes ───────────────────────────────────────────────────────────

/// JSON envelope for `brevity parse`.
#[derive(Serialize)]
struct ParseEnvelope<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// JSON envelope for `brevity stacks`.
#[derive(Serialize)]
struct StacksEnvelope<'a> {
    stacks: &'a [Stack],
}

// ── Printers ────────────────────────────────────────────────────────────

pub(crate) fn print_request(format: Format, request: &Request) {
    match format {
        Format::Json => print_json(&ParseEnvelope {
            ok: true,
            request: Some(request),
            reason: None,
        }),
        Format::Pretty => println!("{}", summarize(request)),
    }
}

pub(crate) fn print_failure(format: Format, failure: &ParseFailure) {
    match format {
        Format::Json => print_json(&ParseEnvelope {
            ok: false,
            request: None,
            reason: Some(failure.to_string()),
        }),
        Format::Pretty => println!("unreadable: {failure}"),
    }
}

pub(crate) fn print_stacks(format: Format, stacks: &[Stack]) {
    match format {
        Format::Json => print_json(&StacksEnvelope { stacks }),
        Format::Pretty => {
            if stacks.is_empty() {
                println!("no stacks");
                return;
            }
            for stack in stacks {
                println!("{:>6} ft  x{}", stack.altitude_ft, stack.count);
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: serializing output: {e}"),
    }
}

fn summarize(request: &Request) -> String {
    match request {
        Request::AlphaCheck { callsign } => format!("{callsign}: alpha check"),
        Request::RadioCheck { callsign } => format!("{callsign}: radio check"),
        Request::BogeyDope { callsign, filter } => match filter {
            Some(f) => format!("{callsign}: bogey dope ({f:?})"),
            None => format!("{callsign}: bogey dope"),
        },
        Request::Picture {
            callsign,
            radius_nm,
        } => match radius_nm {
            Some(r) => format!("{callsign}: picture within {r} nm"),
            None => format!("{callsign}: picture"),
        },
        Request::Spiked { callsign, bearing } => {
            format!("{callsign}: spiked, bearing {bearing:03}")
        }
        Request::Declare {
            callsign,
            bullseye,
            altitude_ft,
        } => format!(
            "{callsign}: declare bullseye {:03}/{} at {altitude_ft} ft",
            bullseye.bearing, bullseye.distance_nm
        ),
        Request::Snaplock { callsign, braa } => format!(
            "{callsign}: snaplock {:03}/{} at {} ft",
            braa.bearing, braa.range_nm, braa.altitude_ft
        ),
        _ => format!("{request:?}"),
    }
}
