//! `brevity` — parse GCI brevity radio calls and cluster altitude stacks.

mod render;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::render::{Format, print_failure, print_request, print_stacks};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "brevity",
    version,
    about = "brevity-radio — parse GCI radio transmissions into typed requests"
)]
struct Cli {
    /// Output mode: "pretty" for human-readable summaries, "json" for
    /// machine-readable envelopes. Defaults to "pretty" when stdout is a
    /// TTY, "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse one radio transmission into a typed request.
    Parse {
        /// The transmission text, or `-` to read it from stdin.
        transmission: String,
        /// The GCI controller's own callsign (the wake word, besides
        /// "anyface").
        #[arg(long)]
        callsign: String,
    },

    /// Cluster altitudes (feet) into descending stacks.
    Stacks {
        /// Altitudes in feet.
        #[arg(required = true)]
        altitudes_ft: Vec<f64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    let code = match run(cli.cmd, format) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            2
        }
    };
    process::exit(code);
}

fn run(cmd: Cmd, format: Format) -> Result<i32> {
    match cmd {
        Cmd::Parse {
            transmission,
            callsign,
        } => cmd_parse(format, &transmission, &callsign),
        Cmd::Stacks { altitudes_ft } => {
            print_stacks(format, &brevity_radio_core::stacks(&altitudes_ft));
            Ok(0)
        }
    }
}

/// Parse one transmission; exit 0 when interpreted, 1 when not.
fn cmd_parse(format: Format, transmission: &str, callsign: &str) -> Result<i32> {
    let text = if transmission == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading transmission from stdin")?;
        buf
    } else {
        transmission.to_string()
    };

    let parser = brevity_radio_core::Parser::new(callsign);
    match parser.parse_detailed(&text) {
        Ok(request) => {
            print_request(format, &request);
            Ok(0)
        }
        Err(failure) => {
            print_failure(format, &failure);
            Ok(1)
        }
    }
}
