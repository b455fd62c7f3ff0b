//! Shell command obfuscation variant generator for injection filter testing.
//!
//! Turns one shell command into several encodings that a bash target
//! decodes back into the same command at execution time:
//!
//! 1. **direct** — flags folded into a brace expansion, `/` via `${PATH:0:1}`
//! 2. **reverse** — each word reversed and restored with `rev`
//! 3. **split** — every character single-quoted on its own
//! 4. **case** — alternating case, folded back with `tr`
//! 5. **base64** — the whole command decoded and piped into `bash`
//!
//! Pipeline: arguments → extract → tokenize → every selected encoder → one line each.

mod encode;
mod error;
mod escape;
mod extract;
mod strip;
mod tokenize;

use anyhow::{Context, Result};
use clap::Parser;
use encode::{Encoder, DEFAULT_VARIANTS, LEGACY_VARIANTS};
use error::PayloadError;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: payloadgen [OPTIONS] \"<shell command>\"";

#[derive(Parser)]
#[command(
    name = "payloadgen",
    about = "Generate obfuscated variants of a shell command for filter testing"
)]
struct Cli {
    /// Command to encode. Wrap it in START- ... -STOP to pick it out of a longer argument list.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,

    /// Read commands from a file, one per line (blank and # lines are skipped)
    #[arg(short = 'i', long = "input", conflicts_with = "command")]
    input: Option<PathBuf>,

    /// Variants to emit, in order (repeatable or comma-separated): direct, reverse, split, case, base64
    #[arg(short = 's', long = "select", value_delimiter = ',')]
    select: Vec<String>,

    /// Emit only Variant 1 and Variant 2
    #[arg(short = 'L', long = "legacy", conflicts_with = "select")]
    legacy: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// One encoded variant, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Payload {
    label: &'static str,
    text: String,
}

/// Tokenize `command` and run every encoder over the same tokens.
fn generate(command: &str, encoders: &[Box<dyn Encoder>]) -> Result<Vec<Payload>, PayloadError> {
    let tokens = tokenize::tokenize(command)?;
    debug!(?tokens, "tokenized command");
    Ok(encoders
        .iter()
        .map(|enc| {
            debug!(variant = enc.name(), "encoding");
            Payload {
                label: enc.label(),
                text: enc.encode(&tokens),
            }
        })
        .collect())
}

fn write_payloads(out: &mut impl Write, payloads: &[Payload]) -> io::Result<()> {
    for p in payloads {
        writeln!(out, "{}: {}", p.label, p.text)?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_new(format!("payloadgen={level}"))
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn variant_names(cli: &Cli) -> Vec<String> {
    let names: &[&str] = if cli.legacy {
        LEGACY_VARIANTS
    } else if cli.select.is_empty() {
        DEFAULT_VARIANTS
    } else {
        return cli.select.clone();
    };
    names.iter().map(|n| n.to_string()).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let names = variant_names(&cli);
    debug!(variants = ?names, "selected variants");
    let encoders = encode::create_encoders(&names)?;

    let mut out = io::stdout().lock();
    match &cli.input {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for (n, (line_no, command)) in strip::command_lines(&source).into_iter().enumerate() {
                let payloads = generate(&command, &encoders)
                    .with_context(|| format!("{}:{}", path.display(), line_no))?;
                if n > 0 {
                    writeln!(out)?;
                }
                write_payloads(&mut out, &payloads)?;
            }
        }
        None => {
            if cli.command.is_empty() {
                return Err(PayloadError::Usage(USAGE.to_string()).into());
            }
            let command = extract::extract(&cli.command);
            debug!(%command, "extracted command");
            let payloads = generate(&command, &encoders)?;
            write_payloads(&mut out, &payloads)?;
        }
    }

    Ok(())
}
