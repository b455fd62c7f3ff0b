//! Command extraction from a raw argument list.
//!
//! When the arguments carry a `START-` ... `-STOP` pair, only the words
//! between the markers form the command. Otherwise every argument does.

use tracing::debug;

pub const START_MARKER: &str = "START-";
pub const STOP_MARKER: &str = "-STOP";

/// Join the command words found in `args` with single spaces.
///
/// The first `START-` opens the span and the first `-STOP` after it closes
/// it. Without such a pair the markers are ignored and all of `args` is joined.
pub fn extract<S: AsRef<str>>(args: &[S]) -> String {
    let words: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    let start = words.iter().position(|w| *w == START_MARKER);
    let span = start.and_then(|start| {
        words[start + 1..]
            .iter()
            .position(|w| *w == STOP_MARKER)
            .map(|offset| (start + 1, start + 1 + offset))
    });

    match span {
        Some((from, to)) => words[from..to].join(" "),
        None => {
            if start.is_some() || words.contains(&STOP_MARKER) {
                debug!("unpaired command marker, using full argument list");
            }
            words.join(" ")
        }
    }
}
