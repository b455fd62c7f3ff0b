//! Line filtering for batch command files.
//!
//! A command file holds one shell command per line. Comment lines and
//! blank lines are dropped; surviving lines keep their line number so
//! parse errors can point back into the file.

use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*#").unwrap());
static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*\r?$").unwrap());

/// Returns true if the line carries no command.
pub fn should_strip(line: &str) -> bool {
    RE_COMMENT.is_match(line) || RE_BLANK.is_match(line)
}

/// Commands in `input` as `(line_number, command)`, 1-based, trimmed.
pub fn command_lines(input: &str) -> Vec<(usize, String)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !should_strip(line))
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}
