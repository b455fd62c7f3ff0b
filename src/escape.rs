//! Shell expansion markers shared by the encoders, and the path escaper.
//!
//! Every marker is a fragment that a bash target expands at execution time:
//! `${PATH:0:1}` to `/`, `${IFS}` to a field separator, and the eleventh
//! character of `LS_COLORS` to the newline that starts a fresh command.

/// Leading marker: newline via `${LS_COLORS:10:1}`, then a percent-encoded newline.
pub const NEWLINE: &str = "${LS_COLORS:10:1}%0a";
/// Percent-encoded newline used by the templated variants.
pub const ENCODED_NEWLINE: &str = "%0a";
/// Field separator.
pub const SEPARATOR: &str = "${IFS}";
/// First character of `PATH`, which is `/` on any sane target.
pub const SLASH: &str = "${PATH:0:1}";

/// How a token after the program name is treated, by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Flag,
    Path,
    Plain,
}

impl TokenKind {
    pub fn of(token: &str) -> Self {
        if token.starts_with('-') {
            TokenKind::Flag
        } else if token.starts_with('/') {
            TokenKind::Path
        } else {
            TokenKind::Plain
        }
    }
}

/// Replace every `/` in `path` with [`SLASH`].
pub fn escape_path(path: &str) -> String {
    path.split('/').collect::<Vec<_>>().join(SLASH)
}
