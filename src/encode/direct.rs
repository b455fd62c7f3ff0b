//! Variant 1: the command as-is, flags folded into a brace expansion.
//!
//! `ls -la /tmp` becomes `{ls,-la}${IFS}${PATH:0:1}tmp` behind the leading
//! newline marker. Brace expansion turns `{ls,-la}` back into two words.

use crate::encode::Encoder;
use crate::escape::{escape_path, TokenKind, NEWLINE, SEPARATOR};

pub struct DirectEncoder;

impl Encoder for DirectEncoder {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn label(&self) -> &'static str {
        "Variant 1"
    }

    fn encode(&self, tokens: &[String]) -> String {
        let Some((cmd, rest)) = tokens.split_first() else {
            return String::new();
        };

        let (flags, args): (Vec<&String>, Vec<&String>) = rest
            .iter()
            .partition(|tok| TokenKind::of(tok) == TokenKind::Flag);
        let flags: String = flags.into_iter().map(String::as_str).collect();

        let mut out = String::from(NEWLINE);
        if flags.is_empty() {
            out.push_str(cmd);
        } else {
            out.push_str(&format!("{{{cmd},{flags}}}"));
        }
        for arg in args {
            out.push_str(SEPARATOR);
            out.push_str(&escape_path(arg));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(words: &[&str]) -> String {
        let tokens: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        DirectEncoder.encode(&tokens)
    }

    #[test]
    fn flags_go_into_brace_group() {
        let out = enc(&["ls", "-la", "/tmp"]);
        assert!(out.contains("{ls,-la}"), "Got: {out}");
        assert!(out.contains("${PATH:0:1}tmp"), "Got: {out}");
        assert_eq!(out, "${LS_COLORS:10:1}%0a{ls,-la}${IFS}${PATH:0:1}tmp");
    }

    #[test]
    fn multiple_flags_concatenate() {
        assert_eq!(
            enc(&["ls", "-l", "/etc", "-a"]),
            "${LS_COLORS:10:1}%0a{ls,-l-a}${IFS}${PATH:0:1}etc"
        );
    }

    #[test]
    fn no_flags_keeps_bare_command() {
        assert_eq!(
            enc(&["cat", "/etc/passwd"]),
            "${LS_COLORS:10:1}%0acat${IFS}${PATH:0:1}etc${PATH:0:1}passwd"
        );
    }

    #[test]
    fn command_alone() {
        assert_eq!(enc(&["id"]), "${LS_COLORS:10:1}%0aid");
    }

    #[test]
    fn plain_args_are_escaped_too() {
        assert_eq!(
            enc(&["cat", "logs/app.log"]),
            "${LS_COLORS:10:1}%0acat${IFS}logs${PATH:0:1}app.log"
        );
    }
}
