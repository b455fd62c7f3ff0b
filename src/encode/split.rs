//! Variant Linux/Windows: every character in its own single quotes.
//!
//! `id` becomes `'i''d'`, which the shell concatenates back into one word.

use crate::encode::Encoder;
use crate::escape::{NEWLINE, SEPARATOR};

pub struct SplitQuoteEncoder;

impl Encoder for SplitQuoteEncoder {
    fn name(&self) -> &'static str {
        "split"
    }

    fn label(&self) -> &'static str {
        "Variant Linux/Windows"
    }

    fn encode(&self, tokens: &[String]) -> String {
        if tokens.is_empty() {
            return String::new();
        }

        let mut out = String::from(NEWLINE);
        for tok in tokens {
            out.push_str(SEPARATOR);
            for ch in tok.chars() {
                out.push('\'');
                out.push(ch);
                out.push('\'');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(words: &[&str]) -> String {
        let tokens: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        SplitQuoteEncoder.encode(&tokens)
    }

    #[test]
    fn quotes_each_char() {
        assert_eq!(enc(&["id"]), format!("{NEWLINE}{SEPARATOR}'i''d'"));
    }

    #[test]
    fn every_token_gets_separator() {
        assert_eq!(
            enc(&["ls", "-a"]),
            "${LS_COLORS:10:1}%0a${IFS}'l''s'${IFS}'-''a'"
        );
    }

    #[test]
    fn paths_are_quoted_not_escaped() {
        let out = enc(&["cat", "/tmp"]);
        assert!(out.ends_with("${IFS}'/''t''m''p'"), "Got: {out}");
    }

    #[test]
    fn empty_token_contributes_only_separator() {
        assert_eq!(enc(&["echo", ""]), "${LS_COLORS:10:1}%0a${IFS}'e''c''h''o'${IFS}");
    }
}
