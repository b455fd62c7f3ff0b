//! Variant Case Manipulation: alternating case, folded back by `tr`.

use crate::encode::Encoder;
use crate::escape::{ENCODED_NEWLINE, SEPARATOR};

pub struct CaseEncoder;

impl Encoder for CaseEncoder {
    fn name(&self) -> &'static str {
        "case"
    }

    fn label(&self) -> &'static str {
        "Variant Case Manipulation"
    }

    fn encode(&self, tokens: &[String]) -> String {
        if tokens.is_empty() {
            return String::new();
        }
        let mixed = alternate_case(&tokens.join(" "));
        format!("{ENCODED_NEWLINE}$(tr{SEPARATOR}'A-Z'{SEPARATOR}'a-z'<<<'{mixed}')")
    }
}

/// Upper-case ASCII letters at even positions, lower-case the rest.
///
/// `tr 'A-Z' 'a-z'` only folds ASCII, so anything else passes through as-is.
pub fn alternate_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, ch)| {
            if i % 2 == 0 {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}
