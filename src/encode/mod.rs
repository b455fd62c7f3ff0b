//! Variant encoders — trait-based strategy dispatch.
//!
//! Each encoder maps one token sequence to one obfuscated string. They share
//! nothing but the markers in [`crate::escape`], so any subset can run in any order.

pub mod base64;
pub mod case;
pub mod direct;
pub mod reverse;
pub mod split;

use anyhow::{anyhow, Result};

/// One obfuscation strategy.
pub trait Encoder {
    /// Short name used on the command line.
    fn name(&self) -> &'static str;
    /// Stable label printed in front of the payload.
    fn label(&self) -> &'static str;
    /// Encode `tokens`. Total: an empty sequence encodes to an empty string.
    fn encode(&self, tokens: &[String]) -> String;
}

/// Every variant, in output order.
pub const DEFAULT_VARIANTS: &[&str] = &["direct", "reverse", "split", "case", "base64"];

/// The reduced two-variant configuration.
pub const LEGACY_VARIANTS: &[&str] = &["direct", "reverse"];

/// Create an encoder for the given variant name.
pub fn create_encoder(name: &str) -> Result<Box<dyn Encoder>> {
    match name {
        "direct" | "1" => Ok(Box::new(direct::DirectEncoder)),
        "reverse" | "rev" | "2" => Ok(Box::new(reverse::ReverseEncoder)),
        "split" => Ok(Box::new(split::SplitQuoteEncoder)),
        "case" => Ok(Box::new(case::CaseEncoder)),
        "base64" | "b64" => Ok(Box::new(base64::Base64Encoder)),
        _ => Err(anyhow!(
            "unknown variant: {}. Use direct, reverse, split, case, or base64",
            name
        )),
    }
}

/// Resolve a list of names, keeping the caller's order.
pub fn create_encoders<S: AsRef<str>>(names: &[S]) -> Result<Vec<Box<dyn Encoder>>> {
    names.iter().map(|n| create_encoder(n.as_ref().trim())).collect()
}
