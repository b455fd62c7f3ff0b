//! Shell-style tokenizer.
//!
//! Splits a command string with POSIX quoting rules: quoted substrings keep
//! their spaces and lose their quote characters, backslash escapes apply.
//! `#` is an ordinary character, so a trailing `#...` word is kept.

use crate::error::ParseError;

/// Where the scanner is relative to quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    None,
    Single,
    Double,
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Split `command` into shell words. An empty or all-blank string yields no tokens.
///
/// Inside double quotes a backslash only escapes `"` and `\`; before any
/// other character it stays literal. Inside single quotes it is always literal.
pub fn tokenize(command: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut word = String::new();
    // An empty quoted string ('' or "") still makes a word.
    let mut in_word = false;
    let mut quoting = Quoting::None;
    let mut chars = command.chars();

    while let Some(ch) = chars.next() {
        match quoting {
            Quoting::None => match ch {
                c if is_blank(c) => {
                    if in_word {
                        words.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                '\'' => {
                    quoting = Quoting::Single;
                    in_word = true;
                }
                '"' => {
                    quoting = Quoting::Double;
                    in_word = true;
                }
                '\\' => {
                    let Some(next) = chars.next() else {
                        return Err(ParseError::TrailingEscape {
                            command: command.to_string(),
                        });
                    };
                    word.push(next);
                    in_word = true;
                }
                c => {
                    word.push(c);
                    in_word = true;
                }
            },
            Quoting::Single => match ch {
                '\'' => quoting = Quoting::None,
                c => word.push(c),
            },
            Quoting::Double => match ch {
                '"' => quoting = Quoting::None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => word.push(next),
                    Some(next) => {
                        word.push('\\');
                        word.push(next);
                    }
                    None => break,
                },
                c => word.push(c),
            },
        }
    }

    match quoting {
        Quoting::Single => Err(ParseError::UnterminatedQuote {
            quote: '\'',
            command: command.to_string(),
        }),
        Quoting::Double => Err(ParseError::UnterminatedQuote {
            quote: '"',
            command: command.to_string(),
        }),
        Quoting::None => {
            if in_word {
                words.push(word);
            }
            Ok(words)
        }
    }
}
