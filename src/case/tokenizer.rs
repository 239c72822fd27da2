use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref STANDARD_DELIMITERS: Regex = Regex::new(r"[\s_.\-]+").unwrap();
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// A single lowercase word extracted from an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which characters count as word boundaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelimiterPolicy {
    /// Whitespace, underscore, hyphen and dot
    #[default]
    Standard,
    /// Anything that is not a letter or a digit
    NonAlphanumeric,
}

impl DelimiterPolicy {
    fn pattern(&self) -> &'static Regex {
        match self {
            DelimiterPolicy::Standard => &*STANDARD_DELIMITERS,
            DelimiterPolicy::NonAlphanumeric => &*NON_ALPHANUMERIC,
        }
    }
}

impl FromStr for DelimiterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(DelimiterPolicy::Standard),
            "non-alphanumeric" | "non_alphanumeric" | "nonalphanumeric" => {
                Ok(DelimiterPolicy::NonAlphanumeric)
            }
            _ => Err(format!("Unknown delimiter policy: {}", s)),
        }
    }
}

impl fmt::Display for DelimiterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterPolicy::Standard => write!(f, "standard"),
            DelimiterPolicy::NonAlphanumeric => write!(f, "non-alphanumeric"),
        }
    }
}

/// Whether an uppercase letter following `ch` starts a new word.
///
/// `armed` is the answer for the text before `ch`. Lowercase letters arm the
/// boundary, digits carry over whatever preceded them, everything else
/// disarms it.
pub(crate) fn boundary_armed(armed: bool, ch: char) -> bool {
    if ch.is_ascii_lowercase() {
        true
    } else if ch.is_ascii_digit() {
        armed
    } else {
        false
    }
}

// A space is a delimiter under every policy, so it doubles as the marker
fn mark_camel_boundaries(text: &str) -> String {
    let mut marked = String::with_capacity(text.len() + 8);
    let mut armed = false;
    for ch in text.chars() {
        if armed && ch.is_ascii_uppercase() {
            marked.push(' ');
        }
        marked.push(ch);
        armed = boundary_armed(armed, ch);
    }
    marked
}

/// Split `text` into tokens using the standard delimiter set
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, DelimiterPolicy::Standard)
}

/// Split `text` into lowercase tokens.
///
/// Word boundaries are delimiter runs (as selected by `policy`) and every
/// place where a lowercase letter, or digits following a lowercase letter,
/// meet an uppercase letter. Digits never start a token on their own, so
/// `user2Name` yields `user2` and `name` while `A1B` stays one token. Runs
/// of capitals stay together: `HTTPServer` is a single token.
///
/// Case boundaries are ASCII only. `xÉa` is one token even though `É` is
/// uppercase; non-ASCII letters are only lowercased.
pub fn tokenize_with(text: &str, policy: DelimiterPolicy) -> Vec<Token> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let marked = mark_camel_boundaries(text);

    policy
        .pattern()
        .split(&marked)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Token(piece.to_lowercase()))
        .collect()
}
