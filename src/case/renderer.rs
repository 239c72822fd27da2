use crate::case::tokenizer::{boundary_armed, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    #[default]
    Camel,
    Pascal,
    Kebab,
    Snake,
    ScreamingSnake,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::ScreamingSnake,
    ];

    /// How `user name` looks in this style
    pub fn example(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "userName",
            CaseStyle::Pascal => "UserName",
            CaseStyle::Kebab => "user-name",
            CaseStyle::Snake => "user_name",
            CaseStyle::ScreamingSnake => "USER_NAME",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "camel" | "camelcase" | "camel-case" => Ok(CaseStyle::Camel),
            "pascal" | "pascalcase" | "pascal-case" => Ok(CaseStyle::Pascal),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "snake" | "snake-case" => Ok(CaseStyle::Snake),
            "screaming-snake" | "screaming-snake-case" | "constant" => {
                Ok(CaseStyle::ScreamingSnake)
            }
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Pascal => write!(f, "pascal"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Snake => write!(f, "snake"),
            CaseStyle::ScreamingSnake => write!(f, "screaming-snake"),
        }
    }
}

/// Join tokens into a single string in the given style.
///
/// camelCase and PascalCase only capitalize a token where the capital reads
/// back as a word boundary; otherwise the token is glued on in lowercase.
/// `a b c` therefore renders as `aBc`, not `aBC`, since `BC` would read back
/// as one word.
pub fn render(tokens: &[Token], style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => join_capitalized(tokens, false),
        CaseStyle::Pascal => join_capitalized(tokens, true),
        CaseStyle::Kebab => join_lower(tokens, "-"),
        CaseStyle::Snake => join_lower(tokens, "_"),
        CaseStyle::ScreamingSnake => tokens
            .iter()
            .map(|t| t.as_str().to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
    }
}

fn join_capitalized(tokens: &[Token], capitalize_first: bool) -> String {
    let mut out = String::new();
    let mut armed = false;
    for (i, token) in tokens.iter().enumerate() {
        let word = token.as_str();
        let starts_lower = word.starts_with(|c: char| c.is_ascii_lowercase());
        let piece = if (i == 0 && capitalize_first) || (i > 0 && armed && starts_lower) {
            capitalize(word)
        } else {
            word.to_string()
        };
        armed = piece.chars().fold(armed, boundary_armed);
        out.push_str(&piece);
    }
    out
}

fn join_lower(tokens: &[Token], sep: &str) -> String {
    tokens
        .iter()
        .map(|t| t.as_str().to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Uppercase the first grapheme, keep the rest untouched
fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::tokenizer::tokenize;

    #[test]
    fn test_camel_rendering() {
        assert_eq!(render(&tokenize("hello world foo"), CaseStyle::Camel), "helloWorldFoo");
        assert_eq!(render(&tokenize("user 2 name"), CaseStyle::Camel), "user2Name");
    }

    #[test]
    fn test_single_letter_tokens_read_back() {
        assert_eq!(render(&tokenize("a_b_c"), CaseStyle::Camel), "aBc");
        assert_eq!(render(&tokenize("x_a_b"), CaseStyle::Camel), "xAb");
        assert_eq!(render(&tokenize("a_b"), CaseStyle::Pascal), "Ab");
        assert_eq!(render(&tokenize("a_b_c_d"), CaseStyle::Camel), "aBcD");
    }

    #[test]
    fn test_tokens_that_cannot_start_a_word() {
        assert_eq!(render(&tokenize("x_éa"), CaseStyle::Camel), "xéa");
        assert_eq!(render(&tokenize("éa_b"), CaseStyle::Pascal), "ÉaB");
        assert_eq!(render(&tokenize("x@ y"), CaseStyle::Camel), "x@y");
    }

    #[test]
    fn test_separated_rendering() {
        let tokens = tokenize("first name");
        assert_eq!(render(&tokens, CaseStyle::Kebab), "first-name");
        assert_eq!(render(&tokens, CaseStyle::Snake), "first_name");
        assert_eq!(render(&tokens, CaseStyle::ScreamingSnake), "FIRST_NAME");
        assert_eq!(render(&tokens, CaseStyle::Pascal), "FirstName");
    }

    #[test]
    fn test_empty_tokens_render_empty() {
        for style in CaseStyle::ALL {
            assert_eq!(render(&[], style), "");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("word"), "Word");
        assert_eq!(capitalize("2nd"), "2nd");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("camelCase".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("kebab-case".parse::<CaseStyle>(), Ok(CaseStyle::Kebab));
        assert_eq!("snake_case".parse::<CaseStyle>(), Ok(CaseStyle::Snake));
        assert_eq!("PascalCase".parse::<CaseStyle>(), Ok(CaseStyle::Pascal));
        assert_eq!(
            "SCREAMING_SNAKE_CASE".parse::<CaseStyle>(),
            Ok(CaseStyle::ScreamingSnake)
        );
        assert!("title".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for style in CaseStyle::ALL {
            assert_eq!(style.to_string().parse::<CaseStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_examples_match_rendering() {
        let tokens = tokenize("user name");
        for style in CaseStyle::ALL {
            assert_eq!(render(&tokens, style), style.example());
        }
    }
}
