use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("expected a string, but received {received}")]
    InvalidInputKind { received: InputKind },
}

/// What kind of value was handed to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Missing,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Missing => "nothing",
            InputKind::Null => "null",
            InputKind::Bool => "boolean",
            InputKind::Number => "number",
            InputKind::String => "string",
            InputKind::Array => "array",
            InputKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// An input value of unknown shape.
///
/// Plain strings, JSON values and absent values all convert into this so a
/// single entry point can accept them.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Missing,
    Text(&'a str),
    Json(&'a Value),
}

impl<'a> Input<'a> {
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Missing => InputKind::Missing,
            Input::Text(_) => InputKind::String,
            Input::Json(value) => match value {
                Value::Null => InputKind::Null,
                Value::Bool(_) => InputKind::Bool,
                Value::Number(_) => InputKind::Number,
                Value::String(_) => InputKind::String,
                Value::Array(_) => InputKind::Array,
                Value::Object(_) => InputKind::Object,
            },
        }
    }

    /// The string carried by this input, if it is one
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Input::Text(text) => Some(text),
            Input::Json(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Json(value)
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Input::Missing, Input::Json)
    }
}

/// How non-string input is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject anything that is not a string
    #[default]
    Strict,
    /// Treat anything that is not a string as the empty string
    Lenient,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "lenient" => Ok(ValidationPolicy::Lenient),
            _ => Err(format!("Unknown validation policy: {}", s)),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Extract the string to convert, or apply `policy` to anything else
pub fn validate<'a>(input: Input<'a>, policy: ValidationPolicy) -> Result<&'a str, CaseError> {
    match (input.as_str(), policy) {
        (Some(text), _) => Ok(text),
        (None, ValidationPolicy::Lenient) => Ok(""),
        (None, ValidationPolicy::Strict) => Err(CaseError::InvalidInputKind {
            received: input.kind(),
        }),
    }
}
