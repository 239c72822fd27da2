pub mod renderer;
pub mod tokenizer;
pub mod validator;

use crate::Config;
use anyhow::Context;
use renderer::{render, CaseStyle};
use tokenizer::{tokenize_with, DelimiterPolicy};
use validator::{validate, CaseError, Input, ValidationPolicy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub policy: ValidationPolicy,
    pub delimiters: DelimiterPolicy,
}

impl ConvertOptions {
    pub fn lenient() -> Self {
        Self {
            policy: ValidationPolicy::Lenient,
            ..Default::default()
        }
    }
}

/// Convert `input` to `style`: validate, tokenize, render
pub fn convert<'a>(
    input: impl Into<Input<'a>>,
    style: CaseStyle,
    options: &ConvertOptions,
) -> Result<String, CaseError> {
    let text = validate(input.into(), options.policy)?;
    let tokens = tokenize_with(text, options.delimiters);
    Ok(render(&tokens, style))
}

/// Like [`convert`], but anything that is not a string becomes `""`
pub fn convert_lenient<'a>(input: impl Into<Input<'a>>, style: CaseStyle) -> String {
    let text = validate(input.into(), ValidationPolicy::Lenient).unwrap_or_default();
    render(&tokenize_with(text, DelimiterPolicy::Standard), style)
}

/// Whether `text` is already written in `style`
pub fn is_case(text: &str, style: CaseStyle, options: &ConvertOptions) -> bool {
    render(&tokenize_with(text, options.delimiters), style) == text
}

/// Outcome of converting one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub result: Result<String, CaseError>,
    /// The input was a string already written in the target style
    pub in_style: bool,
}

impl Conversion {
    pub fn unchanged(&self) -> bool {
        self.in_style
    }
}

/// A target style bundled with the options it is applied with
pub struct Converter {
    style: CaseStyle,
    options: ConvertOptions,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.style,
            options: ConvertOptions {
                policy: config.policy,
                delimiters: config.delimiters,
            },
        }
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn convert<'a>(
        &self,
        input: impl Into<Input<'a>>,
    ) -> Result<String, CaseError> {
        convert(input, self.style, &self.options)
    }

    /// Convert a raw line, optionally decoding it as JSON first
    pub fn convert_line(&self, line: &str, json_input: bool) -> anyhow::Result<Conversion> {
        let value: serde_json::Value;
        let input = if json_input {
            value = serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON input: {}", line))?;
            Input::Json(&value)
        } else {
            Input::Text(line)
        };

        let result = self.convert(input);
        let in_style = match (input.as_str(), &result) {
            (Some(text), Ok(_)) => is_case(text, self.style, &self.options),
            _ => false,
        };

        Ok(Conversion {
            input: line.to_string(),
            result,
            in_style,
        })
    }
}
