use crate::case::renderer::CaseStyle;
use crate::case::Conversion;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonConversion {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub unchanged: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput {
    pub style: String,
    pub total: usize,
    pub failed: usize,
    pub conversions: Vec<JsonConversion>,
}

impl JsonOutput {
    pub fn new(style: CaseStyle, conversions: &[Conversion]) -> Self {
        let conversions: Vec<JsonConversion> = conversions
            .iter()
            .map(|c| JsonConversion {
                input: c.input.clone(),
                output: c.result.as_ref().ok().cloned(),
                error: c.result.as_ref().err().map(|e| e.to_string()),
                unchanged: c.unchanged(),
            })
            .collect();

        Self {
            style: style.to_string(),
            total: conversions.len(),
            failed: conversions.iter().filter(|c| c.error.is_some()).count(),
            conversions,
        }
    }
}

pub fn print_conversions(
    style: CaseStyle,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(conversions, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json(&JsonOutput::new(style, conversions)),
    }
}

fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        match &conversion.result {
            Ok(output) => println!("{}", output),
            Err(e) if colored_output => eprintln!(
                "{} {}: {}",
                "Error:".red().bold(),
                conversion.input.bold(),
                e
            ),
            Err(e) => eprintln!("Error: {}: {}", conversion.input, e),
        }
    }
}

/// Report inputs that are not already in `style`
pub fn print_check_report(
    style: CaseStyle,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    if let OutputFormat::Json = format {
        return print_json(&JsonOutput::new(style, conversions));
    }

    for conversion in conversions.iter().filter(|c| !c.unchanged()) {
        match &conversion.result {
            Ok(expected) if colored_output => println!(
                "  {} {} {}",
                conversion.input.red().bold(),
                "→".dimmed(),
                expected.green()
            ),
            Ok(expected) => println!("  {} → {}", conversion.input, expected),
            Err(e) if colored_output => {
                println!("  {} {}", conversion.input.red().bold(), e.to_string().dimmed())
            }
            Err(e) => println!("  {} {}", conversion.input, e),
        }
    }

    Ok(())
}

fn print_json(output: &JsonOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

pub fn print_check_summary(style: CaseStyle, mismatched: usize, total: usize, colored: bool) {
    println!();
    if mismatched == 0 {
        let message = format!("✓ All {} in {} case", plural(total, "input"), style);
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else if colored {
        println!(
            "{} {} of {} not in {} case",
            "✗".red().bold(),
            mismatched.to_string().red().bold(),
            plural(total, "input"),
            style
        );
    } else {
        println!(
            "✗ {} of {} not in {} case",
            mismatched,
            plural(total, "input"),
            style
        );
    }
}

pub fn print_styles(colored: bool) {
    for style in CaseStyle::ALL {
        if colored {
            println!("  {:<16} {}", style.to_string().bold(), style.example().dimmed());
        } else {
            println!("  {:<16} {}", style, style.example());
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
