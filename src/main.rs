use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::Overrides;
use recase::{CaseStyle, Config, Converter, DelimiterPolicy};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers between camelCase, kebab-case and friends", long_about = None)]
struct Cli {
    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, pascal, kebab, snake, screaming-snake)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Treat non-string input as empty instead of failing
    #[arg(long)]
    lenient: bool,

    /// Which characters separate words (standard, non-alphanumeric)
    #[arg(long)]
    delimiters: Option<DelimiterPolicy>,

    /// Parse every input as a JSON value
    #[arg(long)]
    json_input: bool,

    /// Report inputs that are not already in the target style
    #[arg(long)]
    check: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs fail
    #[arg(long)]
    no_fail: bool,

    /// Config file to use instead of ./.recase.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported case styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Some(Commands::Styles) = cli.command {
        output::print_styles(!cli.no_color);
        return Ok(());
    }

    let config = Config::load(Overrides {
        config_file: cli.config.clone(),
        style: cli.style,
        lenient: cli.lenient,
        delimiters: cli.delimiters,
    })?;
    let converter = Converter::new(&config);

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    let conversions = inputs
        .iter()
        .map(|line| converter.convert_line(line, cli.json_input))
        .collect::<Result<Vec<_>>>()?;

    let failed = if cli.check {
        let mismatched = conversions.iter().filter(|c| !c.unchanged()).count();
        output::print_check_report(converter.style(), &conversions, !cli.no_color, &cli.format)?;
        if let OutputFormat::Text = cli.format {
            output::print_check_summary(
                converter.style(),
                mismatched,
                conversions.len(),
                !cli.no_color,
            );
        }
        mismatched
    } else {
        output::print_conversions(converter.style(), &conversions, !cli.no_color, &cli.format)?;
        conversions.iter().filter(|c| c.result.is_err()).count()
    };

    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
