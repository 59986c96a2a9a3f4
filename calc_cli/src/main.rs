//! # SimpleCalc CLI
//!
//! Command-line front end for `calc_core`. Prints the response record of a
//! single calculation as JSON on stdout.
//!
//! ```text
//! simplecalc add 4 2        # {"operands": {"num1": 4, "num2": 2}, "results": {"sum": 6}}
//! simplecalc div 6 0        # record carries results.error_message
//! simplecalc --demo         # same as `simplecalc add 4 2`
//! simplecalc                # prompts for operator and operands
//! ```

mod config;
mod logging;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use calc_core::{CalcError, Calculator, Operand, Response};
use clap::Parser;
use serde_json::Value;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "simplecalc", version, about = "Integer calculator: add, sub, mul, div", long_about = None)]
struct Cli {
    /// Operator: add, sub, mul or div (prompted for when omitted)
    #[arg(value_name = "OPERATOR", conflicts_with = "demo")]
    operator: Option<String>,

    /// First operand (JSON value; bare words are taken as strings)
    #[arg(value_name = "NUM1", allow_negative_numbers = true)]
    num1: Option<String>,

    /// Second operand
    #[arg(value_name = "NUM2", allow_negative_numbers = true)]
    num2: Option<String>,

    /// Run the built-in demo (add 4 2)
    #[arg(long)]
    demo: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH", env = "SIMPLECALC_CONFIG")]
    config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Print the JSON output on one line
    #[arg(long)]
    compact: bool,

    /// Exit with status 2 when the record carries an error_message
    #[arg(long)]
    fail_on_error: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Unable to determine working directory")?;
    let config = CliConfig::load(cli.config.as_deref(), &cwd)?;
    logging::init(&config.logging);

    let pretty = if cli.pretty {
        true
    } else if cli.compact {
        false
    } else {
        config.output.pretty
    };

    let (operator, num1, num2) = if cli.demo {
        ("add".to_string(), "4".to_string(), "2".to_string())
    } else {
        let operator = value_or_prompt(cli.operator, "Operator (add, sub, mul, div): ")?;
        let num1 = value_or_prompt(cli.num1, "num1: ")?;
        let num2 = value_or_prompt(cli.num2, "num2: ")?;
        (operator, num1, num2)
    };

    let calculator = Calculator::new(&operator)?;
    let response = calculator.execute(parse_operand(&num1), parse_operand(&num2));
    tracing::info!(operator = %calculator.operator(), error = response.is_error(), "calculation complete");

    print_response(&response, pretty)?;

    if cli.fail_on_error && response.is_error() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

/// Command-line text as an operand: integer text exactly as written, else
/// JSON when it parses, otherwise a string.
fn parse_operand(raw: &str) -> Operand {
    let text = raw.trim();
    Operand::from_integer_literal(text).unwrap_or_else(|| {
        serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(raw.to_string()))
            .into()
    })
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt_line(prompt),
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Unexpected end of input while waiting for '{}'", prompt.trim_end());
    }
    Ok(input.trim().to_string())
}

fn print_response(response: &Response, pretty: bool) -> Result<()> {
    let json = if pretty {
        response.to_json_pretty()?
    } else {
        response.to_json()?
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match writeln!(handle, "{}", json) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("Failed to write response"),
    }
}
