use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use radix_lexer::{
    lexer::lexer::{tokenize, tokenize_recovering},
    render_error,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CANNED_INPUTS: [&str; 4] = [
    "(110 * 10) + 1",
    "(5 + 3) * 2",
    "(102 + 1)",
    "(ABC - 9) / 3",
];

/// Classify text into binary, octal and hexadecimal literals, identifiers,
/// operators and parentheses.
///
/// Without inputs, a set of sample expressions is analysed.
#[derive(Parser, Debug)]
#[command(name = "radix-lexer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Inputs to tokenize
    inputs: Vec<String>,

    /// Tokenize the contents of a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Keep scanning after an unrecognised character and report every error
    #[arg(short, long)]
    recover: bool,

    /// Enable debug logging
    #[arg(short, long, env = "RADIX_LEXER_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut inputs = cli.inputs;
    if let Some(path) = &cli.file {
        let contents =
            read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push(contents);
    }
    if inputs.is_empty() {
        info!("no input given, running sample expressions");
        inputs = CANNED_INPUTS.iter().map(|input| input.to_string()).collect();
    }

    let mut rejected = 0;
    for input in &inputs {
        if !analyse(input, cli.recover) {
            rejected += 1;
        }
    }

    info!(inputs = inputs.len(), rejected, "done");

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Prints the tokens of `input`, returning whether it was accepted.
fn analyse(input: &str, recover: bool) -> bool {
    println!("\nInput: {}", input);

    if recover {
        let (tokens, errors) = tokenize_recovering(input);
        for token in &tokens {
            println!("{}", token);
        }
        for error in &errors {
            println!("{}", render_error(input, error));
        }

        if errors.is_empty() {
            println!("Output: Accepted");
        } else {
            println!("Output: {} lexical error(s)", errors.len());
        }
        return errors.is_empty();
    }

    match tokenize(input) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", token);
            }
            println!("Output: Accepted");
            true
        }
        Err(error) => {
            println!("Output: {}", error);
            println!("{}", render_error(input, &error));
            false
        }
    }
}
