//! # Mathops CLI Application
//!
//! Command-line access to the same calc_core functions the REST API uses.
//! Every subcommand hands its raw arguments to calc_core's coercion and
//! dispatch, so `calc_cli square 5` and `GET /square/5` go through the
//! identical path.
//!
//! ```text
//! calc_cli square 5
//! calc_cli power 2 8
//! calc_cli factorial 5
//! calc_cli fibonacci 10
//! calc_cli prime 17
//! calc_cli stats 1 2 3 4 5
//! ```

mod render;

use std::process::ExitCode;

use calc_core::{dispatch, CalcResult, Operation, OperationRequest, OperationResult};
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Mathematical Operations CLI - direct access to business logic
#[derive(Parser)]
#[command(name = "calc_cli", version)]
#[command(about = "Mathematical Operations CLI - direct access to business logic", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the result as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate square of a number
    Square {
        /// Number to square
        #[arg(allow_negative_numbers = true)]
        number: String,
    },
    /// Calculate base^exponent
    Power {
        /// Base number
        #[arg(allow_negative_numbers = true)]
        base: String,
        /// Exponent
        #[arg(allow_negative_numbers = true)]
        exponent: String,
    },
    /// Calculate factorial
    Factorial {
        /// Number for factorial (must be non-negative integer)
        #[arg(allow_negative_numbers = true)]
        number: String,
    },
    /// Generate Fibonacci sequence
    Fibonacci {
        /// Number of Fibonacci numbers to generate
        #[arg(allow_negative_numbers = true)]
        count: String,
    },
    /// Check if number is prime
    Prime {
        /// Number to check for primality
        #[arg(allow_negative_numbers = true)]
        number: String,
    },
    /// Calculate statistics for numbers
    Stats {
        /// List of numbers for statistics
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
}

impl Commands {
    /// Split a subcommand into its operation and raw argument tokens.
    fn into_parts(self) -> (Operation, Vec<String>) {
        match self {
            Commands::Square { number } => (Operation::Square, vec![number]),
            Commands::Power { base, exponent } => (Operation::Power, vec![base, exponent]),
            Commands::Factorial { number } => (Operation::Factorial, vec![number]),
            Commands::Fibonacci { count } => (Operation::Fibonacci, vec![count]),
            Commands::Prime { number } => (Operation::IsPrime, vec![number]),
            Commands::Stats { numbers } => (Operation::CalculateStats, numbers),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_logging(cli.verbose);

    let (operation, args) = cli.command.into_parts();
    trace!(%operation, ?args, "Parsed command line");

    match run(operation, &args) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", render::render_result(&result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(%operation, code = e.error_code(), "Operation failed");
            eprintln!("{}", render::render_error(&e));
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(operation: Operation, args: &[String]) -> CalcResult<OperationResult> {
    let request = OperationRequest::from_args(operation, args)?;
    dispatch(&request)
}

/// Log to stderr so formatted results on stdout stay clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}
