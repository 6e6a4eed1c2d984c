mod commands;
mod console;
mod input;
mod output;
mod prompt;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::loan::LoanArgs;

/// Fixed-rate loan amortization schedules
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Fixed-rate loan amortization schedules",
    long_about = "Computes the fixed monthly payment of an amortizing loan and its full \
                  payment schedule. Without a subcommand, prompts for the principal, \
                  annual percentage rate and term, then prints the schedule."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for batch commands
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for loan terms and print the schedule (default)
    Interactive,
    /// Build the full period-by-period amortization schedule
    Schedule(LoanArgs),
    /// Calculate the monthly payment and lifetime totals
    Payment(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive);
    let result: Result<Option<Value>, Box<dyn std::error::Error>> = match command {
        Commands::Interactive => commands::interactive::run_interactive().map(|_| None),
        Commands::Schedule(args) => commands::loan::run_schedule(args).map(Some),
        Commands::Payment(args) => commands::loan::run_payment(args).map(Some),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(Some(value)) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Ok(None) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
