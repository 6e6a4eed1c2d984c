use clap::Args;
use serde_json::Value;
use tracing::info;

use amortization_core::report;
use amortization_core::LoanInput;

use crate::input;

/// Loan terms, from flags, a JSON file, or a JSON document on stdin
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<f64>,

    /// Annual percentage rate, e.g. 4.75 for 4.75%
    #[arg(long, alias = "apr")]
    pub rate: Option<f64>,

    /// Term in whole years
    #[arg(long)]
    pub years: Option<i64>,
}

fn resolve_input(args: &LoanArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if args.principal.is_none() && args.rate.is_none() && args.years.is_none() {
        if let Some(doc) = input::stdin::read_stdin()? {
            return Ok(doc);
        }
    }
    Ok(LoanInput {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
        term_years: args.years.ok_or("--years is required (or provide --input)")?,
    })
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_input(&args)?;
    info!(?loan, "building amortization schedule");
    let result = report::build_schedule(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payment(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_input(&args)?;
    info!(?loan, "summarising loan");
    let result = report::summarize(&loan)?;
    Ok(serde_json::to_value(result)?)
}
