use tracing::{info, warn};

use amortization_core::AmortizationEngine;

use crate::console::{self, Console};
use crate::output::text;
use crate::prompt;

pub const IO_FAILURE: &str = "An I/O error was encountered. Terminating program.\n";
pub const UNPROCESSABLE: &str = "Unable to process the values entered. Terminating program.\n";

/// Prompt for loan terms on the process console and stream the schedule back.
pub fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut console = console::stdio_console();
    run_session(console.as_mut())
}

pub fn run_session(console: &mut dyn Console) -> Result<(), Box<dyn std::error::Error>> {
    let loan = match prompt::collect_loan_input(console) {
        Ok(loan) => loan,
        Err(e) => {
            // best effort, the console itself may be what failed
            let _ = console.print(IO_FAILURE).and_then(|_| console.flush());
            return Err(e.into());
        }
    };
    info!(?loan, "loan terms collected");

    let engine = match AmortizationEngine::from_raw(loan.principal, loan.annual_rate, loan.term_years) {
        Ok(engine) => engine,
        Err(e) => {
            warn!(error = %e, "engine construction failed");
            console.print(UNPROCESSABLE)?;
            console.flush()?;
            return Err(e.into());
        }
    };

    text::write_schedule(console, engine.schedule())?;
    Ok(())
}
