pub mod interactive;
pub mod loan;
