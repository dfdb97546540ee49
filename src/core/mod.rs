pub mod calculator;
pub mod ledger;
pub mod log;

pub use ledger::TimeLedger;
