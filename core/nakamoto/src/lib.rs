//! FILENAME: core/nakamoto/src/lib.rs
//! Nakamoto coefficient domain for the table.
//!
//! Layers:
//! - `chain`: Supported tokens and their chain names
//! - `coefficient`: Voting-power math
//! - `state`: Current/previous coefficient per chain
//! - `provider`: Record sources and the standard column tree

pub mod error;
pub mod chain;
pub mod coefficient;
pub mod state;
pub mod provider;

pub use error::NakamotoError;
pub use chain::Token;
pub use coefficient::{nakamoto_coefficient, total_voting_power, THRESHOLD_PERCENT};
pub use state::{ChainCoefficient, ChainState};
pub use provider::{coefficient_columns, RecordProvider, StaticProvider};

#[cfg(test)]
mod tests;
