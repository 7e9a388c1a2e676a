//! FILENAME: core/nakamoto/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NakamotoError {
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Validator set has no voting power")]
    NoVotingPower,

    #[error("Total voting power overflows u128")]
    VotingPowerOverflow,
}
