//! FILENAME: core/nakamoto/src/coefficient.rs
//! PURPOSE: Nakamoto coefficient calculation over a validator set.
//!
//! The coefficient is the smallest number of validators whose combined
//! voting power reaches THRESHOLD_PERCENT of the total. Validators are
//! taken largest first.

use log::debug;
use crate::error::NakamotoError;

/// Share of total voting power a colluding set must reach.
pub const THRESHOLD_PERCENT: u128 = 33;

/// Sums voting powers, failing on overflow.
pub fn total_voting_power(voting_powers: &[u128]) -> Result<u128, NakamotoError> {
    voting_powers
        .iter()
        .try_fold(0u128, |acc, vp| acc.checked_add(*vp))
        .ok_or(NakamotoError::VotingPowerOverflow)
}

fn reaches_threshold(cumulative: u128, total: u128) -> bool {
    match (cumulative.checked_mul(100), total.checked_mul(THRESHOLD_PERCENT)) {
        (Some(lhs), Some(rhs)) => lhs >= rhs,
        // Only reachable for totals near u128::MAX.
        _ => cumulative >= (total / 100) * THRESHOLD_PERCENT,
    }
}

/// Computes the Nakamoto coefficient of a validator set.
pub fn nakamoto_coefficient(voting_powers: &[u128]) -> Result<u32, NakamotoError> {
    let total = total_voting_power(voting_powers)?;
    if total == 0 {
        return Err(NakamotoError::NoVotingPower);
    }

    let mut sorted = voting_powers.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut cumulative = 0u128;
    let mut count = 0usize;
    for vp in sorted {
        // Bounded by total, which already fit.
        cumulative += vp;
        count += 1;
        if reaches_threshold(cumulative, total) {
            break;
        }
    }

    debug!(target: "CHAIN", "coefficient={} over {} validators", count, voting_powers.len());
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}
