//! FILENAME: core/nakamoto/src/state.rs
//! PURPOSE: Current and previous coefficient per chain.
//! CONTEXT: A refresh rolls every chain's current value into its previous
//! value. Chains without a fresh value are dropped from the new state.

use std::collections::BTreeMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::chain::Token;

/// Coefficient values for one chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCoefficient {
    pub prev: u32,
    pub curr: u32,
}

impl ChainCoefficient {
    pub fn new(prev: u32, curr: u32) -> Self {
        ChainCoefficient { prev, curr }
    }

    /// Signed change since the previous value.
    pub fn change(&self) -> i64 {
        i64::from(self.curr) - i64::from(self.prev)
    }
}

/// Coefficients for every tracked chain, ordered by token.
/// Serializes as a plain map: `{"ATOM": {"prev": 6, "curr": 7}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainState {
    chains: BTreeMap<Token, ChainCoefficient>,
}

impl ChainState {
    pub fn new() -> Self {
        ChainState::default()
    }

    pub fn insert(&mut self, token: Token, coefficient: ChainCoefficient) {
        self.chains.insert(token, coefficient);
    }

    pub fn get(&self, token: Token) -> Option<&ChainCoefficient> {
        self.chains.get(&token)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &ChainCoefficient)> {
        self.chains.iter().map(|(t, c)| (*t, c))
    }

    /// Builds the next state from freshly calculated values.
    ///
    /// Each chain's `prev` becomes this state's `curr` (0 for chains not
    /// tracked before).
    pub fn refresh(&self, fresh: &BTreeMap<Token, u32>) -> ChainState {
        let mut next = ChainState::new();

        for token in Token::ALL {
            let Some(&curr) = fresh.get(&token) else {
                warn!(target: "CHAIN", "no fresh coefficient for {} ({}), skipping", token.chain_name(), token);
                continue;
            };
            let prev = self.get(token).map(|c| c.curr).unwrap_or(0);
            next.insert(token, ChainCoefficient::new(prev, curr));
        }

        info!(target: "CHAIN", "refreshed {} of {} chains", next.len(), Token::ALL.len());
        next
    }
}

impl FromIterator<(Token, ChainCoefficient)> for ChainState {
    fn from_iter<I: IntoIterator<Item = (Token, ChainCoefficient)>>(iter: I) -> Self {
        ChainState {
            chains: iter.into_iter().collect(),
        }
    }
}
