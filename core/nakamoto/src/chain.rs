//! FILENAME: core/nakamoto/src/chain.rs
//! PURPOSE: Supported chains, identified by their token symbol.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::NakamotoError;

/// Token symbol identifying a chain, e.g. ATOM for Cosmos.
/// Variants are kept in alphabetical order of their symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Ada,
    Algo,
    Apt,
    Atom,
    Avax,
    Bld,
    Bnb,
    Dot,
    Egld,
    Grt,
    Hbar,
    Juno,
    Matic,
    Mina,
    Near,
    Osmo,
    Pls,
    Regen,
    Ronin,
    Rune,
    Sei,
    Sol,
    Stars,
    Sui,
    Tia,
}

impl Token {
    pub const ALL: [Token; 25] = [
        Token::Ada,
        Token::Algo,
        Token::Apt,
        Token::Atom,
        Token::Avax,
        Token::Bld,
        Token::Bnb,
        Token::Dot,
        Token::Egld,
        Token::Grt,
        Token::Hbar,
        Token::Juno,
        Token::Matic,
        Token::Mina,
        Token::Near,
        Token::Osmo,
        Token::Pls,
        Token::Regen,
        Token::Ronin,
        Token::Rune,
        Token::Sei,
        Token::Sol,
        Token::Stars,
        Token::Sui,
        Token::Tia,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Token::Ada => "ADA",
            Token::Algo => "ALGO",
            Token::Apt => "APT",
            Token::Atom => "ATOM",
            Token::Avax => "AVAX",
            Token::Bld => "BLD",
            Token::Bnb => "BNB",
            Token::Dot => "DOT",
            Token::Egld => "EGLD",
            Token::Grt => "GRT",
            Token::Hbar => "HBAR",
            Token::Juno => "JUNO",
            Token::Matic => "MATIC",
            Token::Mina => "MINA",
            Token::Near => "NEAR",
            Token::Osmo => "OSMO",
            Token::Pls => "PLS",
            Token::Regen => "REGEN",
            Token::Ronin => "RONIN",
            Token::Rune => "RUNE",
            Token::Sei => "SEI",
            Token::Sol => "SOL",
            Token::Stars => "STARS",
            Token::Sui => "SUI",
            Token::Tia => "TIA",
        }
    }

    /// Human-readable chain name.
    pub fn chain_name(self) -> &'static str {
        match self {
            Token::Ada => "Cardano",
            Token::Algo => "Algo",
            Token::Apt => "Aptos",
            Token::Atom => "Cosmos",
            Token::Avax => "Avalanche",
            Token::Bld => "Agoric",
            Token::Bnb => "BNB Smart Chain",
            Token::Dot => "Polkadot",
            Token::Egld => "MultiversX",
            Token::Grt => "Graph Protocol",
            Token::Hbar => "Hedera",
            Token::Juno => "Juno",
            Token::Matic => "Polygon",
            Token::Mina => "Mina Protocol",
            Token::Near => "Near Protocol",
            Token::Osmo => "Osmosis",
            Token::Pls => "Pulsechain",
            Token::Regen => "Regen Network",
            Token::Ronin => "Ronin Chain",
            Token::Rune => "Thorchain",
            Token::Sei => "Sei",
            Token::Sol => "Solana",
            Token::Stars => "Stargaze",
            Token::Sui => "Sui Protocol",
            Token::Tia => "Celestia",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Token {
    type Err = NakamotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Token::ALL
            .iter()
            .copied()
            .find(|t| t.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NakamotoError::UnknownToken(s.to_string()))
    }
}
