//! FILENAME: core/nakamoto/src/provider.rs
//! PURPOSE: Record sources for the coefficient table and its column tree.

use grid_engine::{ColumnDef, Record};
use crate::state::ChainState;

pub const CHAIN_NAME: &str = "chainName";
pub const TOKEN_NAME: &str = "tokenName";
pub const CURR_VAL: &str = "currVal";
pub const PREV_VAL: &str = "prevVal";
pub const CHANGE_VAL: &str = "changeVal";

/// Anything that can hand the table a list of records.
pub trait RecordProvider {
    fn records(&self) -> Vec<Record>;
}

/// The built-in snapshot shown when no other data source is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProvider;

const STATIC_ROWS: [(&str, &str, i64, i64); 5] = [
    ("Binance", "BNB", 7, 7),
    ("Cosmos", "ATOM", 7, 7),
    ("Osmosis", "OSMO", 4, 4),
    ("Polygon", "MATIC", 2, 2),
    ("Mina", "MINA", 11, 11),
];

fn coefficient_record(chain: &str, token: &str, curr: i64, prev: i64) -> Record {
    Record::new()
        .with(CHAIN_NAME, chain)
        .with(TOKEN_NAME, token)
        .with(CURR_VAL, curr)
        .with(PREV_VAL, prev)
        .with(CHANGE_VAL, curr - prev)
}

impl RecordProvider for StaticProvider {
    fn records(&self) -> Vec<Record> {
        STATIC_ROWS
            .iter()
            .map(|&(chain, token, curr, prev)| coefficient_record(chain, token, curr, prev))
            .collect()
    }
}

impl RecordProvider for ChainState {
    fn records(&self) -> Vec<Record> {
        self.iter()
            .map(|(token, c)| {
                coefficient_record(
                    token.chain_name(),
                    token.symbol(),
                    i64::from(c.curr),
                    i64::from(c.prev),
                )
            })
            .collect()
    }
}

/// Name[Chain, Token] + Coefficient[Current Value, Previous Value, Change].
pub fn coefficient_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::group(
            "Name",
            vec![
                ColumnDef::leaf("Chain", CHAIN_NAME),
                ColumnDef::leaf("Token", TOKEN_NAME),
            ],
        ),
        ColumnDef::group(
            "Coefficient",
            vec![
                ColumnDef::leaf("Current Value", CURR_VAL),
                ColumnDef::leaf("Previous Value", PREV_VAL),
                ColumnDef::leaf("Change", CHANGE_VAL),
            ],
        ),
    ]
}
