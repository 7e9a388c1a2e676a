//! FILENAME: core/nakamoto/src/tests.rs
//! PURPOSE: Consolidated unit tests for the nakamoto crate.

use std::collections::BTreeMap;
use grid_engine::{render_grid, resolve, CellValue, FieldValue};
use crate::chain::Token;
use crate::error::NakamotoError;
use crate::provider::{coefficient_columns, RecordProvider, StaticProvider};
use crate::state::{ChainCoefficient, ChainState};

// ========================================
// TOKENS
// ========================================

#[test]
fn test_token_catalogue_sorted_and_complete() {
    assert_eq!(Token::ALL.len(), 25);
    let symbols: Vec<&str> = Token::ALL.iter().map(|t| t.symbol()).collect();
    let mut sorted = symbols.clone();
    sorted.sort_unstable();
    assert_eq!(symbols, sorted);
}

#[test]
fn test_token_chain_names() {
    assert_eq!(Token::Atom.chain_name(), "Cosmos");
    assert_eq!(Token::Bnb.chain_name(), "BNB Smart Chain");
    assert_eq!(Token::Rune.chain_name(), "Thorchain");
    assert_eq!(Token::Tia.chain_name(), "Celestia");
}

#[test]
fn test_token_parse() {
    assert_eq!("MATIC".parse::<Token>(), Ok(Token::Matic));
    assert_eq!(" osmo ".parse::<Token>(), Ok(Token::Osmo));
    assert_eq!(
        "LUNA".parse::<Token>(),
        Err(NakamotoError::UnknownToken("LUNA".to_string()))
    );
    for token in Token::ALL {
        assert_eq!(token.to_string().parse::<Token>(), Ok(token));
    }
}

// ========================================
// CHAIN STATE
// ========================================

#[test]
fn test_change_is_signed() {
    assert_eq!(ChainCoefficient::new(7, 5).change(), -2);
    assert_eq!(ChainCoefficient::new(4, 9).change(), 5);
    assert_eq!(ChainCoefficient::new(11, 11).change(), 0);
}

#[test]
fn test_refresh_rolls_current_into_previous() {
    let state: ChainState = [
        (Token::Atom, ChainCoefficient::new(6, 7)),
        (Token::Mina, ChainCoefficient::new(11, 11)),
    ]
    .into_iter()
    .collect();

    let fresh: BTreeMap<Token, u32> = [(Token::Atom, 8), (Token::Mina, 10), (Token::Sol, 19)]
        .into_iter()
        .collect();
    let next = state.refresh(&fresh);

    assert_eq!(next.len(), 3);
    assert_eq!(next.get(Token::Atom), Some(&ChainCoefficient::new(7, 8)));
    assert_eq!(next.get(Token::Mina), Some(&ChainCoefficient::new(11, 10)));
    // Not tracked before: previous value starts at zero.
    assert_eq!(next.get(Token::Sol), Some(&ChainCoefficient::new(0, 19)));
}

#[test]
fn test_refresh_drops_chains_without_fresh_value() {
    let state: ChainState = [(Token::Dot, ChainCoefficient::new(90, 92))].into_iter().collect();
    let next = state.refresh(&BTreeMap::new());
    assert!(next.is_empty());
}

// ========================================
// PROVIDERS
// ========================================

#[test]
fn test_static_provider_rows() {
    let records = StaticProvider.records();
    assert_eq!(records.len(), 5);

    let names: Vec<_> = records.iter().map(|r| r.get("chainName").cloned()).collect();
    assert_eq!(
        names,
        ["Binance", "Cosmos", "Osmosis", "Polygon", "Mina"]
            .iter()
            .map(|n| Some(FieldValue::from(*n)))
            .collect::<Vec<_>>()
    );
    assert_eq!(records[4].get("currVal"), Some(&FieldValue::Integer(11)));
    assert!(records.iter().all(|r| r.get("changeVal") == Some(&FieldValue::Integer(0))));
}

#[test]
fn test_chain_state_records_in_token_order() {
    let state: ChainState = [
        (Token::Sol, ChainCoefficient::new(20, 19)),
        (Token::Ada, ChainCoefficient::new(24, 25)),
    ]
    .into_iter()
    .collect();
    let records = state.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("tokenName"), Some(&FieldValue::from("ADA")));
    assert_eq!(records[0].get("chainName"), Some(&FieldValue::from("Cardano")));
    assert_eq!(records[0].get("changeVal"), Some(&FieldValue::Integer(1)));
    assert_eq!(records[1].get("changeVal"), Some(&FieldValue::Integer(-1)));
}

#[test]
fn test_coefficient_columns_resolve() {
    let schema = resolve(&coefficient_columns()).unwrap();
    assert_eq!(
        schema.leaf_accessors,
        vec!["chainName", "tokenName", "currVal", "prevVal", "changeVal"]
    );
    assert_eq!(schema.header_rows[0].spans(), vec![2, 3]);
}

#[test]
fn test_static_table_renders() {
    let view = render_grid(&coefficient_columns(), &StaticProvider.records()).unwrap();
    assert_eq!(view.row_count(), 5);
    assert_eq!(view.get_cell(3, 1).map(|c| c.value.clone()), Some(CellValue::text("MATIC")));
    assert_eq!(view.get_cell(3, 2).map(|c| c.formatted_value.as_str()), Some("2"));
}
