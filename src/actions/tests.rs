use serde_json::json;

use super::*;
use crate::config::VmConfig;

fn vm() -> VmClient {
    VmClient::new(&VmConfig::default()).expect("default vm config")
}

#[test]
fn transfer_converts_value_to_native_units() {
    let action = Action::transfer(&vm(), "0xA", "0xT", "10").expect("transfer action");
    assert_eq!(action.action_name(), "TransferToken");
    assert_eq!(
        action.to_value().unwrap(),
        json!({
            "actionName": "TransferToken",
            "data": { "to": "0xA", "tokenAddress": "0xT", "value": "10000000000" }
        })
    );
}

#[test]
fn transfer_propagates_unit_errors() {
    let err = Action::transfer(&vm(), "0xA", "0xT", "ten").unwrap_err();
    assert_eq!(err, UnitError::Malformed("ten".to_string()));
}

#[test]
fn balance_and_info_pass_addresses_through() {
    assert_eq!(
        Action::token_balance("0xT", "0xA").to_value().unwrap(),
        json!({
            "actionName": "GetTokenAccountBalance",
            "data": { "token": "0xT", "account": "0xA" }
        })
    );
    assert_eq!(
        Action::token_info("0xT").to_value().unwrap(),
        json!({ "actionName": "GetTokenInfo", "data": { "token": "0xT" } })
    );
}

#[test]
fn create_token_base64_encodes_text_fields() {
    let action = Action::create_token("Coin", "COIN", "meta");
    assert_eq!(
        action.to_value().unwrap(),
        json!({
            "actionName": "CreateToken",
            "data": { "name": "Q29pbg==", "symbol": "Q09JTg==", "metadata": "bWV0YQ==" }
        })
    );
}

#[test]
fn mint_keeps_field_order_and_converts_value() {
    let action = Action::mint_token(&vm(), "0xA", "1.5", "0xT").expect("mint action");
    assert_eq!(
        action,
        Action::MintToken(MintToken {
            to: "0xA".to_string(),
            value: 1_500_000_000,
            token: "0xT".to_string(),
        })
    );
    assert_eq!(
        action.to_value().unwrap()["data"]["value"],
        json!("1500000000")
    );
}

#[test]
fn liquidity_actions_keep_raw_numbers() {
    assert_eq!(
        Action::create_liquidity_pool(1, "0xX", "0xY", 30).to_value().unwrap(),
        json!({
            "actionName": "CreateLiquidityPool",
            "data": { "functionID": 1, "tokenX": "0xX", "tokenY": "0xY", "fee": 30 }
        })
    );
    assert_eq!(
        Action::add_liquidity(100, 200, "0xX", "0xY", "0xP").to_value().unwrap(),
        json!({
            "actionName": "AddLiquidity",
            "data": {
                "amountX": 100,
                "amountY": 200,
                "tokenX": "0xX",
                "tokenY": "0xY",
                "liquidityPool": "0xP"
            }
        })
    );
}

#[test]
fn parses_payload_from_json() {
    let raw = r#"{"actionName":"TransferToken","data":{"to":"0xA","tokenAddress":"0xT","value":"42"}}"#;
    let action: Action = serde_json::from_str(raw).expect("parse payload");
    assert_eq!(
        action,
        Action::TransferToken(TransferToken {
            to: "0xA".to_string(),
            token_address: "0xT".to_string(),
            value: 42,
        })
    );
}
