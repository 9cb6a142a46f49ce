//! Shared fixtures for tests that stand a mock server in for the RPC node.
#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// JSON-RPC envelope around a successful `call_function` returning `value`.
pub fn call_function_response(value: &Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "dontcare",
        "result": {
            "result": serde_json::to_vec(value).unwrap(),
            "logs": [],
            "block_height": 171_000_000u64,
            "block_hash": "9MzuZrRPW1BGpFnZJUJg6SzCrixPpJDfjsNeUobRXsLe"
        }
    })
}

pub fn view_account_response(amount: &str, locked: &str, storage_usage: u64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "dontcare",
        "result": {
            "amount": amount,
            "locked": locked,
            "code_hash": "11111111111111111111111111111111",
            "storage_usage": storage_usage,
            "storage_paid_at": 0,
            "block_height": 171_000_000u64,
            "block_hash": "9MzuZrRPW1BGpFnZJUJg6SzCrixPpJDfjsNeUobRXsLe"
        }
    })
}

pub fn markets_fixture() -> Value {
    json!([
        {
            "id": 0,
            "base": { "ticker": "wNEAR", "decimal": 24, "address": "wrap.testnet" },
            "fee": 30,
            "quote": { "ticker": "USDC", "decimal": 6, "address": "usdc.spin_swap.testnet" }
        },
        {
            "id": 1,
            "base": { "ticker": "USDT", "decimal": 6, "address": "usdt.spin_swap.testnet" },
            "fee": 10,
            "quote": { "ticker": "USDC", "decimal": 6, "address": "usdc.spin_swap.testnet" }
        }
    ])
}

/// Bids 10 and 20, asks 30 and 15, quantity 1 each, in raw contract units.
pub fn market_fixture() -> Value {
    let raw = |v: u128| (v * 4 * 100_000_000_000_000_000_000u128).to_string();
    json!({
        "ask_orders": [
            { "price": raw(30), "quantity": raw(1) },
            { "price": raw(15), "quantity": raw(1) }
        ],
        "bid_orders": [
            { "price": raw(10), "quantity": raw(1) },
            { "price": raw(20), "quantity": raw(1) }
        ]
    })
}
