use serde::{Deserialize, Serialize};

/// One side of a market pair as listed by the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenInfo {
    pub ticker: String,
    pub decimal: u8,
    pub address: String,
}

/// Entry returned by the contract's `markets` view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSummary {
    pub id: u64,
    pub base: TokenInfo,
    pub fee: u64,
    pub quote: TokenInfo,
}

impl MarketSummary {
    /// Selector label, e.g. `"USDT / USDC"`.
    pub fn pair(&self) -> String {
        format!("{} / {}", self.base.ticker, self.quote.ticker)
    }
}

/// A resting order exactly as the contract returns it.
///
/// Amounts stay as decimal integer strings until normalization; the contract
/// may encode them as JSON strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawOrder {
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub quantity: String,
}

impl RawOrder {
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

/// Order book snapshot from the contract's `view_market` view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Market {
    #[serde(default)]
    pub ask_orders: Vec<RawOrder>,
    #[serde(default)]
    pub bid_orders: Vec<RawOrder>,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    // arbitrary_precision keeps the exact digits of numbers beyond u64
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected integer string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_accepts_string_and_number_amounts() {
        let market: Market = serde_json::from_value(serde_json::json!({
            "ask_orders": [{ "price": "200000000000000000000000", "quantity": 7 }],
            "bid_orders": []
        }))
        .unwrap();
        assert_eq!(market.ask_orders[0].price, "200000000000000000000000");
        assert_eq!(market.ask_orders[0].quantity, "7");
        assert!(market.bid_orders.is_empty());
    }

    #[test]
    fn test_market_number_amounts_beyond_u64_stay_exact() {
        let market: Market = serde_json::from_str(
            r#"{"ask_orders":[],"bid_orders":[{"price":200000000000000000000000,"quantity":40000000000000000000000}]}"#,
        )
        .unwrap();
        assert_eq!(market.bid_orders[0].price, "200000000000000000000000");
        assert_eq!(market.bid_orders[0].quantity, "40000000000000000000000");

        let view = crate::book::render_market(&market, crate::book::AskOrdering::Descending).unwrap();
        assert_eq!(view.bids[0].price, "500.0000");
        assert_eq!(view.bids[0].size, "100.0000");
        assert_eq!(view.bids[0].total, "50000.00");
    }

    #[test]
    fn test_market_rejects_non_scalar_amount() {
        let result = serde_json::from_value::<Market>(serde_json::json!({
            "ask_orders": [{ "price": [1], "quantity": "1" }],
            "bid_orders": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_market_summary_pair_label() {
        let summary: MarketSummary = serde_json::from_value(serde_json::json!({
            "id": 1,
            "base": { "ticker": "wNEAR", "decimal": 24, "address": "wrap.testnet" },
            "fee": 30,
            "quote": { "ticker": "USDC", "decimal": 6, "address": "usdc.testnet" }
        }))
        .unwrap();
        assert_eq!(summary.pair(), "wNEAR / USDC");
    }
}
