use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Market, MarketSummary};
use crate::rpc::NearRpc;

/// View methods the order book contract exposes. Also the method list a
/// sign-in request asks access for.
pub const VIEW_METHODS: [&str; 2] = [MARKETS_METHOD, VIEW_MARKET_METHOD];
pub const MARKETS_METHOD: &str = "markets";
pub const VIEW_MARKET_METHOD: &str = "view_market";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViewMarketArgs {
    pub market_id: u64,
}

/// Read-only gateway to an order book contract.
#[async_trait]
pub trait OrderBookContract: Send + Sync {
    fn contract_id(&self) -> &str;

    /// All listed markets.
    async fn markets(&self) -> Result<Vec<MarketSummary>>;

    /// Current order book snapshot for one market.
    async fn view_market(&self, market_id: u64) -> Result<Market>;
}

/// The spin_swap order book contract, queried over JSON-RPC.
pub struct SpinContract {
    contract_id: String,
    rpc: NearRpc,
}

impl SpinContract {
    pub fn new(contract_id: &str, rpc: NearRpc) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            rpc,
        }
    }

    pub fn rpc(&self) -> &NearRpc {
        &self.rpc
    }
}

#[async_trait]
impl OrderBookContract for SpinContract {
    fn contract_id(&self) -> &str {
        &self.contract_id
    }

    async fn markets(&self) -> Result<Vec<MarketSummary>> {
        self.rpc
            .call_function(&self.contract_id, MARKETS_METHOD, &serde_json::json!({}))
            .await
    }

    async fn view_market(&self, market_id: u64) -> Result<Market> {
        self.rpc
            .call_function(&self.contract_id, VIEW_MARKET_METHOD, &ViewMarketArgs { market_id })
            .await
    }
}
