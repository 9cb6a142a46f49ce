use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::book::AskOrdering;
use crate::error::{Error, Result};

pub const TESTNET_NODE_URL: &str = "https://rpc.testnet.near.org";
pub const TESTNET_WALLET_URL: &str = "https://wallet.testnet.near.org";
pub const DEFAULT_CONTRACT_ID: &str = "app_2.spin_swap.testnet";
pub const DEFAULT_REDIRECT_URL: &str = "http://localhost:1234";
pub const DEFAULT_SESSION_FILE: &str = "near_orderbook_session.json";

/// Endpoints, contract and local settings for one NEAR network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub network_id: String,
    pub node_url: String,
    pub wallet_url: String,
    pub contract_id: String,
    pub success_url: String,
    pub failure_url: String,
    pub session_path: PathBuf,
    /// Request timeout for RPC calls; none by default.
    pub timeout: Option<Duration>,
    pub ask_ordering: AskOrdering,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

impl NetworkConfig {
    pub fn testnet() -> Self {
        Self {
            network_id: "testnet".to_string(),
            node_url: TESTNET_NODE_URL.to_string(),
            wallet_url: TESTNET_WALLET_URL.to_string(),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            success_url: DEFAULT_REDIRECT_URL.to_string(),
            failure_url: DEFAULT_REDIRECT_URL.to_string(),
            session_path: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout: None,
            ask_ordering: AskOrdering::default(),
        }
    }

    /// Testnet defaults overlaid with `NEAR_*` / `ORDERBOOK_*` variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::testnet();
        if let Some(v) = lookup("NEAR_NETWORK_ID") {
            cfg.network_id = v;
        }
        if let Some(v) = lookup("NEAR_NODE_URL") {
            cfg.node_url = v;
        }
        if let Some(v) = lookup("NEAR_WALLET_URL") {
            cfg.wallet_url = v;
        }
        if let Some(v) = lookup("ORDERBOOK_CONTRACT") {
            cfg.contract_id = v;
        }
        if let Some(v) = lookup("ORDERBOOK_SESSION_FILE") {
            cfg.session_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("ORDERBOOK_TIMEOUT_SECS") {
            let secs: u64 = v
                .parse()
                .map_err(|_| Error::Config(format!("ORDERBOOK_TIMEOUT_SECS must be an integer, got {v:?}")))?;
            cfg.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(v) = lookup("ORDERBOOK_ASK_ORDER") {
            cfg.ask_ordering = v.parse().map_err(Error::Config)?;
        }
        Ok(cfg)
    }
}
