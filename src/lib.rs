//! # near-orderbook-rs
//!
//! A Rust library for viewing the markets of a NEAR order book contract.
//! Signs in with a wallet account, lists markets, and renders a market's
//! bids and asks with the top-of-book spread.
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Session | `session` | signed-in account, balance |
//! | Contract | `contract` | `MarketSummary` list, raw `Market` |
//! | Normalize | `book::normalize` | display `Order`s |
//! | Render | `book::render` | `BookRow`s and `Spread` |
//! | Page | `view` | `PageView` state |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use near_orderbook_rs::{render_market, AskOrdering, NearRpc, OrderBookContract, SpinContract};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rpc = NearRpc::new("https://rpc.testnet.near.org");
//!     let contract = SpinContract::new("app_2.spin_swap.testnet", rpc);
//!
//!     for market in contract.markets().await? {
//!         println!("[{}] {}", market.id, market.pair());
//!     }
//!
//!     let market = contract.view_market(0).await?;
//!     let book = render_market(&market, AskOrdering::Ascending)?;
//!     for row in &book.bids {
//!         println!("{} {} {}", row.price, row.size, row.total);
//!     }
//!     println!("spread {} {}", book.spread.spread_display(), book.spread.percent_display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! cargo run --release -- signin alice.testnet
//! cargo run --release -- markets
//! cargo run --release -- book 0 --ask-order ascending
//! cargo run --release -- signout
//! ```

pub mod app;
pub mod book;
pub mod config;
pub mod contract;
pub mod error;
pub mod keystore;
pub mod models;
pub mod rpc;
pub mod session;
pub mod utils;
pub mod view;

pub use app::App;
pub use book::{render_market, AskOrdering, BookView, Spread};
pub use config::NetworkConfig;
pub use contract::{OrderBookContract, SpinContract};
pub use error::{BookError, Error, Result};
pub use keystore::FileKeyStore;
pub use models::{AccountBalance, BookRow, Market, MarketSummary, Order, RawOrder};
pub use rpc::NearRpc;
pub use session::{SessionAdapter, SignInRequest, WalletSession};
pub use view::PageView;
