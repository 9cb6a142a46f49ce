pub mod balance;
pub mod market;
pub mod order;

pub use balance::{AccountBalance, AccountView};
pub use market::{Market, MarketSummary, RawOrder, TokenInfo};
pub use order::{BookRow, Order};
