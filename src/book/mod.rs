//! Order book normalization and rendering.
//!
//! Raw contract orders are parsed as exact integers, scaled to display
//! values, sorted per side and turned into table rows plus a spread summary.

pub mod normalize;
pub mod render;

use serde::Serialize;
use tracing::warn;

use crate::error::BookError;
use crate::models::{BookRow, Market};

pub use normalize::{convert, normalize, normalize_order, DISPLAY_ADJUSTMENT, SCALE_DIVISOR};
pub use render::{render_side, sort_orders, AskOrdering, SortDirection, Spread};

/// Everything the page shows for one selected market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookView {
    pub bids: Vec<BookRow>,
    pub asks: Vec<BookRow>,
    pub spread: Spread,
}

/// Normalize both sides of `market` and render them.
///
/// Bids are always sorted highest first. The best bid and best ask are the
/// first price of their sorted side.
pub fn render_market(market: &Market, ask_ordering: AskOrdering) -> Result<BookView, BookError> {
    let bid_orders = normalize(&market.bid_orders)?;
    let ask_orders = normalize(&market.ask_orders)?;

    if ask_ordering == AskOrdering::Descending && !ask_orders.is_empty() {
        warn!("asks sorted highest first; reported best ask is the highest ask");
    }

    let mut best_bid = None;
    let bids = render_side(bid_orders, SortDirection::Descending, |price| {
        best_bid.get_or_insert(price);
    });

    let mut best_ask = None;
    let asks = render_side(ask_orders, ask_ordering.direction(), |price| {
        best_ask.get_or_insert(price);
    });

    Ok(BookView {
        bids,
        asks,
        spread: Spread::compute(best_bid, best_ask),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawOrder;

    /// Display value `v` back to the contract's raw integer encoding.
    fn raw(v: u128) -> String {
        (v * 4 * SCALE_DIVISOR).to_string()
    }

    fn market(bids: &[u128], asks: &[u128]) -> Market {
        Market {
            bid_orders: bids.iter().map(|p| RawOrder::new(raw(*p), raw(1))).collect(),
            ask_orders: asks.iter().map(|p| RawOrder::new(raw(*p), raw(1))).collect(),
        }
    }

    #[test]
    fn test_render_market_legacy_ask_order() {
        let view = render_market(&market(&[10, 20], &[30, 15]), AskOrdering::Descending).unwrap();
        let bid_prices: Vec<_> = view.bids.iter().map(|r| r.price.as_str()).collect();
        let ask_prices: Vec<_> = view.asks.iter().map(|r| r.price.as_str()).collect();
        assert_eq!(bid_prices, ["20.0000", "10.0000"]);
        assert_eq!(ask_prices, ["30.0000", "15.0000"]);
        assert_eq!(view.spread.spread_display(), "-10.0000");
        assert_eq!(view.spread.percent_display(), "-50.00%");
    }

    #[test]
    fn test_render_market_ascending_asks_take_lowest() {
        let view = render_market(&market(&[10, 20], &[30, 25]), AskOrdering::Ascending).unwrap();
        assert_eq!(view.asks[0].price, "25.0000");
        assert_eq!(view.spread.spread_display(), "-5.0000");
        assert_eq!(view.spread.percent_display(), "-25.00%");
    }

    #[test]
    fn test_render_market_empty_side() {
        let view = render_market(&market(&[], &[30]), AskOrdering::Ascending).unwrap();
        assert!(view.bids.is_empty());
        assert_eq!(view.asks.len(), 1);
        assert_eq!(view.spread, Spread::NoLiquidity);
    }

    #[test]
    fn test_render_market_row_totals() {
        let m = Market {
            bid_orders: vec![RawOrder::new(
                "200000000000000000000000",
                "40000000000000000000000",
            )],
            ask_orders: vec![],
        };
        let view = render_market(&m, AskOrdering::Descending).unwrap();
        assert_eq!(view.bids[0].price, "500.0000");
        assert_eq!(view.bids[0].size, "100.0000");
        assert_eq!(view.bids[0].total, "50000.00");
    }

    #[test]
    fn test_render_market_non_negative_four_decimals() {
        for v in [0u128, 1, 3, 99_999, 1_000_000_007] {
            let m = Market {
                bid_orders: vec![RawOrder::new(v.to_string(), (v * 1_000_003).to_string())],
                ask_orders: vec![],
            };
            let row = &render_market(&m, AskOrdering::Descending).unwrap().bids[0];
            for text in [&row.price, &row.size] {
                let (whole, frac) = text.split_once('.').unwrap();
                assert!(!whole.starts_with('-'));
                assert_eq!(frac.len(), 4, "{text}");
            }
        }
    }

    #[test]
    fn test_render_market_rejects_malformed_amount() {
        let m = Market {
            bid_orders: vec![RawOrder::new("12.5", "1")],
            ask_orders: vec![],
        };
        assert!(render_market(&m, AskOrdering::Ascending).is_err());
    }
}
