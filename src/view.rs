//! Page state owned by the app instead of looked-up page elements.

use std::fmt::Write as _;

use crate::book::BookView;
use crate::models::{AccountBalance, BookRow, MarketSummary};

pub const MARKET_PLACEHOLDER: &str = "select market";

/// One entry of the market selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketOption {
    /// Market id as text; empty for the placeholder.
    pub value: String,
    pub label: String,
    pub placeholder: bool,
}

impl MarketOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: MARKET_PLACEHOLDER.to_string(),
            placeholder: true,
        }
    }
}

impl From<&MarketSummary> for MarketOption {
    fn from(market: &MarketSummary) -> Self {
        Self {
            value: market.id.to_string(),
            label: market.pair(),
            placeholder: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub sign_in_visible: bool,
    pub sign_out_visible: bool,
    pub selector_visible: bool,
    pub table_visible: bool,
    /// Account panel lines.
    pub app_info: Vec<String>,
    pub market_options: Vec<MarketOption>,
    pub bid_rows: Vec<BookRow>,
    pub ask_rows: Vec<BookRow>,
    pub spread_text: String,
    pub percent_text: String,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            sign_in_visible: true,
            sign_out_visible: false,
            selector_visible: false,
            table_visible: false,
            app_info: Vec::new(),
            market_options: vec![MarketOption::placeholder()],
            bid_rows: Vec::new(),
            ask_rows: Vec::new(),
            spread_text: String::new(),
            percent_text: String::new(),
        }
    }
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_signed_in(&mut self, account_id: &str, balance: &AccountBalance) {
        self.sign_in_visible = false;
        self.sign_out_visible = true;
        self.app_info.push(format!("account id: {account_id}"));
        self.app_info
            .push(format!("available balance: {}", balance.available_display()));
        self.app_info
            .push(format!("total balance: {}", balance.total_display()));
    }

    /// Append markets after the placeholder and reveal the selector.
    pub fn set_markets(&mut self, markets: &[MarketSummary]) {
        self.market_options
            .extend(markets.iter().map(MarketOption::from));
        self.selector_visible = true;
    }

    /// Replace both tables and the summary with a freshly rendered book.
    pub fn show_book(&mut self, book: BookView) {
        self.table_visible = true;
        self.spread_text = book.spread.spread_display();
        self.percent_text = book.spread.percent_display();
        self.bid_rows = book.bids;
        self.ask_rows = book.asks;
    }

    /// Back to the signed-out page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.app_info {
            let _ = writeln!(out, "{line}");
        }
        if self.selector_visible {
            let _ = writeln!(out, "\nmarkets:");
            for option in self.market_options.iter().filter(|o| !o.placeholder) {
                let _ = writeln!(out, "  [{}] {}", option.value, option.label);
            }
        }
        if self.table_visible {
            render_table(&mut out, "bids", &self.bid_rows);
            render_table(&mut out, "asks", &self.ask_rows);
            let _ = writeln!(out, "\nspread: {}  {}", self.spread_text, self.percent_text);
        }
        out
    }
}

fn render_table(out: &mut String, title: &str, rows: &[BookRow]) {
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{:>16} {:>16} {:>18}", "price", "size", "total");
    for row in rows {
        let _ = writeln!(out, "{:>16} {:>16} {:>18}", row.price, row.size, row.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Spread;

    fn row(price: &str) -> BookRow {
        BookRow {
            price: price.to_string(),
            size: "1.0000".to_string(),
            total: price.to_string(),
        }
    }

    #[test]
    fn test_show_book_then_reset() {
        let mut view = PageView::new();
        view.show_book(BookView {
            bids: vec![row("20.0000")],
            asks: vec![row("30.0000")],
            spread: Spread::compute(Some(20.0), Some(30.0)),
        });
        assert!(view.table_visible);
        assert_eq!(view.spread_text, "-10.0000");
        assert_eq!(view.percent_text, "-50.00%");
        assert!(view.render().contains("spread: -10.0000  -50.00%"));

        view.reset();
        assert_eq!(view.spread_text, "");
        assert_eq!(view.percent_text, "");
        assert!(view.bid_rows.is_empty());
        assert!(view.ask_rows.is_empty());
        assert_eq!(view.market_options, vec![MarketOption::placeholder()]);
        assert!(view.sign_in_visible && !view.sign_out_visible);
    }

    #[test]
    fn test_no_liquidity_leaves_summary_empty() {
        let mut view = PageView::new();
        view.show_book(BookView {
            bids: vec![],
            asks: vec![row("30.0000")],
            spread: Spread::NoLiquidity,
        });
        assert_eq!(view.spread_text, "");
        assert_eq!(view.percent_text, "");
        assert_eq!(view.ask_rows.len(), 1);
    }
}
