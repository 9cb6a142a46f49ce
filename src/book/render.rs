use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{BookRow, Order};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// How the ask side is sorted before the best ask is taken from its head.
///
/// `Descending` keeps the historical page behavior, which puts the highest
/// ask first and therefore reports it as the best ask. `Ascending` reports
/// the lowest ask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AskOrdering {
    #[default]
    Descending,
    Ascending,
}

impl AskOrdering {
    pub fn direction(self) -> SortDirection {
        match self {
            AskOrdering::Descending => SortDirection::Descending,
            AskOrdering::Ascending => SortDirection::Ascending,
        }
    }
}

impl FromStr for AskOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "descending" | "desc" => Ok(AskOrdering::Descending),
            "ascending" | "asc" => Ok(AskOrdering::Ascending),
            other => Err(format!("unknown ask ordering: {other}")),
        }
    }
}

impl fmt::Display for AskOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskOrdering::Descending => f.write_str("descending"),
            AskOrdering::Ascending => f.write_str("ascending"),
        }
    }
}

/// Stable sort by price; equal prices keep their contract order.
pub fn sort_orders(orders: &mut [Order], direction: SortDirection) {
    orders.sort_by(|a, b| match direction {
        SortDirection::Descending => b.price.total_cmp(&a.price),
        SortDirection::Ascending => a.price.total_cmp(&b.price),
    });
}

/// Sort one side and turn it into table rows, calling `on_price` with every
/// row's display price in row order.
pub fn render_side<F>(mut orders: Vec<Order>, direction: SortDirection, mut on_price: F) -> Vec<BookRow>
where
    F: FnMut(f64),
{
    sort_orders(&mut orders, direction);
    orders
        .iter()
        .map(|order| {
            on_price(order.price);
            BookRow::from(order)
        })
        .collect()
}

/// Top-of-book summary shown under the tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Spread {
    /// One side of the book is empty.
    NoLiquidity,
    Quoted {
        best_bid: f64,
        best_ask: f64,
        spread: f64,
        /// `spread / best_bid`; absent when the best bid is zero.
        percent: Option<f64>,
    },
}

impl Spread {
    pub fn compute(best_bid: Option<f64>, best_ask: Option<f64>) -> Self {
        match (best_bid, best_ask) {
            (Some(best_bid), Some(best_ask)) => {
                let spread = best_bid - best_ask;
                let percent = match best_bid.partial_cmp(&0.0) {
                    Some(Ordering::Equal) | None => None,
                    _ => Some(spread / best_bid),
                };
                Spread::Quoted {
                    best_bid,
                    best_ask,
                    spread,
                    percent,
                }
            }
            _ => Spread::NoLiquidity,
        }
    }

    /// Spread text, 4 decimals; empty without liquidity.
    pub fn spread_display(&self) -> String {
        match self {
            Spread::Quoted { spread, .. } => format!("{:.4}", spread),
            Spread::NoLiquidity => String::new(),
        }
    }

    /// Percent text, 2 decimals with a `%` suffix; empty when undefined.
    pub fn percent_display(&self) -> String {
        match self {
            Spread::Quoted {
                percent: Some(p), ..
            } => format!("{:.2}%", p * 100.0),
            _ => String::new(),
        }
    }
}
