use serde::Serialize;

/// A resting order after scaling to display units.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Order {
    pub price: f64,
    pub quantity: f64,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.price * self.quantity
    }
}

/// One rendered line of the bid or ask table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookRow {
    /// Price, 4 decimals
    pub price: String,
    /// Quantity, 4 decimals
    pub size: String,
    /// price × quantity, 2 decimals
    pub total: String,
}

impl From<&Order> for BookRow {
    fn from(order: &Order) -> Self {
        Self {
            price: format!("{:.4}", order.price),
            size: format!("{:.4}", order.quantity),
            total: format!("{:.2}", order.total()),
        }
    }
}
