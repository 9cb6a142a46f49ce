use crate::error::BookError;
use crate::models::{Order, RawOrder};
use crate::utils::parse_amount;

/// Raw contract amounts are integers scaled by 10 × 10^19.
pub const SCALE_DIVISOR: u128 = 10 * 10u128.pow(19);

/// Extra divisor the market contract applies to every displayed amount.
pub const DISPLAY_ADJUSTMENT: f64 = 4.0;

/// Scale an exact contract amount to a display value.
///
/// The integer division truncates before the float conversion, so anything
/// below `SCALE_DIVISOR` is dropped.
pub fn convert(raw: u128) -> f64 {
    (raw / SCALE_DIVISOR) as f64 / DISPLAY_ADJUSTMENT
}

pub fn normalize_order(order: &RawOrder) -> Result<Order, BookError> {
    let price = parse_amount("price", &order.price)?;
    let quantity = parse_amount("quantity", &order.quantity)?;
    Ok(Order {
        price: convert(price),
        quantity: convert(quantity),
    })
}

/// Normalize one side of the book, failing on the first malformed amount.
pub fn normalize(orders: &[RawOrder]) -> Result<Vec<Order>, BookError> {
    orders.iter().map(normalize_order).collect()
}
