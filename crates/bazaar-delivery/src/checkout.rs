//! Checkout composition: order totals and the order-placement payload.

use bazaar_core::CartLine;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::aggregate::{aggregate, OrderFeeSummary};
use crate::fee::{format_amount, resolve};

/// Totals shown on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Sum of `price × quantity` over all lines.
    pub subtotal: Decimal,
    pub delivery: OrderFeeSummary,
    /// `subtotal + delivery.determined_total`. Undetermined fees are not in it.
    pub grand_total: Decimal,
}

impl OrderSummary {
    /// The delivery row text, `"to be determined"` while any fee is unknown.
    #[must_use]
    pub fn delivery_display(&self, currency: &str) -> String {
        self.delivery.delivery_label(currency)
    }

    /// The total row text. Flags the total as partial when delivery is
    /// still undetermined.
    #[must_use]
    pub fn grand_total_display(&self, currency: &str) -> String {
        let total = format_amount(currency, self.grand_total);
        if self.delivery.has_undetermined {
            format!("{total} + delivery")
        } else {
            total
        }
    }
}

#[must_use]
pub fn summarize(lines: &[CartLine]) -> OrderSummary {
    let subtotal = lines.iter().map(CartLine::line_total).sum::<Decimal>();
    let delivery = aggregate(lines);
    OrderSummary {
        subtotal,
        delivery,
        grand_total: subtotal + delivery.determined_total,
    }
}

/// Distinct vendor ids in the cart, in the order they first appear.
#[must_use]
pub fn vendor_ids(lines: &[CartLine]) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = Vec::new();
    for line in lines {
        if !ids.contains(&line.product.vendor_id) {
            ids.push(line.product.vendor_id);
        }
    }
    ids
}

/// One line of the payload sent to the order placement service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementLine {
    pub product_id: Uuid,
    pub quantity: u32,
    pub price: Decimal,
    pub delivery_fee: Decimal,
}

/// Builds the order placement payload.
///
/// The placement service only accepts a number, so an undetermined fee is
/// sent as `0` here and nowhere else.
#[must_use]
pub fn placement_lines(lines: &[CartLine]) -> Vec<PlacementLine> {
    lines
        .iter()
        .map(|line| {
            let delivery_fee = resolve(&line.product).amount().unwrap_or_else(|| {
                tracing::debug!(
                    product_id = %line.product.id,
                    "sending undetermined delivery fee as zero"
                );
                Decimal::ZERO
            });
            PlacementLine {
                product_id: line.product.id,
                quantity: line.quantity(),
                price: line.product.price,
                delivery_fee,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;
