//! Order-level delivery fee aggregation.

use bazaar_core::CartLine;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::fee::{format_amount, resolve, DeliveryFee};

/// Label shown in place of a delivery amount while any line's fee is unknown.
pub const TO_BE_DETERMINED: &str = "to be determined";

/// Delivery charges across an order.
///
/// `determined_total` sums only lines whose fee is known. Any undetermined
/// line flips `has_undetermined` and must be shown to the shopper as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderFeeSummary {
    pub determined_total: Decimal,
    pub has_undetermined: bool,
}

impl OrderFeeSummary {
    /// Folds one resolved fee into the summary.
    pub fn add(&mut self, fee: DeliveryFee) {
        match fee {
            DeliveryFee::Free => {}
            DeliveryFee::Fixed(amount) => self.determined_total += amount,
            DeliveryFee::Undetermined => self.has_undetermined = true,
        }
    }

    /// The delivery portion as the shopper should see it.
    #[must_use]
    pub fn delivery_label(&self, currency: &str) -> String {
        if self.has_undetermined {
            TO_BE_DETERMINED.to_string()
        } else if self.determined_total.is_zero() {
            "Free".to_string()
        } else {
            format_amount(currency, self.determined_total)
        }
    }
}

/// Aggregates delivery fees over cart lines.
///
/// The fee is charged once per line, independent of quantity.
#[must_use]
pub fn aggregate(lines: &[CartLine]) -> OrderFeeSummary {
    lines
        .iter()
        .map(|line| resolve(&line.product))
        .fold(OrderFeeSummary::default(), |mut summary, fee| {
            summary.add(fee);
            summary
        })
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
