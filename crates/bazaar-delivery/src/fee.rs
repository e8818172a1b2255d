//! Per-product delivery fee resolution.

use bazaar_core::Product;
use rust_decimal::Decimal;
use serde::Serialize;

/// The delivery charge for one product.
///
/// `Undetermined` carries no number: it means the vendor has not fixed a fee,
/// not that the fee is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum DeliveryFee {
    Free,
    Fixed(Decimal),
    Undetermined,
}

impl DeliveryFee {
    /// The numeric fee, if one is known. `Free` is `Some(0)`.
    #[must_use]
    pub fn amount(self) -> Option<Decimal> {
        match self {
            DeliveryFee::Free => Some(Decimal::ZERO),
            DeliveryFee::Fixed(amount) => Some(amount),
            DeliveryFee::Undetermined => None,
        }
    }

    #[must_use]
    pub fn is_undetermined(self) -> bool {
        matches!(self, DeliveryFee::Undetermined)
    }

    /// Badge text for product cards.
    #[must_use]
    pub fn badge(self, currency: &str) -> String {
        match self {
            DeliveryFee::Free => "Free delivery".to_string(),
            DeliveryFee::Fixed(amount) => format!("Delivery {}", format_amount(currency, amount)),
            DeliveryFee::Undetermined => "Delivery fee to be determined".to_string(),
        }
    }
}

/// Resolves a product's delivery fee. First match wins:
///
/// 1. `free_delivery` → [`DeliveryFee::Free`], whatever the custom fee says.
/// 2. custom fee enabled and present → [`DeliveryFee::Fixed`].
/// 3. anything else → [`DeliveryFee::Undetermined`].
#[must_use]
pub fn resolve(product: &Product) -> DeliveryFee {
    if product.free_delivery {
        return DeliveryFee::Free;
    }
    match (product.custom_delivery_fee_enabled, product.custom_delivery_fee) {
        (true, Some(fee)) => DeliveryFee::Fixed(fee),
        _ => DeliveryFee::Undetermined,
    }
}

/// Formats a money amount with the currency prefix, dropping trailing zeros
/// (`40.00` → `"₹40"`).
#[must_use]
pub fn format_amount(currency: &str, amount: Decimal) -> String {
    format!("{currency}{}", amount.normalize())
}
