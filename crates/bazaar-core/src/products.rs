use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product as returned by the catalog/search service, reduced to
/// the fields the delivery engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    /// Unit price in the marketplace currency.
    pub price: Decimal,
    pub stock_quantity: i64,
    /// When set, delivery is free and any custom fee is ignored.
    #[serde(default)]
    pub free_delivery: bool,
    #[serde(default)]
    pub custom_delivery_fee_enabled: bool,
    /// Only meaningful while `custom_delivery_fee_enabled` is `true`.
    #[serde(default)]
    pub custom_delivery_fee: Option<Decimal>,
}

impl Product {
    /// Returns `true` if at least one unit is available.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
