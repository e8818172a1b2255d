use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CoreError;
use crate::products::Product;

/// One product in a shopper's cart.
///
/// Construct through [`CartLine::new`] so the quantity invariant holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    quantity: u32,
}

impl CartLine {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuantity`] if `quantity` is zero.
    pub fn new(product: Product, quantity: u32) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity {
                product_id: product.id,
            });
        }
        Ok(Self { product, quantity })
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuantity`] if `quantity` is zero; the line
    /// keeps its previous quantity.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity {
                product_id: self.product.id,
            });
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
