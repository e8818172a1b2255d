//! Browsing helpers: filter catalog pages down to what a shopper can receive
//! and order them nearest-first.

use std::cmp::Ordering;
use std::collections::HashMap;

use bazaar_core::{DeliveryPolicy, GeoPoint, Product, Vendor};
use uuid::Uuid;

use crate::eligibility::{is_eligible, Distance, Eligibility};
use crate::fee::{resolve, DeliveryFee};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingOptions {
    /// Keep products with no stock in the results.
    pub include_out_of_stock: bool,
}

/// A product card ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub product: &'a Product,
    pub vendor: &'a Vendor,
    pub eligibility: Eligibility,
    pub fee: DeliveryFee,
}

impl Listing<'_> {
    #[must_use]
    pub fn distance_label(&self) -> Option<String> {
        self.eligibility.distance.label()
    }
}

/// Vendors that can deliver to `shopper`, nearest first, unknown distances last.
#[must_use]
pub fn deliverable_vendors<'a>(
    shopper: Option<GeoPoint>,
    vendors: &'a [Vendor],
    policy: &DeliveryPolicy,
) -> Vec<(&'a Vendor, Eligibility)> {
    let mut eligible: Vec<_> = vendors
        .iter()
        .map(|vendor| (vendor, is_eligible(shopper, vendor, policy)))
        .filter(|(_, eligibility)| eligibility.eligible)
        .collect();
    eligible.sort_by(|(_, a), (_, b)| nearest_first(a.distance, b.distance));
    eligible
}

/// Builds the product listings a shopper at `shopper` can order from.
///
/// Products whose vendor is missing from `vendors`, offline, or out of range
/// are dropped, as are out-of-stock products unless `options` keeps them.
/// The sort is stable, so equally distant products keep their page order.
#[must_use]
pub fn deliverable_listings<'a>(
    shopper: Option<GeoPoint>,
    vendors: &'a [Vendor],
    products: &'a [Product],
    policy: &DeliveryPolicy,
    options: ListingOptions,
) -> Vec<Listing<'a>> {
    let by_id: HashMap<Uuid, &Vendor> = vendors.iter().map(|v| (v.id, v)).collect();
    let mut eligibility_cache: HashMap<Uuid, Eligibility> = HashMap::new();

    let mut listings = Vec::with_capacity(products.len());
    for product in products {
        if !options.include_out_of_stock && !product.is_in_stock() {
            continue;
        }

        let Some(vendor) = by_id.get(&product.vendor_id).copied() else {
            tracing::warn!(
                product_id = %product.id,
                vendor_id = %product.vendor_id,
                "product references a vendor missing from the page; skipping"
            );
            continue;
        };

        let eligibility = *eligibility_cache
            .entry(vendor.id)
            .or_insert_with(|| is_eligible(shopper, vendor, policy));
        if !eligibility.eligible {
            continue;
        }

        listings.push(Listing {
            product,
            vendor,
            eligibility,
            fee: resolve(product),
        });
    }

    listings.sort_by(|a, b| nearest_first(a.eligibility.distance, b.eligibility.distance));
    listings
}

fn nearest_first(a: Distance, b: Distance) -> Ordering {
    match (a, b) {
        (Distance::Known(a), Distance::Known(b)) => a.total_cmp(&b),
        (Distance::Known(_), Distance::Unknown) => Ordering::Less,
        (Distance::Unknown, Distance::Known(_)) => Ordering::Greater,
        (Distance::Unknown, Distance::Unknown) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
