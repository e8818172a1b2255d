//! Checkout-time validation of a chosen delivery point against vendor radii.

use bazaar_core::{DeliveryPolicy, GeoPoint, ServiceRadius, Vendor};
use serde::Serialize;
use uuid::Uuid;

use crate::geo::distance_km;

/// Outcome of checking one delivery point against one vendor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationCheck {
    pub valid: bool,
    /// Measured distance, or `0.0` when the vendor had nothing to measure against.
    pub distance_km: f64,
    /// The radius the point was held to; infinite when the vendor has none.
    pub max_radius_km: f64,
}

impl LocationCheck {
    fn permissive(max_radius_km: f64) -> Self {
        Self {
            valid: true,
            distance_km: 0.0,
            max_radius_km,
        }
    }
}

/// Checks `point` against `vendor`'s service radius.
///
/// Vendors without a usable location or without any radius pass with a
/// distance of zero, matching how eligibility treats an unknown distance. A
/// non-finite `point` never passes.
#[must_use]
pub fn validate(point: GeoPoint, vendor: &Vendor, policy: &DeliveryPolicy) -> LocationCheck {
    let radius = vendor.service_radius(policy);
    let location = vendor.location.filter(GeoPoint::is_finite);

    let (Some(location), ServiceRadius::Limited(max_radius_km)) = (location, radius) else {
        tracing::debug!(
            vendor_id = %vendor.id,
            has_location = location.is_some(),
            "vendor delivery data incomplete; allowing delivery point"
        );
        return LocationCheck::permissive(radius.as_km());
    };

    if !point.is_finite() {
        return LocationCheck {
            valid: false,
            distance_km: f64::INFINITY,
            max_radius_km,
        };
    }

    let distance_km = distance_km(point, location);
    LocationCheck {
        valid: distance_km <= max_radius_km,
        distance_km,
        max_radius_km,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VendorLocationCheck {
    pub vendor_id: Uuid,
    pub check: LocationCheck,
}

/// Per-vendor results for an order spanning one or more vendors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLocationCheck {
    pub checks: Vec<VendorLocationCheck>,
}

impl OrderLocationCheck {
    /// `true` only when every vendor accepts the point.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.checks.iter().all(|c| c.check.valid)
    }

    /// The first vendor whose radius the point exceeds.
    #[must_use]
    pub fn first_rejection(&self) -> Option<&VendorLocationCheck> {
        self.checks.iter().find(|c| !c.check.valid)
    }
}

/// Checks `point` against every distinct vendor in an order.
///
/// Vendors appearing more than once are checked once, in first-seen order.
#[must_use]
pub fn validate_order<'a, I>(
    point: GeoPoint,
    vendors: I,
    policy: &DeliveryPolicy,
) -> OrderLocationCheck
where
    I: IntoIterator<Item = &'a Vendor>,
{
    let mut checks: Vec<VendorLocationCheck> = Vec::new();
    for vendor in vendors {
        if checks.iter().any(|c| c.vendor_id == vendor.id) {
            continue;
        }
        checks.push(VendorLocationCheck {
            vendor_id: vendor.id,
            check: validate(point, vendor, policy),
        });
    }

    let result = OrderLocationCheck { checks };
    if let Some(rejected) = result.first_rejection() {
        tracing::debug!(
            vendor_id = %rejected.vendor_id,
            distance_km = rejected.check.distance_km,
            max_radius_km = rejected.check.max_radius_km,
            "delivery point outside vendor radius"
        );
    }
    result
}

/// Checks `point` against the first vendor only, ignoring the rest of a
/// multi-vendor order. Passes when there is no vendor to check.
///
/// Prefer [`validate_order`]; this exists for flows that still gate on a
/// single reference vendor.
#[must_use]
pub fn validate_against_first_vendor(
    point: GeoPoint,
    vendors: &[Vendor],
    policy: &DeliveryPolicy,
) -> LocationCheck {
    match vendors.first() {
        Some(vendor) => validate(point, vendor, policy),
        None => LocationCheck::permissive(f64::INFINITY),
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
