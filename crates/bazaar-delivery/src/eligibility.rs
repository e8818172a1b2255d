//! Decides whether a vendor can deliver to a shopper's location.

use bazaar_core::{DeliveryPolicy, GeoPoint, Vendor};
use serde::Serialize;

use crate::geo::{distance_km, format_distance};

/// A measured distance, or the explicit marker that one endpoint had no
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "km", rename_all = "snake_case")]
pub enum Distance {
    Known(f64),
    Unknown,
}

impl Distance {
    #[must_use]
    pub fn km(self) -> Option<f64> {
        match self {
            Distance::Known(km) => Some(km),
            Distance::Unknown => None,
        }
    }

    /// Display string such as `"5.1 km away"`; `None` when unknown.
    #[must_use]
    pub fn label(self) -> Option<String> {
        self.km().map(|km| format!("{} away", format_distance(km)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub distance: Distance,
}

/// Measures the distance between an optional shopper location and the
/// vendor, yielding [`Distance::Unknown`] if either side is missing.
#[must_use]
pub fn measure(shopper: Option<GeoPoint>, vendor: &Vendor) -> Distance {
    match (shopper, vendor.location) {
        (Some(from), Some(to)) if from.is_finite() && to.is_finite() => {
            Distance::Known(distance_km(from, to))
        }
        _ => Distance::Unknown,
    }
}

/// Decides whether `vendor` delivers to `shopper`.
///
/// Offline vendors are never eligible. When either location is missing the
/// distance is unknown and the vendor is treated as deliverable (fail-open).
/// Otherwise the vendor is eligible iff the distance is within its resolved
/// service radius.
#[must_use]
pub fn is_eligible(
    shopper: Option<GeoPoint>,
    vendor: &Vendor,
    policy: &DeliveryPolicy,
) -> Eligibility {
    let distance = measure(shopper, vendor);

    if !vendor.is_online {
        return Eligibility {
            eligible: false,
            distance,
        };
    }

    let eligible = match distance {
        Distance::Unknown => {
            tracing::debug!(
                vendor_id = %vendor.id,
                shopper_known = shopper.is_some(),
                "distance unknown; treating vendor as deliverable"
            );
            true
        }
        Distance::Known(km) => vendor.service_radius(policy).covers(km),
    };

    Eligibility { eligible, distance }
}
