//! Delivery eligibility and delivery fee resolution for the marketplace.
//!
//! Every function here is a pure computation over the snapshot it is given.
//! Location, catalog, and order services live outside this crate.

pub mod aggregate;
pub mod checkout;
pub mod eligibility;
pub mod fee;
pub mod geo;
pub mod listing;
pub mod validate;

pub use aggregate::{aggregate, OrderFeeSummary, TO_BE_DETERMINED};
pub use checkout::{placement_lines, summarize, vendor_ids, OrderSummary, PlacementLine};
pub use eligibility::{is_eligible, Distance, Eligibility};
pub use fee::{resolve, DeliveryFee};
pub use geo::{distance_km, format_distance, EARTH_RADIUS_KM};
pub use listing::{deliverable_listings, deliverable_vendors, Listing, ListingOptions};
pub use validate::{
    validate, validate_against_first_vendor, validate_order, LocationCheck, OrderLocationCheck,
    VendorLocationCheck,
};
