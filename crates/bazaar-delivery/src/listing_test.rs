use rust_decimal::Decimal;

use super::*;
use crate::geo::EARTH_RADIUS_KM;

const SHOPPER: GeoPoint = GeoPoint::new(27.70, 85.30);

fn north_of_shopper(km: f64) -> GeoPoint {
    let degrees = km / (EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
    GeoPoint::new(SHOPPER.latitude + degrees, SHOPPER.longitude)
}

fn make_vendor(name: &str, location: Option<GeoPoint>, radius: Option<f64>) -> Vendor {
    Vendor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location,
        delivery_radius_km: radius,
        is_online: true,
    }
}

fn make_product(vendor: &Vendor, name: &str, stock_quantity: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        vendor_id: vendor.id,
        name: name.to_string(),
        price: Decimal::from(250),
        stock_quantity,
        free_delivery: true,
        custom_delivery_fee_enabled: false,
        custom_delivery_fee: None,
    }
}

fn names<'a>(listings: &'a [Listing<'_>]) -> Vec<&'a str> {
    listings.iter().map(|l| l.product.name.as_str()).collect()
}

#[test]
fn listings_sorted_nearest_first_with_unknown_last() {
    let far = make_vendor("far", Some(north_of_shopper(4.0)), Some(10.0));
    let unknown = make_vendor("unknown", None, Some(10.0));
    let near = make_vendor("near", Some(north_of_shopper(1.0)), Some(10.0));
    let vendors = vec![far.clone(), unknown.clone(), near.clone()];
    let products = vec![
        make_product(&unknown, "momo kit", 3),
        make_product(&far, "thangka", 1),
        make_product(&near, "tea", 8),
    ];

    let listings = deliverable_listings(
        Some(SHOPPER),
        &vendors,
        &products,
        &DeliveryPolicy::unbounded(),
        ListingOptions::default(),
    );

    assert_eq!(names(&listings), vec!["tea", "thangka", "momo kit"]);
    assert_eq!(listings[0].distance_label().as_deref(), Some("1.0 km away"));
    assert!(listings[2].distance_label().is_none());
}

#[test]
fn listings_drop_offline_out_of_range_and_unknown_vendors() {
    let mut offline = make_vendor("offline", Some(north_of_shopper(1.0)), None);
    offline.is_online = false;
    let out_of_range = make_vendor("out of range", Some(north_of_shopper(6.0)), Some(5.0));
    let ok = make_vendor("ok", Some(north_of_shopper(2.0)), Some(5.0));
    let stranger = make_vendor("stranger", Some(SHOPPER), None);
    let vendors = vec![offline.clone(), out_of_range.clone(), ok.clone()];
    let products = vec![
        make_product(&offline, "offline item", 1),
        make_product(&out_of_range, "distant item", 1),
        make_product(&ok, "kept item", 1),
        make_product(&stranger, "orphan item", 1),
    ];

    let listings = deliverable_listings(
        Some(SHOPPER),
        &vendors,
        &products,
        &DeliveryPolicy::unbounded(),
        ListingOptions::default(),
    );

    assert_eq!(names(&listings), vec!["kept item"]);
    assert_eq!(listings[0].fee, DeliveryFee::Free);
}

#[test]
fn out_of_stock_products_follow_options() {
    let vendor = make_vendor("v", Some(north_of_shopper(1.0)), None);
    let vendors = vec![vendor.clone()];
    let products = vec![make_product(&vendor, "sold out", 0)];
    let policy = DeliveryPolicy::unbounded();

    let hidden = deliverable_listings(
        Some(SHOPPER),
        &vendors,
        &products,
        &policy,
        ListingOptions::default(),
    );
    assert!(hidden.is_empty());

    let shown = deliverable_listings(
        Some(SHOPPER),
        &vendors,
        &products,
        &policy,
        ListingOptions {
            include_out_of_stock: true,
        },
    );
    assert_eq!(shown.len(), 1);
}

#[test]
fn no_shopper_location_keeps_everything_online() {
    let near = make_vendor("near", Some(north_of_shopper(1.0)), Some(0.1));
    let mut offline = make_vendor("offline", None, None);
    offline.is_online = false;
    let vendors = vec![near.clone(), offline.clone()];

    let result = deliverable_vendors(None, &vendors, &DeliveryPolicy::unbounded());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].0.id, near.id);
    assert_eq!(result[0].1.distance, Distance::Unknown);
}

#[test]
fn deliverable_vendors_sorted_by_distance() {
    let b = make_vendor("b", Some(north_of_shopper(3.0)), None);
    let a = make_vendor("a", Some(north_of_shopper(0.5)), None);
    let vendors = vec![b.clone(), a.clone()];

    let result = deliverable_vendors(Some(SHOPPER), &vendors, &DeliveryPolicy::unbounded());
    let ids: Vec<Uuid> = result.iter().map(|(v, _)| v.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}
