pub mod app_config;
pub mod cart;
pub mod config;
pub mod error;
pub mod geo;
pub mod products;
pub mod vendors;

pub use app_config::{AppConfig, DeliveryPolicy, Environment};
pub use cart::CartLine;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use geo::GeoPoint;
pub use products::Product;
pub use vendors::{load_vendors, ServiceRadius, Vendor, VendorsFile};
