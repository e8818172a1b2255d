use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Marketplace-wide delivery settings the engine consults when a vendor
/// leaves a value undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryPolicy {
    /// Radius applied to vendors that declare none. `None` means such
    /// vendors have no distance limit at all.
    pub default_radius_km: Option<f64>,
}

impl DeliveryPolicy {
    /// A policy where undeclared vendor radii are unbounded.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            default_radius_km: None,
        }
    }

    #[must_use]
    pub const fn with_default_radius(km: f64) -> Self {
        Self {
            default_radius_km: Some(km),
        }
    }
}

/// Settings read from `BAZAAR_*` environment variables. Every variable is
/// optional.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment, for the host application's own branching.
    pub env: Environment,
    /// Filter directive for the host application's `tracing` subscriber.
    /// The library crates only emit events and never install one.
    pub log_level: String,
    pub vendors_path: PathBuf,
    pub default_delivery_radius_km: Option<f64>,
    /// Prefix used when rendering money amounts, e.g. `"₹"`.
    pub currency_symbol: String,
}

impl AppConfig {
    #[must_use]
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy {
            default_radius_km: self.default_delivery_radius_km,
        }
    }
}
