use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_config::DeliveryPolicy;
use crate::geo::GeoPoint;
use crate::ConfigError;

/// A marketplace vendor as the catalog service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    /// Store location. Vendors that never set one are still listed.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Declared service radius in kilometres.
    #[serde(default)]
    pub delivery_radius_km: Option<f64>,
    #[serde(default = "default_online")]
    pub is_online: bool,
}

fn default_online() -> bool {
    true
}

/// How far a vendor delivers once marketplace defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceRadius {
    Limited(f64),
    /// No radius declared and no marketplace default: distance never blocks.
    Unbounded,
}

impl ServiceRadius {
    /// Returns `true` if a point `distance_km` away is inside the radius.
    /// The boundary itself counts as inside.
    #[must_use]
    pub fn covers(self, distance_km: f64) -> bool {
        match self {
            ServiceRadius::Limited(max) => distance_km <= max,
            ServiceRadius::Unbounded => true,
        }
    }

    /// The radius as a plain number, `f64::INFINITY` when unbounded.
    #[must_use]
    pub fn as_km(self) -> f64 {
        match self {
            ServiceRadius::Limited(max) => max,
            ServiceRadius::Unbounded => f64::INFINITY,
        }
    }
}

impl Vendor {
    /// Resolves the vendor's effective radius: the declared value, then the
    /// policy default, then unbounded.
    #[must_use]
    pub fn service_radius(&self, policy: &DeliveryPolicy) -> ServiceRadius {
        self.delivery_radius_km
            .or(policy.default_radius_km)
            .map_or(ServiceRadius::Unbounded, ServiceRadius::Limited)
    }
}

#[derive(Debug, Deserialize)]
pub struct VendorsFile {
    pub vendors: Vec<Vendor>,
}

/// Load and validate a vendor catalog snapshot from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vendors(path: &Path) -> Result<VendorsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VendorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let vendors_file: VendorsFile = serde_yaml::from_str(&content)?;

    validate_vendors(&vendors_file)?;

    tracing::debug!(
        path = %path.display(),
        vendors = vendors_file.vendors.len(),
        "loaded vendor catalog"
    );

    Ok(vendors_file)
}

fn validate_vendors(vendors_file: &VendorsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for vendor in &vendors_file.vendors {
        if vendor.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "vendor {} has an empty name",
                vendor.id
            )));
        }

        if !seen_ids.insert(vendor.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor id: {}",
                vendor.id
            )));
        }

        if let Some(location) = vendor.location {
            if !location.is_finite()
                || !(-90.0..=90.0).contains(&location.latitude)
                || !(-180.0..=180.0).contains(&location.longitude)
            {
                return Err(ConfigError::Validation(format!(
                    "vendor '{}' has out-of-range location ({}, {})",
                    vendor.name, location.latitude, location.longitude
                )));
            }
        }

        if let Some(radius) = vendor.delivery_radius_km {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "vendor '{}' has invalid delivery radius {radius}; must be a finite, non-negative km value",
                    vendor.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "vendors_test.rs"]
mod tests;
