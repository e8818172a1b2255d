use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Kept separate from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_radius = |var: &str| -> Result<Option<f64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let km = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if !km.is_finite() || km < 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("radius must be a finite, non-negative number of km (got {raw})"),
            });
        }
        Ok(Some(km))
    };

    let env = parse_environment(&or_default("BAZAAR_ENV", "development"))?;
    let log_level = or_default("BAZAAR_LOG_LEVEL", "info");
    let vendors_path = PathBuf::from(or_default("BAZAAR_VENDORS_PATH", "./config/vendors.yaml"));
    let default_delivery_radius_km = parse_radius("BAZAAR_DEFAULT_DELIVERY_RADIUS_KM")?;
    let currency_symbol = or_default("BAZAAR_CURRENCY_SYMBOL", "₹");

    Ok(AppConfig {
        env,
        log_level,
        vendors_path,
        default_delivery_radius_km,
        currency_symbol,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BAZAAR_ENV".to_string(),
            reason: format!("expected development, test, or production (got {other})"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
