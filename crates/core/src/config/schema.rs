//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub booking: BookingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ConfigSchema {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::config_invalid(format!(
                    "api.base_url must start with http:// or https:// (got {url})"
                )));
            }
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::config_invalid("api.timeout_secs cannot be zero"));
        }
        if !self.booking.tax_rate.is_finite() || self.booking.tax_rate < 0.0 {
            return Err(Error::config_invalid("booking.tax_rate must be a non-negative number"));
        }
        if self.booking.max_guests_per_room == 0 {
            return Err(Error::config_invalid("booking.max_guests_per_room cannot be zero"));
        }
        if self.booking.max_inventory_attempts == 0 {
            return Err(Error::config_invalid("booking.max_inventory_attempts cannot be zero"));
        }
        Ok(())
    }
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    /// Base URL of the backend; `WANDERSTAY_API_URL` overrides it
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Hotel search settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    /// Largest edit distance between the query and an address token that
    /// still counts as a match
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

fn default_max_edit_distance() -> usize {
    2
}

/// Tax applied to a stay's subtotal unless configured otherwise.
pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// Guests allowed per room unless configured otherwise.
pub const DEFAULT_MAX_GUESTS_PER_ROOM: u32 = 4;

/// Reservation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSettings {
    /// Tax applied to the subtotal of a stay
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Guests allowed per booked room
    #[serde(default = "default_max_guests_per_room")]
    pub max_guests_per_room: u32,

    /// Put rooms back into inventory when a booking is cancelled
    #[serde(default)]
    pub restore_inventory_on_cancel: bool,

    /// Compare-and-swap attempts before giving up on an inventory update
    #[serde(default = "default_max_inventory_attempts")]
    pub max_inventory_attempts: u32,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            max_guests_per_room: default_max_guests_per_room(),
            restore_inventory_on_cancel: false,
            max_inventory_attempts: default_max_inventory_attempts(),
        }
    }
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

fn default_max_guests_per_room() -> u32 {
    DEFAULT_MAX_GUESTS_PER_ROOM
}

fn default_max_inventory_attempts() -> u32 {
    3
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.search.max_edit_distance, 2);
        assert_eq!(schema.booking.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(schema.booking.max_guests_per_room, DEFAULT_MAX_GUESTS_PER_ROOM);
        assert!(!schema.booking.restore_inventory_on_cancel);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [booking]
            restore_inventory_on_cancel = true
            "#,
        )
        .unwrap();

        assert!(schema.booking.restore_inventory_on_cancel);
        assert_eq!(schema.booking.max_guests_per_room, 4);
        assert_eq!(schema.api.timeout_secs, 30);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut schema = ConfigSchema::default();
        schema.api.base_url = Some("localhost:3002".into());
        assert!(schema.validate().is_err());

        let mut schema = ConfigSchema::default();
        schema.booking.tax_rate = -0.1;
        assert!(schema.validate().is_err());

        let mut schema = ConfigSchema::default();
        schema.booking.max_guests_per_room = 0;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_tax_rate() {
        for rate in [f64::NAN, f64::INFINITY] {
            let mut schema = ConfigSchema::default();
            schema.booking.tax_rate = rate;
            let err = schema.validate().unwrap_err();
            assert!(err.to_string().contains("booking.tax_rate"));
        }
    }
}
