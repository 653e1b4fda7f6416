//! Storefront configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use invite_commerce::enquiry::DEFAULT_COMMENTS;
use invite_mail::{MailSettings, DEFAULT_UTC_OFFSET_MINUTES};
use invite_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::StorefrontError;

/// Largest accepted delivery delay.
pub const MAX_SEND_DELAY_MS: u64 = 60_000;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Email service credentials.
    #[serde(default)]
    pub mail: MailSettings,

    /// Checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutSettings,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check everything a live storefront needs.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        self.mail.validate()?;
        self.checkout.validate()
    }
}

/// What happens when the email service fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// Thank the customer and clear the cart before delivery settles; report
    /// the delivery result afterwards.
    #[default]
    Acknowledge,
    /// Wait for delivery. Only a delivered enquiry clears the cart.
    RequireDelivery,
}

/// Checkout behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSettings {
    /// Pause between accepting the form and sending, in milliseconds.
    pub send_delay_ms: u64,

    /// Whether the acknowledgement waits for delivery.
    pub delivery: DeliveryPolicy,

    /// Comments sent when the customer leaves the field blank.
    pub comments_placeholder: String,

    /// Offset of the clock used for the email's time field.
    pub utc_offset_minutes: i32,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            send_delay_ms: 1000,
            delivery: DeliveryPolicy::default(),
            comments_placeholder: DEFAULT_COMMENTS.to_string(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl CheckoutSettings {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    fn validate(&self) -> Result<(), StorefrontError> {
        if self.send_delay_ms > MAX_SEND_DELAY_MS {
            return Err(StorefrontError::Config(format!(
                "send_delay_ms must be at most {}, got {}",
                MAX_SEND_DELAY_MS, self.send_delay_ms
            )));
        }
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(StorefrontError::Config(format!(
                "utc_offset_minutes must be within a day, got {}",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level written.
    pub level: LogLevel,
    /// JSON or human-readable lines.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }
}
