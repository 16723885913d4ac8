//! Telemetry client configuration.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use crate::client::{TelemetryChannel, TracingChannel};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Buffered items that trigger an automatic flush when no capacity is configured.
pub const DEFAULT_MAX_BUFFER_CAPACITY: usize = 500;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue {
        /// Name of the environment variable.
        name: &'static str,
        /// The offending value.
        value: String,
    },

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

/// Configuration for a telemetry client.
///
/// Configuration values can be set via environment variables:
/// - `LUMEN_INSTRUMENTATION_KEY`: Key signals are attributed to (default: empty)
/// - `LUMEN_DISABLE_TELEMETRY`: `true` or `1` turns tracking off (default: false)
/// - `LUMEN_MAX_BUFFER_CAPACITY`: Items buffered before an automatic flush (default: 500)
///
/// # Example
///
/// ```
/// use lumen::client::InMemoryChannel;
/// use lumen::config::TelemetryConfiguration;
/// use std::sync::Arc;
///
/// let config = TelemetryConfiguration::default()
///     .with_instrumentation_key("ikey-123")
///     .with_max_buffer_capacity(10)
///     .with_channel(Arc::new(InMemoryChannel::new()));
///
/// assert!(config.validate_config().is_ok());
/// ```
#[derive(Debug, Clone, Validate)]
pub struct TelemetryConfiguration {
    /// Key used by the backend to attribute signals to an application instance.
    pub instrumentation_key: String,

    /// When set, the client drops every signal.
    pub disable_telemetry: bool,

    /// Number of buffered items that triggers an automatic flush.
    #[validate(range(min = 1, message = "Buffer capacity must be at least 1"))]
    pub max_buffer_capacity: usize,

    /// Channel that flushed batches are handed to.
    pub channel: Arc<dyn TelemetryChannel>,
}

impl TelemetryConfiguration {
    /// Creates a configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LUMEN_DISABLE_TELEMETRY` is set to something other than a boolean
    /// - `LUMEN_MAX_BUFFER_CAPACITY` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("LUMEN_INSTRUMENTATION_KEY") {
            config.instrumentation_key = key;
        }

        if let Ok(value) = std::env::var("LUMEN_DISABLE_TELEMETRY") {
            config.disable_telemetry = parse_flag("LUMEN_DISABLE_TELEMETRY", &value)?;
        }

        if let Ok(value) = std::env::var("LUMEN_MAX_BUFFER_CAPACITY") {
            config.max_buffer_capacity =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "LUMEN_MAX_BUFFER_CAPACITY",
                    value: value.clone(),
                })?;
        }

        config.validate_config()?;
        Ok(config)
    }

    /// Returns the ambient configuration.
    ///
    /// Reads the environment like [`from_env`](Self::from_env) but never fails:
    /// a malformed environment is logged and the defaults are used instead.
    #[must_use]
    pub fn active() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid telemetry configuration, using defaults");
            Self::default()
        })
    }

    /// Sets the instrumentation key.
    #[must_use]
    pub fn with_instrumentation_key(mut self, key: impl Into<String>) -> Self {
        self.instrumentation_key = key.into();
        self
    }

    /// Enables or disables tracking.
    #[must_use]
    pub fn with_disable_telemetry(mut self, disable: bool) -> Self {
        self.disable_telemetry = disable;
        self
    }

    /// Sets the automatic flush threshold.
    ///
    /// A capacity of zero is raised to 1, which flushes on every tracked item.
    #[must_use]
    pub fn with_max_buffer_capacity(mut self, capacity: usize) -> Self {
        self.max_buffer_capacity = capacity.max(1);
        self
    }

    /// Sets the channel flushed batches are handed to.
    #[must_use]
    pub fn with_channel(mut self, channel: Arc<dyn TelemetryChannel>) -> Self {
        self.channel = channel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer capacity is zero.
    pub fn validate_config(&self) -> Result<(), ConfigError> {
        self.validate()?;
        Ok(())
    }
}

impl Default for TelemetryConfiguration {
    fn default() -> Self {
        Self {
            instrumentation_key: String::new(),
            disable_telemetry: false,
            max_buffer_capacity: DEFAULT_MAX_BUFFER_CAPACITY,
            channel: Arc::new(TracingChannel),
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
