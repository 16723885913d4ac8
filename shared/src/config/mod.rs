//! Configuration module for Lumen.
//!
//! This module contains the configuration consumed by the telemetry client.

pub mod telemetry;

pub use telemetry::{ConfigError, TelemetryConfiguration, DEFAULT_MAX_BUFFER_CAPACITY};
