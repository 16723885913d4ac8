//! Lumen Telemetry Seam
//!
//! This crate lets application code report operational signals (dependency
//! calls, events, exceptions, metrics, page views, requests and trace
//! messages) through one swappable abstraction.
//!
//! # Modules
//!
//! - [`capability`] - The `TelemetryCapability` contract callers depend on
//! - [`adapter`] - `TelemetryAdapter`, the production binding to a client
//! - [`client`] - The buffering `TelemetryClient` and its channels
//! - [`config`] - Client configuration loaded from the environment
//! - [`models`] - Signal records
//! - [`testing`] - `RecordingTelemetry`, a double for unit tests
//!
//! # Example
//!
//! ```
//! use lumen::adapter::TelemetryAdapter;
//! use lumen::capability::TelemetryCapability;
//! use lumen::config::TelemetryConfiguration;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let telemetry: Arc<dyn TelemetryCapability> = Arc::new(TelemetryAdapter::with_configuration(
//!     TelemetryConfiguration::default().with_instrumentation_key("ikey-123"),
//! ));
//!
//! telemetry.track_event_named(
//!     "checkout_completed",
//!     Some(HashMap::from([("currency".to_string(), "USD".to_string())])),
//!     Some(HashMap::from([("amount".to_string(), 42.5)])),
//! );
//! telemetry.flush();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapter;
pub mod capability;
pub mod client;
pub mod config;
pub mod models;
pub mod testing;

pub use adapter::TelemetryAdapter;
pub use capability::{NoopTelemetry, TelemetryCapability};
pub use client::TelemetryClient;
pub use config::TelemetryConfiguration;

/// Re-export common dependencies for convenience.
pub use chrono;
