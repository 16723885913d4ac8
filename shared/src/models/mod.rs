//! Signal records reported through the telemetry capability.
//!
//! Every record is a flat value object: built by the caller, forwarded once,
//! then dropped. The [`Telemetry`] enum wraps any of them for buffering and
//! transmission by the client.

use std::collections::HashMap;

pub mod dependency;
pub mod event;
pub mod exception;
pub mod metric;
pub mod page_view;
pub mod request;
pub mod telemetry;
pub mod trace;

pub use dependency::DependencyTelemetry;
pub use event::EventTelemetry;
pub use exception::{ExceptionTelemetry, SharedError};
pub use metric::MetricTelemetry;
pub use page_view::PageViewTelemetry;
pub use request::RequestTelemetry;
pub use telemetry::{Envelope, Telemetry};
pub use trace::{ParseSeverityError, SeverityLevel, TraceTelemetry};

/// Named string values used to search and classify a signal.
pub type Properties = HashMap<String, String>;

/// Numeric measurements attached to a signal.
pub type Measurements = HashMap<String, f64>;
