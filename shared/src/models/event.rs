//! Custom event data model.

use super::{Measurements, Properties};
use serde::{Deserialize, Serialize};

/// A discrete named occurrence, optionally classified and measured.
///
/// # Example
///
/// ```
/// use lumen::models::EventTelemetry;
///
/// let event = EventTelemetry::new("checkout_completed")
///     .with_property("currency", "USD")
///     .with_metric("amount", 42.5);
///
/// assert_eq!(event.name, "checkout_completed");
/// assert_eq!(event.metrics.unwrap().get("amount"), Some(&42.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTelemetry {
    /// The event name.
    pub name: String,

    /// Named string values used to search and classify the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Measurements associated with the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Measurements>,
}

impl EventTelemetry {
    /// Creates an event with no properties or metrics.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: None,
            metrics: None,
        }
    }

    /// Adds a property, creating the property map if needed.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a measurement, creating the metric map if needed.
    #[must_use]
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics
            .get_or_insert_with(Measurements::new)
            .insert(key.into(), value);
        self
    }
}
