//! Pre-aggregated metric data model.

use super::Properties;
use serde::{Deserialize, Serialize};

/// A single, already aggregated numeric observation.
///
/// # Example
///
/// ```
/// use lumen::models::MetricTelemetry;
///
/// let metric = MetricTelemetry::new("queue_depth", 17.0).with_property("queue", "orders");
/// assert_eq!(metric.value, 17.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTelemetry {
    /// The metric name.
    pub name: String,

    /// The metric value.
    pub value: f64,

    /// Named string values used to classify and filter the metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl MetricTelemetry {
    /// Creates a metric with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            properties: None,
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
}
