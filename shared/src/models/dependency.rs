//! External dependency call data model.
//!
//! Defines `DependencyTelemetry`, one outbound call (RPC, database query,
//! HTTP request) made by the application, with its timing and outcome.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One call from the application to an external dependency.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use lumen::models::DependencyTelemetry;
/// use std::time::Duration;
///
/// let dependency = DependencyTelemetry::new(
///     "orders-db",
///     "SELECT * FROM orders",
///     Utc::now().fixed_offset(),
///     Duration::from_millis(12),
///     true,
/// )
/// .with_type_name("SQL")
/// .with_target("db.internal:5432")
/// .with_result_code("0");
///
/// assert_eq!(dependency.type_name.as_deref(), Some("SQL"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyTelemetry {
    /// Dependency type, such as `SQL` or `HTTP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Target of the call, such as a host name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Dependency name.
    pub name: String,

    /// Command issued to the dependency, such as a SQL statement or URL.
    pub data: String,

    /// When the dependency was called.
    pub start_time: DateTime<FixedOffset>,

    /// Time taken by the dependency to handle the call.
    pub duration: Duration,

    /// Result code of the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,

    /// Whether the call was handled successfully.
    pub success: bool,
}

impl DependencyTelemetry {
    /// Creates a dependency record without type, target or result code.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        data: impl Into<String>,
        start_time: DateTime<FixedOffset>,
        duration: Duration,
        success: bool,
    ) -> Self {
        Self {
            type_name: None,
            target: None,
            name: name.into(),
            data: data.into(),
            start_time,
            duration,
            result_code: None,
            success,
        }
    }

    /// Sets the dependency type.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the call target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the result code.
    #[must_use]
    pub fn with_result_code(mut self, result_code: impl Into<String>) -> Self {
        self.result_code = Some(result_code.into());
        self
    }
}
