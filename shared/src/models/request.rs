//! Inbound request data model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One request handled by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTelemetry {
    /// The request name, such as `GET /api/orders`.
    pub name: String,

    /// When the request was received.
    pub start_time: DateTime<FixedOffset>,

    /// Time taken by the application to handle the request.
    pub duration: Duration,

    /// The response status code.
    pub response_code: String,

    /// Whether the request was handled successfully.
    pub success: bool,
}

impl RequestTelemetry {
    /// Creates a request record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_time: DateTime<FixedOffset>,
        duration: Duration,
        response_code: impl Into<String>,
        success: bool,
    ) -> Self {
        Self {
            name: name.into(),
            start_time,
            duration,
            response_code: response_code.into(),
            success,
        }
    }
}
