//! Page view data model.

use serde::{Deserialize, Serialize};

/// A page or view rendered by the application, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViewTelemetry {
    /// Name of the page.
    pub name: String,
}

impl PageViewTelemetry {
    /// Creates a page view record.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
