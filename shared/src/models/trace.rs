//! Trace message data model.
//!
//! Defines `TraceTelemetry`, a free-text diagnostic message, and the
//! `SeverityLevel` scale it is reported at.

use super::Properties;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Trace severity level.
///
/// Levels are ordered from least to most severe, so `Verbose < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Detailed diagnostic output.
    Verbose,
    /// Informational messages.
    #[default]
    Information,
    /// Warning conditions.
    Warning,
    /// Error conditions.
    Error,
    /// Critical/fatal conditions.
    Critical,
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verbose => write!(f, "verbose"),
            Self::Information => write!(f, "information"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Error returned when a string does not name a severity level.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown severity level: '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for SeverityLevel {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// A trace message for display in diagnostic search.
///
/// # Example
///
/// ```
/// use lumen::models::{SeverityLevel, TraceTelemetry};
///
/// let trace = TraceTelemetry::new("cache miss")
///     .with_severity(SeverityLevel::Warning)
///     .with_property("cache", "sessions");
///
/// assert_eq!(trace.effective_severity(), SeverityLevel::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceTelemetry {
    /// The message to display.
    pub message: String,

    /// Severity of the message; `None` means the default level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,

    /// Named string values used to search and classify the trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl TraceTelemetry {
    /// Creates a trace with no severity and no properties.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            properties: None,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn with_severity(mut self, severity: SeverityLevel) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Adds a property, creating the property map if needed.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    /// Severity the trace is reported at, falling back to the default level.
    #[must_use]
    pub fn effective_severity(&self) -> SeverityLevel {
        self.severity.unwrap_or_default()
    }
}
