//! Exception data model.
//!
//! Defines `ExceptionTelemetry`, which carries an error value together with
//! optional classification and measurements. The error is shared behind an
//! `Arc` so the record stays cheap to clone while the caller keeps its own
//! handle to the same error.

use super::{Measurements, Properties};
use serde::{Serialize, Serializer};
use std::error::Error;
use std::sync::Arc;

/// A thread-safe, shareable error value.
pub type SharedError = Arc<dyn Error + Send + Sync>;

/// An error reported for display in diagnostic search.
///
/// Two records are equal when their properties and metrics match and their
/// errors are either the same value or render the same message chain.
///
/// # Example
///
/// ```
/// use lumen::models::ExceptionTelemetry;
///
/// let error = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
/// let exception = ExceptionTelemetry::from_error(error).with_property("route", "/orders");
///
/// assert_eq!(exception.message(), "upstream timed out");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionTelemetry {
    /// The error to report.
    #[serde(serialize_with = "serialize_error")]
    pub error: SharedError,

    /// Named string values used to classify and search for the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Additional values associated with the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Measurements>,
}

impl ExceptionTelemetry {
    /// Creates a record for an already shared error.
    #[must_use]
    pub fn new(error: SharedError) -> Self {
        Self {
            error,
            properties: None,
            metrics: None,
        }
    }

    /// Creates a record that takes ownership of `error`.
    #[must_use]
    pub fn from_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::new(Arc::new(error))
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

    /// The top-level error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Messages of the error's `source()` chain, outermost first.
    #[must_use]
    pub fn sources(&self) -> Vec<String> {
        source_chain(&self.error)
    }
}

impl PartialEq for ExceptionTelemetry {
    fn eq(&self, other: &Self) -> bool {
        let same_error = Arc::ptr_eq(&self.error, &other.error)
            || (self.message() == other.message() && self.sources() == other.sources());
        same_error && self.properties == other.properties && self.metrics == other.metrics
    }
}

#[derive(Serialize)]
struct ErrorDetails {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sources: Vec<String>,
}

fn source_chain(error: &SharedError) -> Vec<String> {
    let mut sources = Vec::new();
    let mut current = error.source();
    while let Some(source) = current {
        sources.push(source.to_string());
        current = source.source();
    }
    sources
}

fn serialize_error<S: Serializer>(error: &SharedError, serializer: S) -> Result<S::Ok, S::Error> {
    ErrorDetails {
        message: error.to_string(),
        sources: source_chain(error),
    }
    .serialize(serializer)
}
