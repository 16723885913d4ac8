//! Telemetry item wrapper and transmission envelope.

use super::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, MetricTelemetry, PageViewTelemetry,
    RequestTelemetry, TraceTelemetry,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Any one signal record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Telemetry {
    /// An external dependency call.
    Dependency(DependencyTelemetry),
    /// A custom event.
    Event(EventTelemetry),
    /// A reported error.
    Exception(ExceptionTelemetry),
    /// A pre-aggregated metric.
    Metric(MetricTelemetry),
    /// A page view.
    PageView(PageViewTelemetry),
    /// An inbound request.
    Request(RequestTelemetry),
    /// A trace message.
    Trace(TraceTelemetry),
}

impl Telemetry {
    /// Returns the telemetry kind, as used in the serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Dependency(_) => "dependency",
            Self::Event(_) => "event",
            Self::Exception(_) => "exception",
            Self::Metric(_) => "metric",
            Self::PageView(_) => "page_view",
            Self::Request(_) => "request",
            Self::Trace(_) => "trace",
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$record> for Telemetry {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )*
    };
}

impl_from_record! {
    DependencyTelemetry => Dependency,
    EventTelemetry => Event,
    ExceptionTelemetry => Exception,
    MetricTelemetry => Metric,
    PageViewTelemetry => PageView,
    RequestTelemetry => Request,
    TraceTelemetry => Trace,
}

/// A telemetry item stamped for transmission.
///
/// The client wraps every accepted record in an envelope carrying the time it
/// was tracked and the instrumentation key in effect at that moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// When the item was tracked.
    pub time: DateTime<Utc>,

    /// Instrumentation key the item is attributed to.
    pub instrumentation_key: String,

    /// The signal record.
    pub data: Telemetry,
}

impl Envelope {
    /// Wraps `data` with the current time.
    #[must_use]
    pub fn new(instrumentation_key: impl Into<String>, data: Telemetry) -> Self {
        Self {
            time: Utc::now(),
            instrumentation_key: instrumentation_key.into(),
            data,
        }
    }
}
