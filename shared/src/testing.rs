//! Test double for the telemetry capability.
//!
//! `RecordingTelemetry` stores every record it is handed so tests can assert
//! on exactly what code under test reported, without a client or channel.

use crate::capability::TelemetryCapability;
use crate::models::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, MetricTelemetry, PageViewTelemetry,
    RequestTelemetry, Telemetry, TraceTelemetry,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Records every forwarded telemetry item in call order.
///
/// While disabled, track calls are ignored and nothing is recorded.
///
/// # Example
///
/// ```
/// use lumen::capability::TelemetryCapability;
/// use lumen::models::EventTelemetry;
/// use lumen::testing::RecordingTelemetry;
///
/// let telemetry = RecordingTelemetry::new();
/// telemetry.track_event_named("checkout_completed", None, None);
///
/// assert_eq!(telemetry.events(), vec![EventTelemetry::new("checkout_completed")]);
/// ```
#[derive(Debug)]
pub struct RecordingTelemetry {
    recorded: RwLock<Vec<Telemetry>>,
    instrumentation_key: RwLock<String>,
    enabled: AtomicBool,
    flushes: AtomicUsize,
}

impl RecordingTelemetry {
    /// Creates an enabled recorder with an empty key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recorded: RwLock::new(Vec::new()),
            instrumentation_key: RwLock::new(String::new()),
            enabled: AtomicBool::new(true),
            flushes: AtomicUsize::new(0),
        }
    }

    /// Turns recording on or off.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Every recorded item, in call order.
    #[must_use]
    pub fn recorded(&self) -> Vec<Telemetry> {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times [`flush`](TelemetryCapability::flush) was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Forgets all recorded items and resets the flush count.
    pub fn clear(&self) {
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.flushes.store(0, Ordering::SeqCst);
    }

    /// Recorded dependency calls.
    #[must_use]
    pub fn dependencies(&self) -> Vec<DependencyTelemetry> {
        self.select(|item| match item {
            Telemetry::Dependency(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<EventTelemetry> {
        self.select(|item| match item {
            Telemetry::Event(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded errors.
    #[must_use]
    pub fn exceptions(&self) -> Vec<ExceptionTelemetry> {
        self.select(|item| match item {
            Telemetry::Exception(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded metrics.
    #[must_use]
    pub fn metrics(&self) -> Vec<MetricTelemetry> {
        self.select(|item| match item {
            Telemetry::Metric(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded page views.
    #[must_use]
    pub fn page_views(&self) -> Vec<PageViewTelemetry> {
        self.select(|item| match item {
            Telemetry::PageView(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded requests.
    #[must_use]
    pub fn requests(&self) -> Vec<RequestTelemetry> {
        self.select(|item| match item {
            Telemetry::Request(t) => Some(t.clone()),
            _ => None,
        })
    }

    /// Recorded trace messages.
    #[must_use]
    pub fn traces(&self) -> Vec<TraceTelemetry> {
        self.select(|item| match item {
            Telemetry::Trace(t) => Some(t.clone()),
            _ => None,
        })
    }

    fn select<T>(&self, pick: impl Fn(&Telemetry) -> Option<T>) -> Vec<T> {
        self.recorded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(pick)
            .collect()
    }

    fn record(&self, item: impl Into<Telemetry>) {
        if !self.is_enabled() {
            return;
        }
        self.recorded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item.into());
    }
}

impl Default for RecordingTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryCapability for RecordingTelemetry {
    fn instrumentation_key(&self) -> String {
        self.instrumentation_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_instrumentation_key(&self, key: &str) {
        *self
            .instrumentation_key
            .write()
            .unwrap_or_else(PoisonError::into_inner) = key.to_owned();
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn track_dependency(&self, telemetry: DependencyTelemetry) {
        self.record(telemetry);
    }

    fn track_event(&self, telemetry: EventTelemetry) {
        self.record(telemetry);
    }

    fn track_exception(&self, telemetry: ExceptionTelemetry) {
        self.record(telemetry);
    }

    fn track_metric(&self, telemetry: MetricTelemetry) {
        self.record(telemetry);
    }

    fn track_page_view(&self, telemetry: PageViewTelemetry) {
        self.record(telemetry);
    }

    fn track_request(&self, telemetry: RequestTelemetry) {
        self.record(telemetry);
    }

    fn track_trace(&self, telemetry: TraceTelemetry) {
        self.record(telemetry);
    }
}
