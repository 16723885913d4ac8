//! Production binding of the telemetry capability.
//!
//! `TelemetryAdapter` owns exactly one [`TelemetryClient`] and forwards every
//! capability operation to it unchanged. It does not cache, batch, retry or
//! filter; those belong to the client. In particular the adapter does not
//! re-check [`is_enabled`](TelemetryCapability::is_enabled) before tracking,
//! because the client already drops signals while disabled.

use crate::capability::TelemetryCapability;
use crate::client::TelemetryClient;
use crate::config::TelemetryConfiguration;
use crate::models::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, MetricTelemetry, PageViewTelemetry,
    RequestTelemetry, TraceTelemetry,
};

/// Wraps a [`TelemetryClient`] behind [`TelemetryCapability`].
///
/// # Example
///
/// ```
/// use lumen::adapter::TelemetryAdapter;
/// use lumen::capability::TelemetryCapability;
/// use lumen::client::InMemoryChannel;
/// use lumen::config::TelemetryConfiguration;
/// use std::sync::Arc;
///
/// let channel = InMemoryChannel::new();
/// let telemetry: Arc<dyn TelemetryCapability> = Arc::new(TelemetryAdapter::with_configuration(
///     TelemetryConfiguration::default().with_channel(Arc::new(channel.clone())),
/// ));
///
/// telemetry.track_trace_message("cache miss");
/// telemetry.flush();
///
/// assert_eq!(channel.count().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct TelemetryAdapter {
    client: TelemetryClient,
}

impl TelemetryAdapter {
    /// Creates an adapter over a client using the ambient configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: TelemetryClient::new(),
        }
    }

    /// Creates an adapter over a client using the given configuration.
    #[must_use]
    pub fn with_configuration(configuration: TelemetryConfiguration) -> Self {
        Self {
            client: TelemetryClient::with_configuration(configuration),
        }
    }

    /// Returns the wrapped client.
    #[must_use]
    pub fn client(&self) -> &TelemetryClient {
        &self.client
    }
}

impl Default for TelemetryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryCapability for TelemetryAdapter {
    fn instrumentation_key(&self) -> String {
        self.client.instrumentation_key()
    }

    fn set_instrumentation_key(&self, key: &str) {
        self.client.set_instrumentation_key(key);
    }

    fn flush(&self) {
        self.client.flush();
    }

    fn is_enabled(&self) -> bool {
        self.client.is_enabled()
    }

    fn track_dependency(&self, telemetry: DependencyTelemetry) {
        self.client.track_dependency(telemetry);
    }

    fn track_event(&self, telemetry: EventTelemetry) {
        self.client.track_event(telemetry);
    }

    fn track_exception(&self, telemetry: ExceptionTelemetry) {
        self.client.track_exception(telemetry);
    }

    fn track_metric(&self, telemetry: MetricTelemetry) {
        self.client.track_metric(telemetry);
    }

    fn track_page_view(&self, telemetry: PageViewTelemetry) {
        self.client.track_page_view(telemetry);
    }

    fn track_request(&self, telemetry: RequestTelemetry) {
        self.client.track_request(telemetry);
    }

    fn track_trace(&self, telemetry: TraceTelemetry) {
        self.client.track_trace(telemetry);
    }
}
