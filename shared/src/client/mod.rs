//! The telemetry client.
//!
//! `TelemetryClient` is the concrete sink the adapter forwards to. It stamps
//! each accepted record into an [`Envelope`], buffers it, and hands buffered
//! batches to the configured [`TelemetryChannel`] on flush or when the buffer
//! reaches capacity. Channel failures are logged and never reach the caller.

pub mod channel;

pub use channel::{ChannelError, InMemoryChannel, TelemetryChannel, TracingChannel};

use crate::config::TelemetryConfiguration;
use crate::models::{
    DependencyTelemetry, Envelope, EventTelemetry, ExceptionTelemetry, MetricTelemetry,
    PageViewTelemetry, RequestTelemetry, Telemetry, TraceTelemetry,
};
use std::sync::{Mutex, PoisonError, RwLock};

/// Buffering telemetry client.
///
/// The client is thread-safe: tracking, flushing and key updates may happen
/// concurrently from any number of threads.
///
/// # Example
///
/// ```
/// use lumen::client::{InMemoryChannel, TelemetryClient};
/// use lumen::config::TelemetryConfiguration;
/// use lumen::models::EventTelemetry;
/// use std::sync::Arc;
///
/// let channel = InMemoryChannel::new();
/// let client = TelemetryClient::with_configuration(
///     TelemetryConfiguration::default().with_channel(Arc::new(channel.clone())),
/// );
///
/// client.track_event(EventTelemetry::new("signup"));
/// client.flush();
///
/// assert_eq!(channel.count().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct TelemetryClient {
    configuration: TelemetryConfiguration,
    instrumentation_key: RwLock<String>,
    buffer: Mutex<Vec<Envelope>>,
}

impl TelemetryClient {
    /// Creates a client that sends telemetry with the ambient configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_configuration(TelemetryConfiguration::active())
    }

    /// Creates a client that sends telemetry with the given configuration.
    #[must_use]
    pub fn with_configuration(configuration: TelemetryConfiguration) -> Self {
        let instrumentation_key = RwLock::new(configuration.instrumentation_key.clone());
        Self {
            configuration,
            instrumentation_key,
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub fn configuration(&self) -> &TelemetryConfiguration {
        &self.configuration
    }

    /// Returns the current instrumentation key.
    #[must_use]
    pub fn instrumentation_key(&self) -> String {
        self.instrumentation_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the instrumentation key. Concurrent writers race, last write wins.
    pub fn set_instrumentation_key(&self, key: &str) {
        let mut current = self
            .instrumentation_key
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = key.to_owned();
    }

    /// Whether the client currently accepts telemetry.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.configuration.disable_telemetry
    }

    /// Number of items waiting for the next flush.
    #[must_use]
    pub fn buffered_count(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Tracks any telemetry item.
    ///
    /// Does nothing when the client is disabled. Fills the buffer otherwise,
    /// flushing once it reaches the configured capacity.
    pub fn track(&self, item: impl Into<Telemetry>) {
        let item = item.into();
        if !self.is_enabled() {
            tracing::trace!(kind = item.kind(), "Telemetry disabled, dropping item");
            return;
        }

        let envelope = Envelope::new(self.instrumentation_key(), item);

        let full_batch = {
            let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
            buffer.push(envelope);
            if buffer.len() >= self.configuration.max_buffer_capacity {
                Some(std::mem::take(&mut *buffer))
            } else {
                None
            }
        };

        if let Some(batch) = full_batch {
            self.transmit(batch);
        }
    }

    /// Tracks an external dependency call.
    pub fn track_dependency(&self, telemetry: DependencyTelemetry) {
        self.track(telemetry);
    }

    /// Tracks a custom event.
    pub fn track_event(&self, telemetry: EventTelemetry) {
        self.track(telemetry);
    }

    /// Tracks an error.
    pub fn track_exception(&self, telemetry: ExceptionTelemetry) {
        self.track(telemetry);
    }

    /// Tracks a pre-aggregated metric.
    pub fn track_metric(&self, telemetry: MetricTelemetry) {
        self.track(telemetry);
    }

    /// Tracks a page view.
    pub fn track_page_view(&self, telemetry: PageViewTelemetry) {
        self.track(telemetry);
    }

    /// Tracks an inbound request.
    pub fn track_request(&self, telemetry: RequestTelemetry) {
        self.track(telemetry);
    }

    /// Tracks a trace message.
    pub fn track_trace(&self, telemetry: TraceTelemetry) {
        self.track(telemetry);
    }

    /// Hands every buffered item to the channel.
    ///
    /// Returns once the hand-off is done; remote delivery is up to the channel.
    pub fn flush(&self) {
        let batch = {
            let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *buffer)
        };
        if batch.is_empty() {
            tracing::trace!("Flush requested with empty buffer");
            return;
        }
        self.transmit(batch);
    }

    fn transmit(&self, batch: Vec<Envelope>) {
        let count = batch.len();
        match self.configuration.channel.send(batch) {
            Ok(()) => tracing::debug!(count, "Handed telemetry batch to channel"),
            Err(e) => {
                tracing::warn!(count, error = %e, "Failed to hand telemetry batch to channel");
            }
        }
    }
}

impl Default for TelemetryClient {
    fn default() -> Self {
        Self::new()
    }
}
