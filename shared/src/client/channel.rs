//! Telemetry channels.
//!
//! A channel receives batches of envelopes when the client flushes. The
//! `TelemetryChannel` trait keeps the client independent of where the batch
//! goes; `InMemoryChannel` retains batches for inspection and
//! `TracingChannel` writes them to the `tracing` pipeline.

use crate::models::Envelope;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors that can occur while handing a batch to a channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Failed to acquire lock on the channel.
    #[error("Failed to acquire lock on telemetry channel")]
    LockError,

    /// An envelope could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic transmission error.
    #[error("Transmission error: {0}")]
    Transmission(String),
}

/// Trait for telemetry channel implementations.
///
/// Implementations must be thread-safe (Send + Sync) and must not block the
/// caller on network I/O; a channel that talks to a remote backend queues the
/// batch and transmits it on its own schedule.
pub trait TelemetryChannel: Send + Sync + std::fmt::Debug {
    /// Hands a batch of envelopes to the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be accepted.
    fn send(&self, batch: Vec<Envelope>) -> Result<(), ChannelError>;
}

/// In-memory channel implementation.
///
/// Keeps every envelope it receives in a `Vec` protected by a `RwLock`.
/// Cloning the channel shares the same storage, so a test can keep one handle
/// while the client owns another.
///
/// # Example
///
/// ```
/// use lumen::client::{InMemoryChannel, TelemetryChannel};
/// use lumen::models::{Envelope, TraceTelemetry};
///
/// let channel = InMemoryChannel::new();
/// channel
///     .send(vec![Envelope::new("ikey", TraceTelemetry::new("hello").into())])
///     .unwrap();
///
/// assert_eq!(channel.count().unwrap(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryChannel {
    envelopes: Arc<RwLock<Vec<Envelope>>>,
}

impl InMemoryChannel {
    /// Creates a new empty in-memory channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every envelope received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn sent(&self) -> Result<Vec<Envelope>, ChannelError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|_| ChannelError::LockError)?;
        Ok(envelopes.clone())
    }

    /// Returns the number of envelopes received.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn count(&self) -> Result<usize, ChannelError> {
        let envelopes = self
            .envelopes
            .read()
            .map_err(|_| ChannelError::LockError)?;
        Ok(envelopes.len())
    }

    /// Discards every envelope received so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn clear(&self) -> Result<(), ChannelError> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|_| ChannelError::LockError)?;
        envelopes.clear();
        Ok(())
    }
}

impl TelemetryChannel for InMemoryChannel {
    fn send(&self, batch: Vec<Envelope>) -> Result<(), ChannelError> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|_| ChannelError::LockError)?;
        envelopes.extend(batch);
        Ok(())
    }
}

/// Channel that writes each envelope as a structured `tracing` event.
///
/// Events are emitted at `INFO` under the `lumen::telemetry` target with the
/// envelope serialized to JSON in the `payload` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingChannel;

impl TelemetryChannel for TracingChannel {
    fn send(&self, batch: Vec<Envelope>) -> Result<(), ChannelError> {
        for envelope in &batch {
            let payload = serde_json::to_string(envelope)?;
            tracing::info!(
                target: "lumen::telemetry",
                kind = envelope.data.kind(),
                instrumentation_key = %envelope.instrumentation_key,
                %payload,
                "Telemetry"
            );
        }
        Ok(())
    }
}
