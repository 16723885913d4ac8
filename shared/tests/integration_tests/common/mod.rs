//! Common test utilities and helpers for integration tests.

use lumen::chrono::{DateTime, FixedOffset, TimeZone};
use lumen::client::InMemoryChannel;
use lumen::models::Telemetry;
use lumen::{TelemetryAdapter, TelemetryConfiguration};
use std::sync::Arc;

/// Instrumentation key every test adapter starts with.
pub const TEST_KEY: &str = "ikey-integration";

/// Creates an adapter wired to a fresh in-memory channel.
///
/// # Returns
///
/// A tuple containing the adapter and a handle to its channel.
pub fn test_adapter() -> (TelemetryAdapter, InMemoryChannel) {
    test_adapter_with(TelemetryConfiguration::default())
}

/// Creates an adapter from `config`, replacing its channel with a fresh
/// in-memory one.
pub fn test_adapter_with(config: TelemetryConfiguration) -> (TelemetryAdapter, InMemoryChannel) {
    let channel = InMemoryChannel::new();
    let adapter = TelemetryAdapter::with_configuration(
        config
            .with_instrumentation_key(TEST_KEY)
            .with_channel(Arc::new(channel.clone())),
    );
    (adapter, channel)
}

/// Returns the records the channel received, without their envelopes.
pub fn sent_items(channel: &InMemoryChannel) -> Vec<Telemetry> {
    tokio_test::assert_ok!(channel.sent())
        .into_iter()
        .map(|envelope| envelope.data)
        .collect()
}

/// A fixed, non-UTC start time.
pub fn start_time() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .unwrap()
}
