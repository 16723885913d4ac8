//! Integration tests for the production adapter.
//!
//! Tests cover:
//! - Example scenarios for events and traces
//! - Instrumentation key handling
//! - Disabled telemetry
//! - Flush behavior

use lumen::capability::TelemetryCapability;
use lumen::models::{
    EventTelemetry, Measurements, Properties, SeverityLevel, Telemetry, TraceTelemetry,
};
use lumen::TelemetryConfiguration;
use std::sync::Arc;

use super::common::{sent_items, start_time, test_adapter, test_adapter_with, TEST_KEY};

#[test]
fn test_checkout_event_is_forwarded_verbatim() {
    let (adapter, channel) = test_adapter();

    adapter.track_event_named(
        "checkout_completed",
        Some(Properties::from([("currency".to_string(), "USD".to_string())])),
        Some(Measurements::from([("amount".to_string(), 42.50)])),
    );
    adapter.flush();

    let items = sent_items(&channel);
    assert_eq!(items.len(), 1);

    let Telemetry::Event(event) = &items[0] else {
        panic!("expected an event, got {:?}", items[0]);
    };
    assert_eq!(event.name, "checkout_completed");
    assert_eq!(
        event.properties.as_ref().and_then(|p| p.get("currency")),
        Some(&"USD".to_string())
    );
    assert_eq!(
        event.metrics.as_ref().and_then(|m| m.get("amount")),
        Some(&42.50)
    );
}

#[test]
fn test_trace_message_uses_default_severity() {
    let (adapter, channel) = test_adapter();

    adapter.track_trace_message("cache miss");
    adapter.flush();

    let items = sent_items(&channel);
    assert_eq!(items, vec![Telemetry::Trace(TraceTelemetry::new("cache miss"))]);

    let Telemetry::Trace(trace) = &items[0] else {
        unreachable!();
    };
    assert!(trace.properties.is_none());
    assert_eq!(trace.effective_severity(), SeverityLevel::Information);
}

#[test]
fn test_envelopes_carry_instrumentation_key() {
    let (adapter, channel) = test_adapter();

    adapter.track_page_view_named("home");
    adapter.flush();

    let sent = channel.sent().unwrap();
    assert_eq!(sent[0].instrumentation_key, TEST_KEY);
}

#[test]
fn test_get_after_set_returns_key() {
    let (adapter, _channel) = test_adapter();

    for key in ["ikey-a", "", "not a guid at all", "ключ"] {
        adapter.set_instrumentation_key(key);
        assert_eq!(adapter.instrumentation_key(), key);
    }
}

#[test]
fn test_disabled_track_calls_are_silent_no_ops() {
    let (adapter, channel) =
        test_adapter_with(TelemetryConfiguration::default().with_disable_telemetry(true));
    assert!(!adapter.is_enabled());

    adapter.track_event(EventTelemetry::new("e"));
    adapter.track_event_named("e", None, None);
    adapter.track_metric_value("m", 1.0, None);
    adapter.track_page_view_named("p");
    adapter.track_trace_message("t");
    adapter.track_trace_with_severity("t", SeverityLevel::Critical);
    adapter.track_request_call("r", start_time(), std::time::Duration::ZERO, "200", true);
    adapter.track_dependency_command("d", "cmd", start_time(), std::time::Duration::ZERO, true);
    adapter.track_exception_error(Arc::new(std::fmt::Error), None, None);
    adapter.flush();

    assert_eq!(adapter.client().buffered_count(), 0);
    assert_eq!(channel.count().unwrap(), 0);
}

#[test]
fn test_flush_never_fails() {
    let (adapter, channel) = test_adapter();

    adapter.flush();
    adapter.track_trace_message("pending");
    adapter.flush();
    adapter.flush();

    assert_eq!(channel.count().unwrap(), 1);
}

#[test]
fn test_auto_flush_at_capacity() {
    let (adapter, channel) =
        test_adapter_with(TelemetryConfiguration::default().with_max_buffer_capacity(3));

    for i in 0..7 {
        adapter.track_metric_value("ticks", f64::from(i), None);
    }

    assert_eq!(channel.count().unwrap(), 6);
    assert_eq!(adapter.client().buffered_count(), 1);
}
