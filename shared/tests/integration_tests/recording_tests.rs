//! Tests for code written against the capability using the recording double.
//!
//! `CheckoutService` stands in for application code: it only knows
//! `Arc<dyn TelemetryCapability>`, so tests inject a `RecordingTelemetry`.

use lumen::capability::TelemetryCapability;
use lumen::models::{EventTelemetry, SeverityLevel, TraceTelemetry};
use lumen::testing::RecordingTelemetry;
use std::sync::Arc;

struct CheckoutService {
    telemetry: Arc<dyn TelemetryCapability>,
}

impl CheckoutService {
    fn complete(&self, amount: f64) {
        if self.telemetry.is_enabled() {
            self.telemetry.track_event(
                EventTelemetry::new("checkout_completed")
                    .with_property("currency", "USD")
                    .with_metric("amount", amount),
            );
        }
        if amount > 1000.0 {
            self.telemetry
                .track_trace_with_severity("large checkout", SeverityLevel::Warning);
        }
    }
}

#[test]
fn test_service_reports_through_injected_double() {
    let recorder = Arc::new(RecordingTelemetry::new());
    let service = CheckoutService {
        telemetry: recorder.clone(),
    };

    service.complete(42.5);
    service.complete(1500.0);

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].metrics.as_ref().unwrap()["amount"], 42.5);
    assert_eq!(
        recorder.traces(),
        vec![TraceTelemetry::new("large checkout").with_severity(SeverityLevel::Warning)]
    );
}

#[test]
fn test_disabled_double_skips_assembly_and_records_nothing() {
    let recorder = Arc::new(RecordingTelemetry::new());
    recorder.set_enabled(false);
    let service = CheckoutService {
        telemetry: recorder.clone(),
    };

    service.complete(5000.0);

    assert!(recorder.recorded().is_empty());
}

#[test]
fn test_double_instrumentation_key() {
    let recorder = RecordingTelemetry::new();
    recorder.set_instrumentation_key("ikey-double");

    assert_eq!(recorder.instrumentation_key(), "ikey-double");
}
