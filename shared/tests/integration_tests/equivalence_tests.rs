//! Record-form and discrete-form calls must forward equal records.
//!
//! Each test reports the same data twice through one adapter, once per call
//! shape, and compares the two items that reach the channel.

use lumen::capability::TelemetryCapability;
use lumen::models::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, Measurements, MetricTelemetry,
    PageViewTelemetry, Properties, RequestTelemetry, SeverityLevel, SharedError, TraceTelemetry,
};
use std::sync::Arc;
use std::time::Duration;

use super::common::{sent_items, start_time, test_adapter};

fn properties() -> Properties {
    Properties::from([
        ("region".to_string(), "eu-west".to_string()),
        ("tier".to_string(), "gold".to_string()),
    ])
}

fn assert_pair_equal(report: impl FnOnce(&dyn TelemetryCapability)) {
    let (adapter, channel) = test_adapter();
    report(&adapter);
    adapter.flush();

    let items = sent_items(&channel);
    assert_eq!(items.len(), 2, "expected one item per call shape");
    assert_eq!(items[0], items[1]);
}

#[test]
fn test_dependency_full_form() {
    assert_pair_equal(|t| {
        t.track_dependency(
            DependencyTelemetry::new(
                "orders-db",
                "SELECT 1",
                start_time(),
                Duration::from_millis(12),
                true,
            )
            .with_type_name("SQL")
            .with_target("db:5432")
            .with_result_code("0"),
        );
        t.track_dependency_call(
            "SQL",
            "db:5432",
            "orders-db",
            "SELECT 1",
            start_time(),
            Duration::from_millis(12),
            "0",
            true,
        );
    });
}

#[test]
fn test_dependency_short_form() {
    assert_pair_equal(|t| {
        t.track_dependency(DependencyTelemetry::new(
            "payments",
            "POST /charge",
            start_time(),
            Duration::from_secs(1),
            false,
        ));
        t.track_dependency_command(
            "payments",
            "POST /charge",
            start_time(),
            Duration::from_secs(1),
            false,
        );
    });
}

#[test]
fn test_event_forms() {
    assert_pair_equal(|t| {
        t.track_event(
            EventTelemetry::new("checkout_completed")
                .with_property("currency", "USD")
                .with_metric("amount", 42.5),
        );
        t.track_event_named(
            "checkout_completed",
            Some(Properties::from([("currency".to_string(), "USD".to_string())])),
            Some(Measurements::from([("amount".to_string(), 42.5)])),
        );
    });
}

#[test]
fn test_event_forms_without_maps() {
    assert_pair_equal(|t| {
        t.track_event(EventTelemetry::new("login"));
        t.track_event_named("login", None, None);
    });
}

#[test]
fn test_exception_forms_share_error() {
    let error: SharedError = Arc::new(std::io::Error::other("disk full"));

    assert_pair_equal(|t| {
        t.track_exception(
            ExceptionTelemetry::new(Arc::clone(&error)).with_metric("free_bytes", 0.0),
        );
        t.track_exception_error(
            Arc::clone(&error),
            None,
            Some(Measurements::from([("free_bytes".to_string(), 0.0)])),
        );
    });
}

#[test]
fn test_metric_forms() {
    assert_pair_equal(|t| {
        t.track_metric(MetricTelemetry::new("queue_depth", 17.0).with_property("queue", "orders"));
        t.track_metric_value(
            "queue_depth",
            17.0,
            Some(Properties::from([("queue".to_string(), "orders".to_string())])),
        );
    });
}

#[test]
fn test_page_view_forms() {
    assert_pair_equal(|t| {
        t.track_page_view(PageViewTelemetry::new("pricing"));
        t.track_page_view_named("pricing");
    });
}

#[test]
fn test_request_forms() {
    assert_pair_equal(|t| {
        t.track_request(RequestTelemetry::new(
            "GET /orders",
            start_time(),
            Duration::from_millis(35),
            "200",
            true,
        ));
        t.track_request_call(
            "GET /orders",
            start_time(),
            Duration::from_millis(35),
            "200",
            true,
        );
    });
}

#[test]
fn test_trace_message_form() {
    assert_pair_equal(|t| {
        t.track_trace(TraceTelemetry::new("cache miss"));
        t.track_trace_message("cache miss");
    });
}

#[test]
fn test_trace_severity_form() {
    assert_pair_equal(|t| {
        t.track_trace(TraceTelemetry::new("slow query").with_severity(SeverityLevel::Warning));
        t.track_trace_with_severity("slow query", SeverityLevel::Warning);
    });
}

#[test]
fn test_trace_properties_form() {
    assert_pair_equal(|t| {
        t.track_trace(
            TraceTelemetry::new("rebalanced")
                .with_property("region", "eu-west")
                .with_property("tier", "gold"),
        );
        t.track_trace_with_properties("rebalanced", properties());
    });
}

#[test]
fn test_trace_severity_and_properties_form() {
    assert_pair_equal(|t| {
        t.track_trace(
            TraceTelemetry::new("failover")
                .with_severity(SeverityLevel::Critical)
                .with_property("region", "eu-west")
                .with_property("tier", "gold"),
        );
        t.track_trace_with_severity_and_properties(
            "failover",
            SeverityLevel::Critical,
            properties(),
        );
    });
}
