//! The telemetry capability contract.
//!
//! Application code depends on [`TelemetryCapability`], usually as
//! `Arc<dyn TelemetryCapability>`, and never on a concrete client. The
//! production binding is [`TelemetryAdapter`](crate::adapter::TelemetryAdapter);
//! tests supply [`RecordingTelemetry`](crate::testing::RecordingTelemetry).
//!
//! Every signal can be reported in two shapes: as an assembled record
//! (`track_event`) or as discrete arguments (`track_event_named`). The
//! discrete shapes are provided methods that assemble the record and call the
//! record shape, so both forward exactly the same value.

use crate::models::{
    DependencyTelemetry, EventTelemetry, ExceptionTelemetry, Measurements, MetricTelemetry,
    PageViewTelemetry, Properties, RequestTelemetry, SeverityLevel, SharedError, TraceTelemetry,
};
use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Trait for telemetry sinks.
///
/// Track operations are fire-and-forget: they return `()`, never block on
/// network I/O, and are safe no-ops while the sink is disabled.
/// Implementations must be thread-safe (Send + Sync).
pub trait TelemetryCapability: Send + Sync {
    /// Returns the instrumentation key signals are attributed to.
    fn instrumentation_key(&self) -> String;

    /// Replaces the instrumentation key. The key is not validated.
    fn set_instrumentation_key(&self, key: &str);

    /// Hands buffered signals off for transmission.
    ///
    /// Returns once the hand-off is initiated; remote delivery is not awaited.
    fn flush(&self);

    /// Whether signals are currently forwarded.
    ///
    /// Callers may skip expensive record assembly when this is `false`.
    fn is_enabled(&self) -> bool;

    /// Reports one external dependency call.
    fn track_dependency(&self, telemetry: DependencyTelemetry);

    /// Reports one custom event.
    fn track_event(&self, telemetry: EventTelemetry);

    /// Reports one error.
    fn track_exception(&self, telemetry: ExceptionTelemetry);

    /// Reports one pre-aggregated metric.
    fn track_metric(&self, telemetry: MetricTelemetry);

    /// Reports one page view.
    fn track_page_view(&self, telemetry: PageViewTelemetry);

    /// Reports one handled request.
    fn track_request(&self, telemetry: RequestTelemetry);

    /// Reports one trace message.
    fn track_trace(&self, telemetry: TraceTelemetry);

    /// Reports a dependency call from its full set of fields.
    #[allow(clippy::too_many_arguments)]
    fn track_dependency_call(
        &self,
        type_name: &str,
        target: &str,
        name: &str,
        data: &str,
        start_time: DateTime<FixedOffset>,
        duration: Duration,
        result_code: &str,
        success: bool,
    ) {
        self.track_dependency(
            DependencyTelemetry::new(name, data, start_time, duration, success)
                .with_type_name(type_name)
                .with_target(target)
                .with_result_code(result_code),
        );
    }

    /// Reports a dependency call identified only by name and command.
    ///
    /// Type, target and result code are left unset.
    fn track_dependency_command(
        &self,
        name: &str,
        command: &str,
        start_time: DateTime<FixedOffset>,
        duration: Duration,
        success: bool,
    ) {
        self.track_dependency(DependencyTelemetry::new(
            name, command, start_time, duration, success,
        ));
    }

    /// Reports an event from its name and optional maps.
    fn track_event_named(
        &self,
        name: &str,
        properties: Option<Properties>,
        metrics: Option<Measurements>,
    ) {
        self.track_event(EventTelemetry {
            name: name.to_owned(),
            properties,
            metrics,
        });
    }

    /// Reports an error value with optional maps.
    fn track_exception_error(
        &self,
        error: SharedError,
        properties: Option<Properties>,
        metrics: Option<Measurements>,
    ) {
        self.track_exception(ExceptionTelemetry {
            error,
            properties,
            metrics,
        });
    }

    /// Reports a metric from its name, value and optional properties.
    fn track_metric_value(&self, name: &str, value: f64, properties: Option<Properties>) {
        self.track_metric(MetricTelemetry {
            name: name.to_owned(),
            value,
            properties,
        });
    }

    /// Reports a page view by name.
    fn track_page_view_named(&self, name: &str) {
        self.track_page_view(PageViewTelemetry::new(name));
    }

    /// Reports a handled request from its fields.
    fn track_request_call(
        &self,
        name: &str,
        start_time: DateTime<FixedOffset>,
        duration: Duration,
        response_code: &str,
        success: bool,
    ) {
        self.track_request(RequestTelemetry::new(
            name,
            start_time,
            duration,
            response_code,
            success,
        ));
    }

    /// Reports a trace message at the default severity.
    fn track_trace_message(&self, message: &str) {
        self.track_trace(TraceTelemetry::new(message));
    }

    /// Reports a trace message at the given severity.
    fn track_trace_with_severity(&self, message: &str, severity: SeverityLevel) {
        self.track_trace(TraceTelemetry::new(message).with_severity(severity));
    }

    /// Reports a trace message with properties at the default severity.
    fn track_trace_with_properties(&self, message: &str, properties: Properties) {
        self.track_trace(TraceTelemetry {
            message: message.to_owned(),
            severity: None,
            properties: Some(properties),
        });
    }

    /// Reports a trace message with severity and properties.
    fn track_trace_with_severity_and_properties(
        &self,
        message: &str,
        severity: SeverityLevel,
        properties: Properties,
    ) {
        self.track_trace(TraceTelemetry {
            message: message.to_owned(),
            severity: Some(severity),
            properties: Some(properties),
        });
    }
}

/// A sink that is always disabled and discards everything.
///
/// Useful where a capability is required but telemetry is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl TelemetryCapability for NoopTelemetry {
    fn instrumentation_key(&self) -> String {
        String::new()
    }

    fn set_instrumentation_key(&self, _key: &str) {}

    fn flush(&self) {}

    fn is_enabled(&self) -> bool {
        false
    }

    fn track_dependency(&self, _telemetry: DependencyTelemetry) {}

    fn track_event(&self, _telemetry: EventTelemetry) {}

    fn track_exception(&self, _telemetry: ExceptionTelemetry) {}

    fn track_metric(&self, _telemetry: MetricTelemetry) {}

    fn track_page_view(&self, _telemetry: PageViewTelemetry) {}

    fn track_request(&self, _telemetry: RequestTelemetry) {}

    fn track_trace(&self, _telemetry: TraceTelemetry) {}
}
