//! Lumen CLI
//!
//! Command-line interface that reports a single telemetry signal through the
//! Lumen adapter, then flushes.
//!
//! # Usage
//!
//! ```bash
//! lumen --help
//! lumen event checkout_completed -p currency=USD -m amount=42.5
//! lumen trace "cache miss" --severity warning
//! ```

#![deny(unsafe_code)]

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use lumen::capability::TelemetryCapability;
use lumen::models::SeverityLevel;
use lumen::{TelemetryAdapter, TelemetryConfiguration};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Lumen CLI - report one telemetry signal
#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Instrumentation key to attribute the signal to
    #[arg(short, long, env = "LUMEN_INSTRUMENTATION_KEY")]
    instrumentation_key: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report a custom event
    Event {
        /// Event name
        name: String,
        /// Property as key=value (repeatable)
        #[arg(short = 'p', long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
        /// Measurement as key=number (repeatable)
        #[arg(short = 'm', long = "metric", value_parser = parse_measurement)]
        metrics: Vec<(String, f64)>,
    },
    /// Report a pre-aggregated metric
    Metric {
        /// Metric name
        name: String,
        /// Metric value
        value: f64,
        /// Property as key=value (repeatable)
        #[arg(short = 'p', long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },
    /// Report a trace message
    Trace {
        /// Message text
        message: String,
        /// Severity: verbose, information, warning, error or critical
        #[arg(short, long)]
        severity: Option<SeverityLevel>,
        /// Property as key=value (repeatable)
        #[arg(short = 'p', long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },
    /// Report a page view
    PageView {
        /// Page name
        name: String,
    },
    /// Report a handled request that just finished
    Request {
        /// Request name, such as "GET /orders"
        name: String,
        /// Time taken, in milliseconds
        duration_ms: u64,
        /// Response status code
        response_code: String,
        /// Mark the request as failed
        #[arg(long)]
        failed: bool,
    },
    /// Report a dependency call that just finished
    Dependency {
        /// Dependency type, such as SQL or HTTP
        type_name: String,
        /// Call target, such as a host name
        target: String,
        /// Dependency name
        name: String,
        /// Command sent to the dependency
        data: String,
        /// Time taken, in milliseconds
        duration_ms: u64,
        /// Result code
        result_code: String,
        /// Mark the call as failed
        #[arg(long)]
        failed: bool,
    },
    /// Report an error
    Exception {
        /// Error message
        message: String,
        /// Property as key=value (repeatable)
        #[arg(short = 'p', long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },
}

/// Error reported by the `exception` command.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ReportedError(String);

fn parse_property(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_measurement(s: &str) -> Result<(String, f64), String> {
    let (key, value) = parse_property(s)?;
    let value = value
        .parse()
        .map_err(|_| format!("expected a number for '{key}', got '{value}'"))?;
    Ok((key, value))
}

fn to_map<V>(pairs: Vec<(String, V)>) -> Option<HashMap<String, V>> {
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.into_iter().collect())
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Start time of an operation that took `duration` and finished at `end`.
fn started_before(
    end: DateTime<FixedOffset>,
    duration: Duration,
) -> Result<DateTime<FixedOffset>> {
    let elapsed = chrono::Duration::from_std(duration)?;
    end.checked_sub_signed(elapsed).ok_or_else(|| {
        anyhow!(
            "duration of {}ms starts before the earliest representable time",
            duration.as_millis()
        )
    })
}

/// Reports the signal described by `command`.
fn report(telemetry: &dyn TelemetryCapability, command: Commands) -> Result<()> {
    let now = chrono::Local::now().fixed_offset();

    match command {
        Commands::Event {
            name,
            properties,
            metrics,
        } => telemetry.track_event_named(&name, to_map(properties), to_map(metrics)),
        Commands::Metric {
            name,
            value,
            properties,
        } => telemetry.track_metric_value(&name, value, to_map(properties)),
        Commands::Trace {
            message,
            severity,
            properties,
        } => match (severity, to_map(properties)) {
            (None, None) => telemetry.track_trace_message(&message),
            (Some(severity), None) => telemetry.track_trace_with_severity(&message, severity),
            (None, Some(properties)) => telemetry.track_trace_with_properties(&message, properties),
            (Some(severity), Some(properties)) => {
                telemetry.track_trace_with_severity_and_properties(&message, severity, properties);
            }
        },
        Commands::PageView { name } => telemetry.track_page_view_named(&name),
        Commands::Request {
            name,
            duration_ms,
            response_code,
            failed,
        } => {
            let duration = Duration::from_millis(duration_ms);
            let start_time = started_before(now, duration)?;
            telemetry.track_request_call(&name, start_time, duration, &response_code, !failed);
        }
        Commands::Dependency {
            type_name,
            target,
            name,
            data,
            duration_ms,
            result_code,
            failed,
        } => {
            let duration = Duration::from_millis(duration_ms);
            let start_time = started_before(now, duration)?;
            telemetry.track_dependency_call(
                &type_name,
                &target,
                &name,
                &data,
                start_time,
                duration,
                &result_code,
                !failed,
            );
        }
        Commands::Exception {
            message,
            properties,
        } => telemetry.track_exception_error(
            Arc::new(ReportedError(message)),
            to_map(properties),
            None,
        ),
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json);

    let mut config = TelemetryConfiguration::from_env()?;
    if let Some(key) = cli.instrumentation_key {
        config = config.with_instrumentation_key(key);
    }

    let telemetry: Arc<dyn TelemetryCapability> =
        Arc::new(TelemetryAdapter::with_configuration(config));

    if !telemetry.is_enabled() {
        tracing::warn!("Telemetry is disabled, nothing will be reported");
    }

    tracing::debug!(command = ?cli.command, "Reporting telemetry");
    report(telemetry.as_ref(), cli.command)?;
    telemetry.flush();

    Ok(())
}
