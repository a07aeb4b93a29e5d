//! Logging infrastructure
//!
//! Provides the `tracing` subscriber used by the binary.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
