//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from scenario files.

use serde::{Deserialize, Serialize};

/// Root configuration of a scenario.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MuxConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Expected requests, in order.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. Port 0 picks an ephemeral port.
    pub bind_address: String,

    /// Maximum request body buffered before dispatch.
    pub body_limit_bytes: usize,

    /// Per-request timeout.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:0".to_string(),
            body_limit_bytes: 2 * 1024 * 1024,
            request_timeout_secs: 30,
        }
    }
}

/// A single expected request and its static response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// HTTP method, compared exactly (e.g., "GET").
    pub method: String,

    /// Request path, compared exactly (e.g., "/foo").
    pub path: String,

    /// Response status code.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body. A trailing newline is appended when served.
    #[serde(default)]
    pub body: String,
}

fn default_status() -> u16 {
    200
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: crate::observability::logging::DEFAULT_FILTER.to_string(),
        }
    }
}
