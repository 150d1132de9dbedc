//! Deviations from the registered request script.

use thiserror::Error;

/// A recorded deviation. `Display` yields the message delivered to reporters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Matched a route, but not the one at the cursor.
    #[error("Request out of order: {method} {path}")]
    OutOfOrder { method: String, path: String },

    /// No unvisited route matched.
    #[error("Unexpected request: {method} {path}")]
    Unexpected { method: String, path: String },

    /// Registered but never requested.
    #[error("Unvisited route: {method} {path}")]
    Unvisited { method: String, path: String },
}
