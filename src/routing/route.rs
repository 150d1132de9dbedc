//! Registered routes and their response behaviors.
//!
//! # State Machine
//! ```text
//! Unvisited ──(matched by dispatch)──▶ Visited
//! ```
//! `Visited` is terminal.

use std::fmt;

use axum::http::StatusCode;

use crate::http::request::RequestContext;
use crate::http::response::ResponseWriter;

/// Custom behavior signature.
pub type HandlerFn = Box<dyn FnMut(&mut dyn ResponseWriter, &RequestContext) + Send>;

/// What a route does when matched.
pub enum Behavior {
    /// Writes the status, then `body` followed by a single newline.
    Fixed { status: StatusCode, body: String },
    /// Arbitrary handler with full control over the response.
    Custom(HandlerFn),
}

impl Behavior {
    /// Run the behavior against the write target.
    pub fn respond(&mut self, w: &mut dyn ResponseWriter, req: &RequestContext) {
        match self {
            Behavior::Fixed { status, body } => {
                w.set_status(*status);
                w.write_body(body.as_bytes());
                w.write_body(b"\n");
            }
            Behavior::Custom(handler) => handler(w, req),
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Fixed { status, body } => f
                .debug_struct("Fixed")
                .field("status", status)
                .field("body", body)
                .finish(),
            Behavior::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A registered `(method, path)` expectation.
#[derive(Debug)]
pub struct Route {
    pub(crate) method: String,
    pub(crate) path: String,
    behavior: Behavior,
    visited: bool,
}

impl Route {
    pub fn new(method: impl Into<String>, path: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            behavior,
            visited: false,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// True if this route is still available for the given request key.
    pub(crate) fn accepts(&self, method: &str, path: &str) -> bool {
        !self.visited && self.method == method && self.path == path
    }

    /// Run the behavior and mark the route visited.
    pub(crate) fn execute(&mut self, w: &mut dyn ResponseWriter, req: &RequestContext) {
        self.behavior.respond(w, req);
        self.visited = true;
    }
}
