//! Request-order registry.
//!
//! # Data Flow
//! ```text
//! Registration (before the client under test runs):
//!     register_resp / register_fn
//!     → route.rs (Route { method, path, behavior, visited: false })
//!     → appended to router.rs in expected order
//!
//! Dispatch (once per inbound request, sequential):
//!     (method, path, request context)
//!     → router.rs (first unvisited route with equal key)
//!     → route behavior writes the response, or a 404 is written
//!     → diagnostic.rs (out-of-order / unexpected recorded)
//!     → cursor advances
//!
//! Verification (end of scenario):
//!     unvisited routes → diagnostics → reporter
//! ```
//!
//! # Design Decisions
//! - Insertion order is the expected request order
//! - Deviations are data, surfaced only at verification
//! - Not thread-safe: wrap in a mutex to share with a server

pub mod diagnostic;
pub mod route;
pub mod router;

pub use diagnostic::Diagnostic;
pub use route::{Behavior, HandlerFn, Route};
pub use router::Router;
