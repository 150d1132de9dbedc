//! Request-ordering test multiplexer.
//!
//! Register the requests an HTTP client under test is expected to make, in
//! order, with the response each should receive. Dispatch incoming requests
//! against that registry, then verify: out-of-order requests, unexpected
//! requests and never-requested routes are all reported.
//!
//! ```no_run
//! use axum::http::StatusCode;
//! use testmux::{Router, TestServer, CollectingReporter};
//!
//! # async fn scenario() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.register_resp("GET", "/foo", StatusCode::OK, "Hello");
//! router.register_resp("GET", "/bar", StatusCode::OK, "Bonjour");
//!
//! let server = TestServer::start(router).await?;
//! // run the client under test against server.url("/")
//!
//! let mut reporter = CollectingReporter::new();
//! assert!(server.finish(&mut reporter).await?, "{:?}", reporter.messages());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod reporter;
pub mod routing;

pub use config::MuxConfig;
pub use http::{MuxServer, RequestContext, ResponseRecorder, ResponseWriter, TestServer};
pub use lifecycle::Shutdown;
pub use reporter::{CollectingReporter, Reporter, TracingReporter};
pub use routing::{Diagnostic, Router};
