//! Ordered route registry and dispatch.
//!
//! # Responsibilities
//! - Store routes in the order they are expected to be requested
//! - Match each request to the first unvisited route with the same key
//! - Track a cursor of dispatched requests and record order deviations
//! - Report deviations and never-requested routes at verification time
//!
//! # Design Decisions
//! - Exact `(method, path)` matching, no patterns
//! - Duplicate keys are consumed first-in, first-out
//! - Dispatch never fails: a match or a 404 is always written
//! - No internal locking; hosts serialize dispatch themselves

use axum::http::StatusCode;

use crate::config::RouteConfig;
use crate::http::request::RequestContext;
use crate::http::response::{self, ResponseWriter};
use crate::reporter::{CollectingReporter, Reporter};
use crate::routing::diagnostic::Diagnostic;
use crate::routing::route::{Behavior, Route};

/// Registry of expected requests.
///
/// Routes are matched in registration order and each one is consumed by
/// the first request that matches it. A request is in order when the route
/// it consumes sits at the position given by the number of requests
/// dispatched before it.
///
/// ```
/// use axum::http::{Method, StatusCode};
/// use testmux::{CollectingReporter, RequestContext, ResponseRecorder, Router};
///
/// let mut router = Router::new();
/// router.register_resp("GET", "/foo", StatusCode::OK, "Hello");
///
/// let mut w = ResponseRecorder::new();
/// router.dispatch("GET", "/foo", &mut w, &RequestContext::new(Method::GET, "/foo"));
/// assert_eq!(w.body_str(), "Hello\n");
///
/// let mut reporter = CollectingReporter::new();
/// assert!(router.verify(&mut reporter));
/// ```
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
    index: usize,
    errors: Vec<Diagnostic>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router registering each configured route as a static response.
    ///
    /// Expects validated configuration; an out-of-range status falls back to
    /// 500 so the mismatch is visible to the client under test.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        let mut router = Self::new();
        for rc in routes {
            let status =
                StatusCode::from_u16(rc.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            router.register_resp(rc.method.clone(), rc.path.clone(), status, rc.body.clone());
        }
        router
    }

    /// Register a handler for the given method and path.
    pub fn register_fn<F>(&mut self, method: impl Into<String>, path: impl Into<String>, handler: F)
    where
        F: FnMut(&mut dyn ResponseWriter, &RequestContext) + Send + 'static,
    {
        self.register(method, path, Behavior::Custom(Box::new(handler)));
    }

    /// Register a static status and body. The body is sent with a trailing newline.
    pub fn register_resp(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        status: StatusCode,
        body: impl Into<String>,
    ) {
        self.register(method, path, Behavior::Fixed { status, body: body.into() });
    }

    /// Append a route with an arbitrary behavior.
    pub fn register(&mut self, method: impl Into<String>, path: impl Into<String>, behavior: Behavior) {
        self.routes.push(Route::new(method, path, behavior));
    }

    /// Handle one request.
    ///
    /// Runs the matched route's behavior, or writes a 404 when nothing
    /// matches, then advances the cursor.
    pub fn dispatch(
        &mut self,
        method: &str,
        path: &str,
        w: &mut dyn ResponseWriter,
        req: &RequestContext,
    ) {
        let index = self.index;
        match self.routes.iter().position(|r| r.accepts(method, path)) {
            Some(pos) => {
                self.routes[pos].execute(w, req);
                if pos == index {
                    tracing::debug!(method, path, position = pos, "Request matched");
                } else {
                    tracing::warn!(
                        method,
                        path,
                        expected = index,
                        actual = pos,
                        "Request out of order"
                    );
                    self.errors.push(Diagnostic::OutOfOrder {
                        method: method.to_string(),
                        path: path.to_string(),
                    });
                }
            }
            None => {
                response::not_found(w);
                tracing::warn!(method, path, "Unexpected request");
                self.errors.push(Diagnostic::Unexpected {
                    method: method.to_string(),
                    path: path.to_string(),
                });
            }
        }

        self.index += 1;
    }

    /// Record unvisited routes and hand every diagnostic to `reporter`.
    ///
    /// Returns true when nothing deviated from the registered script. Call
    /// at most once per scenario: each call records unvisited routes again.
    pub fn verify(&mut self, reporter: &mut dyn Reporter) -> bool {
        for rte in self.routes.iter().filter(|r| !r.is_visited()) {
            self.errors.push(Diagnostic::Unvisited {
                method: rte.method.clone(),
                path: rte.path.clone(),
            });
        }

        for err in &self.errors {
            reporter.error(&err.to_string());
        }

        self.errors.is_empty()
    }

    /// Verify and panic with every diagnostic if any were recorded.
    #[track_caller]
    pub fn assert_visited(&mut self) {
        let mut reporter = CollectingReporter::new();
        if !self.verify(&mut reporter) {
            panic!(
                "request order verification failed:\n{}",
                reporter.messages().join("\n")
            );
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Number of requests dispatched so far.
    pub fn cursor(&self) -> usize {
        self.index
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes not yet matched, in registration order.
    pub fn unvisited(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| !r.is_visited())
    }
}
