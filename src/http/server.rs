//! HTTP server hosting a request-order registry.
//!
//! # Responsibilities
//! - Create Axum Router forwarding every method and path to the registry
//! - Wire up middleware (tracing, timeout)
//! - Buffer request bodies before dispatch
//! - Serialize dispatch through a mutex
//! - Provide an ephemeral-port test server with graceful shutdown

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ListenerConfig;
use crate::http::request::RequestContext;
use crate::http::response::ResponseRecorder;
use crate::lifecycle::Shutdown;
use crate::reporter::Reporter;
use crate::routing::Router as MuxRouter;

/// Registry shared between the test and the server.
pub type SharedRouter = Arc<Mutex<MuxRouter>>;

/// Lock the shared registry, recovering from a panicked behavior.
pub fn lock(router: &SharedRouter) -> MutexGuard<'_, MuxRouter> {
    router.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Application state injected into handlers.
#[derive(Clone)]
struct AppState {
    router: SharedRouter,
    body_limit: usize,
}

/// HTTP server forwarding every request to a registry.
pub struct MuxServer {
    app: Router,
    router: SharedRouter,
}

impl MuxServer {
    /// Create a server over a shared registry.
    pub fn new(router: SharedRouter, config: &ListenerConfig) -> Self {
        let state = AppState {
            router: router.clone(),
            body_limit: config.body_limit_bytes,
        };
        let app = Self::build_router(config, state);
        Self { app, router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ListenerConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(mux_handler))
            .route("/", any(mux_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The registry this server dispatches to.
    pub fn router(&self) -> SharedRouter {
        self.router.clone()
    }

    /// The Axum application, for in-process use.
    pub fn into_app(self) -> Router {
        self.app
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Mux server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("Mux server stopped");
        Ok(())
    }
}

/// Buffers the request, then dispatches it while holding the registry lock.
async fn mux_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = match axum::body::to_bytes(body, state.body_limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
            Bytes::new()
        }
    };

    let ctx = RequestContext::from_parts(parts, body);
    let mut recorder = ResponseRecorder::new();
    {
        let mut router = lock(&state.router);
        router.dispatch(ctx.method().as_str(), ctx.path(), &mut recorder, &ctx);
    }
    recorder.into_response()
}

/// A mux server running on a background task.
///
/// ```no_run
/// use axum::http::StatusCode;
/// use testmux::{CollectingReporter, Router, TestServer};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.register_resp("GET", "/foo", StatusCode::OK, "Hello");
///
/// let server = TestServer::start(router).await?;
/// // point the client under test at server.url("/foo") ...
///
/// let mut reporter = CollectingReporter::new();
/// let ok = server.finish(&mut reporter).await?;
/// # Ok(())
/// # }
/// ```
pub struct TestServer {
    addr: SocketAddr,
    router: SharedRouter,
    shutdown: Shutdown,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Start on an ephemeral loopback port with default settings.
    pub async fn start(router: MuxRouter) -> Result<Self, ServerError> {
        Self::start_with(router, &ListenerConfig::default()).await
    }

    /// Start with explicit listener settings.
    pub async fn start_with(router: MuxRouter, config: &ListenerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.bind_address)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.bind_address.clone(),
                source,
            })?;
        let addr = listener.local_addr()?;

        let router = Arc::new(Mutex::new(router));
        let server = MuxServer::new(router.clone(), config);
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        let handle = tokio::spawn(server.run(listener, signal));

        Ok(Self {
            addr,
            router,
            shutdown,
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path_and_query` on this server.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    pub fn router(&self) -> SharedRouter {
        self.router.clone()
    }

    /// Stop the server and wait for in-flight requests to complete.
    pub async fn shutdown(self) -> Result<SharedRouter, ServerError> {
        let notified = self.shutdown.trigger();
        tracing::info!(address = %self.addr, notified, "Stopping test server");
        self.handle.await??;
        Ok(self.router)
    }

    /// Stop the server, then verify the registry.
    pub async fn finish(self, reporter: &mut dyn Reporter) -> Result<bool, ServerError> {
        let router = self.shutdown().await?;
        let ok = lock(&router).verify(reporter);
        Ok(ok)
    }
}
