//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, body buffering)
//!     → request.rs (snapshot method, path, headers, body)
//!     → [routing registry dispatches under a lock]
//!     → response.rs (recorded status, headers, body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestContext;
pub use response::{ResponseRecorder, ResponseWriter};
pub use server::{MuxServer, ServerError, SharedRouter, TestServer};
