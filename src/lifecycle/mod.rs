//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → every subscribed server stops accepting → drains → exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
