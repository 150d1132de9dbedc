//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing` in every subsystem
//! - `RUST_LOG` overrides the configured filter

pub mod logging;
