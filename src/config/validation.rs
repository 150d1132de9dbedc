//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check methods are HTTP tokens and paths are absolute
//! - Validate value ranges (status codes, timeouts, addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: MuxConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::Method;
use thiserror::Error;

use crate::config::schema::MuxConfig;

/// A semantic problem in a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {index}: method is empty")]
    EmptyMethod { index: usize },

    #[error("route {index}: invalid method {method:?}")]
    InvalidMethod { index: usize, method: String },

    #[error("route {index}: path {path:?} must start with '/'")]
    RelativePath { index: usize, path: String },

    #[error("route {index}: status {status} outside 100..=999")]
    InvalidStatus { index: usize, status: u16 },

    #[error("listener: invalid bind address {0:?}")]
    InvalidBindAddress(String),

    #[error("listener: request timeout must be positive")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every problem.
pub fn validate_config(config: &MuxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.method.is_empty() {
            errors.push(ValidationError::EmptyMethod { index });
        } else if Method::from_bytes(route.method.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidMethod {
                index,
                method: route.method.clone(),
            });
        }

        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                index,
                path: route.path.clone(),
            });
        }

        if !(100..=999).contains(&route.status) {
            errors.push(ValidationError::InvalidStatus {
                index,
                status: route.status,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
