//! Scenario configuration subsystem.
//!
//! # Data Flow
//! ```text
//! scenario file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → MuxConfig (validated)
//!     → routes registered in file order
//! ```
//!
//! # Design Decisions
//! - All fields have defaults except a route's method and path
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, MuxConfig, ObservabilityConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
