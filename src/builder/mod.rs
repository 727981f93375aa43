//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, a serializable configuration and
//! the `state_enum!` macro for declaring states with minimal boilerplate.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::{machine_from_json, MachineConfig};
pub use error::{BuildError, ConfigError};
pub use machine::MachineBuilder;
