//! Statecraft: a data-driven finite state machine engine
//!
//! States and transitions are plain data supplied by the owner of a machine,
//! not compiled code. The same engine drives any workflow: plugin installation
//! status, order lifecycles, approval chains.
//!
//! # Core Concepts
//!
//! - **State**: Any comparable, hashable identifier via the `State` trait
//! - **Transition table**: Permitted destinations per source state
//! - **Listeners**: Ordered callbacks invoked synchronously on state entry
//! - **History**: Timestamped record of entered states, fed by a listener
//!
//! # Example
//!
//! ```rust
//! use statecraft::FiniteStateMachine;
//!
//! let mut machine = FiniteStateMachine::new();
//! machine.set_states(["pending", "scheduled", "done"]);
//! machine.set_transitions([("pending", vec!["scheduled"]), ("scheduled", vec!["done"])]);
//! machine.set_initial_state("pending").unwrap();
//!
//! assert!(machine.transition_to("done").is_err());
//! assert_eq!(machine.state(), Some(&"pending"));
//!
//! machine.transition_to("scheduled").unwrap();
//! machine.transition_to("done").unwrap();
//! assert_eq!(machine.state(), Some(&"done"));
//! ```
//!
//! # Concurrency
//!
//! A machine is single-threaded and synchronous. It is `Send`, so it can be
//! moved into a `Mutex` when several threads must drive the same instance;
//! serializing that access is the owner's job.

pub mod builder;
pub mod core;
pub mod install;
pub mod logging;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder, MachineConfig};
pub use self::core::{HistoryRecorder, State, StateEntry, StateHistory};
pub use self::install::PluginInstallState;
pub use self::machine::{FiniteStateMachine, ListenerError, MachineError};
