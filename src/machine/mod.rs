//! The generic finite state machine engine.
//!
//! # Key Concepts
//!
//! - **StateRegistry**: The set of valid states of one machine
//! - **TransitionTable**: Permitted destinations per source state
//! - **CallbackRegistry**: Ordered entry listeners per state
//! - **FiniteStateMachine**: Composes the three with a current-state cell
//!
//! Everything here is synchronous. Listeners run as plain nested calls inside
//! [`FiniteStateMachine::transition_to`], after the state has changed.

mod error;
mod listeners;
#[allow(clippy::module_inception)]
mod machine;
mod registry;
mod table;
mod validation;

pub use error::{ListenerError, MachineError};
pub use listeners::{CallbackRegistry, Listener};
pub use machine::FiniteStateMachine;
pub use registry::StateRegistry;
pub use table::TransitionTable;
pub use validation::ConfigIssue;
