//! Core state types.
//!
//! This module contains the building blocks shared by every machine:
//! - State identifiers via the `State` trait
//! - Timestamped history of entered states, recorded through entry listeners

mod history;
mod state;

pub use history::{HistoryRecorder, StateEntry, StateHistory};
pub use state::{ParseStateError, State};
