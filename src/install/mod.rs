//! Plugin installation status machine.
//!
//! Tracks where a discovered plugin repository stands: not yet looked at,
//! being checked, installable, not a plugin at all, installed (inactive or
//! active), or failed. The states are serialized as the lowercase tokens
//! stored by the discovery workflow, e.g. `"installed_active"`.
//!
//! The transition table here is a recommendation for wiring the states into
//! the generic engine. Owners with different rules can build their own table
//! from [`PluginInstallState::ALL`].

use crate::builder::{BuildError, MachineBuilder};
use crate::machine::FiniteStateMachine;
use crate::state_enum;

state_enum! {
    /// Installation status of a discovered plugin repository.
    pub enum PluginInstallState {
        /// Not inspected yet.
        Unknown => "unknown",
        /// Repository contents are being inspected.
        Checking => "checking",
        /// A valid plugin that can be installed.
        Available => "available",
        /// The repository does not contain a plugin.
        NotPlugin => "not_plugin",
        InstalledInactive => "installed_inactive",
        InstalledActive => "installed_active",
        /// Inspection or installation failed.
        Error => "error",
    }
    error: [Error]
}

impl PluginInstallState {
    /// True for both installed states, active or not.
    pub fn is_installed(self) -> bool {
        matches!(self, Self::InstalledInactive | Self::InstalledActive)
    }

    /// True when the repository is known to hold a plugin, installed or not.
    pub fn is_plugin_by_state(self) -> bool {
        self == Self::Available || self.is_installed()
    }
}

/// Recommended transition table for the install status machine.
///
/// `not_plugin` has no outgoing transitions.
pub fn recommended_transitions() -> Vec<(PluginInstallState, Vec<PluginInstallState>)> {
    use PluginInstallState::*;

    vec![
        (Unknown, vec![Checking]),
        (Checking, vec![Available, NotPlugin, Error]),
        (Available, vec![Checking, InstalledInactive]),
        (InstalledInactive, vec![InstalledActive, Checking]),
        (InstalledActive, vec![InstalledInactive, Checking]),
        (Error, vec![Checking]),
    ]
}

/// Install status machine starting at `unknown`.
pub fn install_machine() -> FiniteStateMachine<PluginInstallState> {
    install_machine_from(PluginInstallState::Unknown)
        .expect("Every install state is registered, so building should always succeed")
}

/// Install status machine resuming at a previously persisted state.
pub fn install_machine_from(
    state: PluginInstallState,
) -> Result<FiniteStateMachine<PluginInstallState>, BuildError> {
    MachineBuilder::new()
        .states(PluginInstallState::ALL.iter().copied())
        .transitions(recommended_transitions())
        .initial(state)
        .build()
}
