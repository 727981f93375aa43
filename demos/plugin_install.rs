//! Plugin Installation Status
//!
//! This example drives the install status machine through a discovery run.
//!
//! Key concepts:
//! - Domain states wired into the generic engine
//! - Entry listeners refreshing a (simulated) admin row
//! - Rejected transitions leaving the state untouched
//! - Persisting and resuming the status token
//!
//! Run with: cargo run --example plugin_install

use statecraft::install::{install_machine, install_machine_from};
use statecraft::logging::init_logging;
use statecraft::{HistoryRecorder, PluginInstallState};

fn describe(state: PluginInstallState) -> &'static str {
    if state.is_installed() {
        "installed"
    } else if state.is_plugin_by_state() {
        "installable"
    } else {
        "not installable"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)?;

    println!("=== Plugin Installation Status ===\n");

    let mut machine = install_machine();
    let recorder = HistoryRecorder::new();
    recorder.attach(&mut machine);

    for state in PluginInstallState::ALL.iter().copied() {
        machine.on(state, |entered| {
            println!("  [Row] {:<20} ({})", entered, describe(*entered));
            Ok(())
        });
    }

    println!("Discovery run:");
    machine.transition_to(PluginInstallState::Checking)?;
    machine.transition_to(PluginInstallState::Available)?;

    println!("\nTrying to activate before installing:");
    if let Err(err) = machine.transition_to(PluginInstallState::InstalledActive) {
        println!("  Rejected: {}", err);
    }
    println!("  Still {}", machine.state().map_or("-", |s| describe(*s)));

    println!("\nInstall and activate:");
    machine.transition_to(PluginInstallState::InstalledInactive)?;
    machine.transition_to(PluginInstallState::InstalledActive)?;

    let stored = serde_json::to_string(&machine.state().copied())?;
    println!("\nPersisted status: {}", stored);

    let restored: Option<PluginInstallState> = serde_json::from_str(&stored)?;
    if let Some(state) = restored {
        let resumed = install_machine_from(state)?;
        let next: Vec<String> = resumed
            .available_transitions()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Resumed at {}; next: {}", state, next.join(", "));
    }

    let history = recorder.snapshot();
    let path: Vec<String> = history.get_path().iter().map(|s| s.to_string()).collect();
    println!("\nPath: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
