//! Scenario harness for exercising the delegation wiring
//!
//! All wiring lives in locals inside [`run_scenario`], and a recording
//! implementer makes the press/start accounting observable without capturing
//! stdout.

use crate::api::RemoteStarter;
use crate::person::Person;
use crate::vehicles::VehicleKind;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// Implementer that counts invocations instead of printing
///
/// Built as an `Arc` so one clone can be bound to a [`Person`] while the
/// caller keeps the other to read the count back.
#[derive(Debug)]
pub struct RecordingStarter {
    label: String,
    starts: Mutex<u64>,
}

impl RecordingStarter {
    pub fn new(label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            label: label.into(),
            starts: Mutex::new(0),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of times `start()` has been invoked
    pub fn starts(&self) -> u64 {
        *self.starts.lock()
    }
}

impl RemoteStarter for RecordingStarter {
    fn start(&self) {
        let mut starts = self.starts.lock();
        *starts += 1;
        tracing::trace!("{} acknowledged start #{}", self.label, *starts);
    }
}

/// Scenario configuration
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Name of the person holding the fob
    pub owner: String,
    /// Vehicle to bind, or `None` to press with nothing on the other end
    pub vehicle: Option<VehicleKind>,
    /// Number of button presses
    pub presses: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            owner: "Janet".to_string(),
            vehicle: Some(VehicleKind::Car),
            presses: 1,
        }
    }
}

/// Outcome of a scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub owner: String,
    pub vehicle: Option<String>,
    pub presses: u64,
    pub starts: u64,
}

impl ScenarioReport {
    /// A bound scenario passes when every press reached the implementer;
    /// an unbound one passes when none did.
    pub fn passed(&self) -> bool {
        if self.vehicle.is_some() {
            self.starts == self.presses
        } else {
            self.starts == 0
        }
    }

    pub fn generate_text(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Scenario Report ===\n\n");
        report.push_str(&format!("Owner: {}\n", self.owner));
        report.push_str(&format!(
            "Vehicle: {}\n",
            self.vehicle.as_deref().unwrap_or("(unbound)")
        ));
        report.push_str(&format!("Presses: {}\n", self.presses));
        report.push_str(&format!("Starts observed: {}\n", self.starts));
        report.push_str(&format!(
            "\n=== Result: {} ===\n",
            if self.passed() { "PASS" } else { "FAIL" }
        ));

        report
    }
}

/// Run one scenario
///
/// Holder first, implementer second, binding strictly after both exist.
pub fn run_scenario(config: ScenarioConfig) -> ScenarioReport {
    let mut owner = Person::new(config.owner);
    let recorder = RecordingStarter::new(
        config
            .vehicle
            .map_or("(unbound)", VehicleKind::as_str),
    );

    if config.vehicle.is_some() {
        owner.bind(recorder.clone());
    }

    tracing::debug!(
        "running scenario: owner={} vehicle={:?} presses={}",
        owner.name(),
        config.vehicle,
        config.presses
    );

    for _ in 0..config.presses {
        owner.press_starter();
    }

    ScenarioReport {
        owner: owner.name().to_string(),
        vehicle: config.vehicle.map(|kind| kind.as_str().to_string()),
        presses: config.presses,
        starts: recorder.starts(),
    }
}
