//! Output formatting for simulation runs, vessel classes and manifests.
//!
//! Renderers return `String`s so callers decide where the text goes.

use std::fmt::Write;

use clap::ValueEnum;

use harbor_lib::{Action, ActionRecord, CargoManifest, Outcome, Simulation, VesselClass};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Per-action outcomes followed by the final state.
    #[default]
    Text,
    /// The flat JSON report.
    Json,
}

/// One-line human description of an action.
pub fn describe_action(action: &Action) -> String {
    match action {
        Action::Dock { vessel, port } => format!("dock {vessel} at port {port}"),
        Action::Load { vessel, cargo } => format!("load cargo {cargo} onto {vessel}"),
        Action::Unload { vessel, cargo } => format!("unload cargo {cargo} from {vessel}"),
        Action::UnloadFirst { vessel } => format!("unload first cargo from {vessel}"),
        Action::Refuel { vessel, amount } => format!("refuel {vessel} with {amount}"),
        Action::Sail { vessel, to } => format!("sail {vessel} to port {to}"),
    }
}

/// Render action outcomes, one per line.
pub fn render_records(records: &[ActionRecord], palette: &ColorPalette) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        let (tag_color, tag, detail) = match &record.outcome {
            Outcome::Applied => (palette.tag_applied, "APPLIED ", String::new()),
            Outcome::Rejected(rejection) => {
                (palette.tag_rejected, "REJECTED", format!(" ({rejection})"))
            }
        };
        let _ = writeln!(
            out,
            "{gray}{:>3}.{reset} {tag_color}{tag}{reset} {}{detail}",
            index + 1,
            describe_action(&record.action),
            gray = palette.gray,
            reset = palette.reset,
        );
    }
    out
}

/// Render the final state of ports and vessels.
pub fn render_state(simulation: &Simulation, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = String::new();

    let _ = writeln!(out, "Ports ({}):", simulation.ports().len());
    for port in simulation.ports().iter() {
        let _ = writeln!(
            out,
            "- {}{}{} ({}, {}) current: [{}] history: [{}]",
            p.white_bold,
            port.id(),
            p.reset,
            port.latitude(),
            port.longitude(),
            port.current().join(", "),
            port.history().join(", "),
        );
    }

    let _ = writeln!(out, "Vessels ({}):", simulation.vessels().len());
    for vessel in simulation.vessels() {
        let location = vessel
            .current_port()
            .map(|port| format!("port {port}"))
            .unwrap_or_else(|| "undocked".to_string());
        let cargo = vessel
            .cargo_ids()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "- {}{}{} at {location}, fuel {}{:.2}{}, cargo: [{cargo}]",
            p.white_bold,
            vessel.id(),
            p.reset,
            p.cyan,
            vessel.fuel(),
            p.reset,
        );
    }
    out
}

/// Render the vessel class presets as a table.
pub fn render_classes() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vessel classes ({}):", VesselClass::ALL.len());
    let _ = writeln!(out, "{:<14} {:>12} {:>10}", "Class", "Max Weight", "Fuel Cap");
    for class in VesselClass::ALL {
        let _ = writeln!(
            out,
            "{:<14} {:>12} {:>10}",
            class.as_str(),
            format_with_separators(class.max_weight() as u64),
            format_with_separators(class.fuel_capacity() as u64),
        );
    }
    out
}

/// Render each manifest unit with its weight and consumption cost.
pub fn render_manifest(manifest: &CargoManifest) -> String {
    let mut out = String::new();
    if manifest.is_empty() {
        let _ = writeln!(out, "Manifest is empty.");
        return out;
    }

    let _ = writeln!(out, "Cargo units ({}):", manifest.len());
    let _ = writeln!(
        out,
        "{:>6} {:<13} {:>10} {:>6} {:>12} {:>12}",
        "Id", "Category", "Unit Wt", "Count", "Total Wt", "Cost"
    );
    for unit in manifest.units() {
        let _ = writeln!(
            out,
            "{:>6} {:<13} {:>10.1} {:>6} {:>12.1} {:>12.1}",
            unit.id(),
            unit.category().as_str(),
            unit.unit_weight(),
            unit.count(),
            unit.total_weight(),
            unit.total_cost(),
        );
    }
    let total: f64 = manifest.units().iter().map(|u| u.total_cost()).sum();
    let _ = writeln!(out, "Total cost: {total:.1}");
    out
}
