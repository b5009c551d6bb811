//! Manifest command handler for inspecting cargo manifests.

use std::path::Path;

use anyhow::{Context, Result};

use harbor_cli::output::render_manifest;
use harbor_lib::CargoManifest;

/// Handle the manifest subcommand.
///
/// Loads a CSV manifest and prints each unit's weight and consumption cost.
pub fn handle_manifest(path: &Path) -> Result<()> {
    let manifest = CargoManifest::from_path(path)
        .with_context(|| format!("failed to load cargo manifest from {}", path.display()))?;
    print!("{}", render_manifest(&manifest));
    Ok(())
}
