//! Classes command handler for listing vessel presets.

use anyhow::Result;

use harbor_cli::output::render_classes;

/// Handle the classes subcommand.
pub fn handle_list_classes() -> Result<()> {
    print!("{}", render_classes());
    Ok(())
}
