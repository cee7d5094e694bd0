/// Default action: print the loaded inventory as a raw structure dump.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::write_raw;
use crate::inventory::InventoryError;

/// Run `netinv` with no subcommand. Never writes to the backing file.
///
/// # Errors
///
/// Returns `InventoryError` if the backing file cannot be loaded.
pub fn run(path: &Path, ctx: &OutputCtx) -> Result<(), InventoryError> {
    let inventory = super::load(path, ctx)?;
    write_raw(&inventory);
    Ok(())
}
