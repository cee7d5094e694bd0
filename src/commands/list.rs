/// `list` command: print every device.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::write_devices;
use crate::inventory::InventoryError;

/// Run `netinv list`.
///
/// # Errors
///
/// Returns `InventoryError` on load or serialization failure.
pub fn run(path: &Path, ctx: &OutputCtx) -> Result<(), InventoryError> {
    let inventory = super::load(path, ctx)?;
    write_devices(&inventory, ctx)
}
