/// `get` command: show one device by exact name.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::GetArgs;
use crate::cli::output::write_devices;
use crate::inventory::{InventoryError, get_device};

/// Run `netinv get`.
///
/// # Errors
///
/// Returns `InventoryError::DeviceNotFound` when no record has that name.
pub fn run(args: &GetArgs, path: &Path, ctx: &OutputCtx) -> Result<(), InventoryError> {
    let inventory = super::load(path, ctx)?;

    let device = get_device(&inventory, &args.name).ok_or_else(|| InventoryError::DeviceNotFound {
        name: args.name.clone(),
    })?;

    write_devices(std::slice::from_ref(device), ctx)
}
