/// `remove` command: drop the first device with a name and rewrite the backing file.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::RemoveArgs;
use crate::inventory::{InventoryError, remove_device, save_inventory};

/// Run `netinv remove`.
///
/// # Errors
///
/// Returns `InventoryError::DeviceNotFound` when no record has that name,
/// or any load/save failure.
pub fn run(args: &RemoveArgs, path: &Path, ctx: &OutputCtx) -> Result<(), InventoryError> {
    let mut inventory = super::load(path, ctx)?;

    remove_device(&mut inventory, &args.name).ok_or_else(|| InventoryError::DeviceNotFound {
        name: args.name.clone(),
    })?;

    let _t_save = ctx.timer("save_inventory");
    save_inventory(path, &inventory)?;
    drop(_t_save);

    println!("Device '{}' removed and saved!", args.name);
    Ok(())
}
