/// `add` command: append a device and rewrite the backing file.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::AddArgs;
use crate::inventory::{Device, DeviceRecord, InventoryError, add_device, save_inventory};

impl From<&AddArgs> for Device {
    fn from(args: &AddArgs) -> Self {
        Self {
            name: args.name.clone(),
            management_ip: args.ip.clone(),
            username: args.user.clone(),
            password: args.password.clone(),
            description: args.desc.clone(),
        }
    }
}

/// Run `netinv add`.
///
/// # Errors
///
/// Returns `InventoryError` if the file cannot be loaded, if an existing
/// record has the wrong shape, or if the rewrite fails.
pub fn run(args: &AddArgs, path: &Path, ctx: &OutputCtx) -> Result<(), InventoryError> {
    let mut inventory = super::load(path, ctx)?;

    add_device(&mut inventory, DeviceRecord::from(Device::from(args)));

    let _t_save = ctx.timer("save_inventory");
    save_inventory(path, &inventory)?;
    drop(_t_save);

    println!("Device '{}' added and saved!", args.name);
    Ok(())
}
