/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod add;
pub mod dump;
pub mod get;
pub mod list;
pub mod remove;

use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::inventory::{DeviceRecord, InventoryError, read_inventory};

/// Dispatch a parsed `Command` to its handler. `None` dumps the inventory.
///
/// # Errors
///
/// Returns `InventoryError` on any command failure.
pub fn dispatch(
    command: Option<&Command>,
    path: &Path,
    ctx: &OutputCtx,
) -> Result<(), InventoryError> {
    match command {
        None => dump::run(path, ctx),
        Some(Command::Add(args)) => add::run(args, path, ctx),
        Some(Command::List) => list::run(path, ctx),
        Some(Command::Get(args)) => get::run(args, path, ctx),
        Some(Command::Remove(args)) => remove::run(args, path, ctx),
    }
}

/// Load the backing file under a debug timer.
fn load(path: &Path, ctx: &OutputCtx) -> Result<Vec<DeviceRecord>, InventoryError> {
    let _t = ctx.timer("read_inventory");
    read_inventory(path)
}
