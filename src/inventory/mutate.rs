/// In-memory inventory edits. Nothing here touches the backing file.
use super::find::position;
use super::record::DeviceRecord;

/// Append `device` to the end of `inventory`. Duplicate names are allowed.
pub fn add_device(inventory: &mut Vec<DeviceRecord>, device: DeviceRecord) {
    log::debug!(
        "appending device {:?} at position {}",
        device.name().unwrap_or_default(),
        inventory.len()
    );
    inventory.push(device);
}

/// Remove and return the first record named `name`, keeping the order of the rest.
pub fn remove_device(inventory: &mut Vec<DeviceRecord>, name: &str) -> Option<DeviceRecord> {
    let idx = position(inventory, name)?;
    log::debug!("removing device {name:?} at position {idx}");
    Some(inventory.remove(idx))
}
