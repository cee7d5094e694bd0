/// Look up a device by name.
use super::record::DeviceRecord;

/// First record whose `Name` equals `name` exactly (case-sensitive, untrimmed).
#[must_use]
pub fn get_device<'a>(inventory: &'a [DeviceRecord], name: &str) -> Option<&'a DeviceRecord> {
    inventory.iter().find(|device| device.name() == Some(name))
}

/// Index of the first record named `name`.
#[must_use]
pub fn position(inventory: &[DeviceRecord], name: &str) -> Option<usize> {
    inventory.iter().position(|device| device.name() == Some(name))
}
