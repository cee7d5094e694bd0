/// Inventory domain layer: loading, lookup, formatting, edits, and saving.
pub mod errors;
pub mod find;
pub mod format;
pub mod load;
pub mod mutate;
pub mod record;
pub mod save;

pub use errors::InventoryError;
pub use find::get_device;
pub use format::{format_inventory_json, format_inventory_yaml, parse_inventory_json};
pub use load::read_inventory;
pub use mutate::{add_device, remove_device};
pub use record::{Device, DeviceRecord, FIELDNAMES};
pub use save::save_inventory;
