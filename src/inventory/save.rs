/// Rewrite the CSV backing file from an in-memory inventory.
use std::fs::File;
use std::path::Path;

use super::errors::InventoryError;
use super::record::{Device, DeviceRecord, FIELDNAMES};

/// Overwrite `path` with a `FIELDNAMES` header and one row per record.
///
/// Every record is checked against the five persisted columns before the file
/// is opened, so a shape error leaves the existing file untouched.
///
/// # Errors
///
/// Returns `InventoryError::MissingField` / `UnexpectedField` for a record of
/// the wrong shape, `InventoryError::FileAccess` if the file cannot be written,
/// and `InventoryError::Csv` if a row cannot be encoded.
pub fn save_inventory(path: &Path, inventory: &[DeviceRecord]) -> Result<(), InventoryError> {
    let devices = inventory
        .iter()
        .enumerate()
        .map(|(i, record)| Device::from_record(record, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let file_err = |source| InventoryError::FileAccess {
        path: path.to_owned(),
        source,
    };
    let csv_err = |source| InventoryError::Csv {
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(file_err)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(FIELDNAMES).map_err(csv_err)?;
    for device in &devices {
        writer.write_record(device.to_row()).map_err(csv_err)?;
    }
    writer.flush().map_err(file_err)?;

    log::info!("wrote {} device(s) to {}", devices.len(), path.display());
    Ok(())
}
