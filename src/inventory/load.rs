/// Read the CSV backing file into an ordered list of records.
use std::fs::File;
use std::path::Path;

use super::errors::InventoryError;
use super::record::DeviceRecord;

/// Load every row of `path`, keyed by the header row, in file order.
///
/// Header names are taken as-is; missing or unexpected columns are not
/// reported here. A row shorter than the header yields a record without the
/// trailing keys. Values past the last header column are kept under
/// `column_<n>` keys (1-based). A leading UTF-8 BOM is dropped from the header.
///
/// # Errors
///
/// Returns `InventoryError::FileAccess` if the file cannot be opened and
/// `InventoryError::Csv` if the file cannot be parsed as CSV.
pub fn read_inventory(path: &Path) -> Result<Vec<DeviceRecord>, InventoryError> {
    let file = File::open(path).map_err(|source| InventoryError::FileAccess {
        path: path.to_owned(),
        source,
    })?;
    let csv_err = |source| InventoryError::Csv {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_owned()
            } else {
                h.to_owned()
            }
        })
        .collect();

    let mut inventory = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        if row.len() != headers.len() {
            log::debug!(
                "row {} has {} value(s) for {} column(s)",
                inventory.len() + 1,
                row.len(),
                headers.len()
            );
        }
        let record = row
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let key = headers
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("column_{}", i + 1));
                (key, value)
            })
            .collect::<DeviceRecord>();
        inventory.push(record);
    }

    log::debug!("loaded {} record(s) from {}", inventory.len(), path.display());
    Ok(inventory)
}
