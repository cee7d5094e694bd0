/// JSON and YAML renderings of an inventory.
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::errors::InventoryError;
use super::record::DeviceRecord;

const JSON_INDENT: &[u8] = b"    ";

/// Sequence marker and mapping continuation, both one 4-space step wide.
const YAML_ITEM: &str = "-   ";
const YAML_INDENT: &str = "    ";

/// Pretty JSON array of records, 4-space indented, keys in load order.
///
/// # Errors
///
/// Returns `InventoryError::Json` if serialization fails.
pub fn format_inventory_json(inventory: &[DeviceRecord]) -> Result<String, InventoryError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    inventory.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).map_err(serde_json::Error::custom)?)
}

/// Parse JSON produced by [`format_inventory_json`] back into records.
///
/// # Errors
///
/// Returns `InventoryError::Json` if `text` is not an array of string maps.
pub fn parse_inventory_json(text: &str) -> Result<Vec<DeviceRecord>, InventoryError> {
    Ok(serde_json::from_str(text)?)
}

/// Block-style YAML sequence of records, 4-space indented, keys in load order.
///
/// ```text
/// -   Name: Router1
///     Management IP: 10.0.0.1
/// ```
///
/// `serde_yaml` has a fixed 2-space step, so the block layout is laid out
/// here and only scalars go through `serde_yaml` for quoting.
///
/// # Errors
///
/// Returns `InventoryError::Yaml` if a scalar cannot be rendered.
pub fn format_inventory_yaml(inventory: &[DeviceRecord]) -> Result<String, InventoryError> {
    if inventory.is_empty() {
        return Ok("[]\n".to_owned());
    }

    let mut out = String::new();
    for record in inventory {
        if record.is_empty() {
            out.push_str(YAML_ITEM);
            out.push_str("{}\n");
            continue;
        }
        let mut prefix = YAML_ITEM;
        for (key, value) in record.iter() {
            out.push_str(prefix);
            out.push_str(&yaml_scalar(key)?);
            out.push_str(": ");
            out.push_str(&yaml_scalar(value)?);
            out.push('\n');
            prefix = YAML_INDENT;
        }
    }
    Ok(out)
}

/// One-line YAML scalar. Multi-line values become double-quoted escapes,
/// which YAML reads the same way JSON does.
fn yaml_scalar(value: &str) -> Result<String, InventoryError> {
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);
    if rendered.contains('\n') {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(rendered.to_owned())
    }
}
