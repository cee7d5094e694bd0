/// Output formatting: raw dump, table, JSON, YAML. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};

use super::args::OutputFormat;
use crate::inventory::{DeviceRecord, FIELDNAMES, InventoryError};
use crate::inventory::{format_inventory_json, format_inventory_yaml};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, fields: Option<&str>, no_header: bool) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
        }
    }

    /// Start a named timer. Logs elapsed time at debug level on drop.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label)
    }

    /// Whether a column should be included in table output. Case-insensitive.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n.eq_ignore_ascii_case(name)))
    }
}

// --- Raw dump ---

/// Print the in-memory inventory as-is, one debug line.
pub fn write_raw(inventory: &[DeviceRecord]) {
    println!("{inventory:?}");
}

// --- Device records ---

/// Write records to stdout in the context's format.
///
/// # Errors
///
/// Returns `InventoryError::Json` / `Yaml` if serialization fails.
pub fn write_devices(inventory: &[DeviceRecord], ctx: &OutputCtx) -> Result<(), InventoryError> {
    match ctx.format {
        OutputFormat::Json => println!("{}", format_inventory_json(inventory)?),
        OutputFormat::Yaml => print!("{}", format_inventory_yaml(inventory)?),
        OutputFormat::Table | OutputFormat::Auto => write_devices_table(inventory, ctx),
    }
    Ok(())
}

/// Canonical columns first, then any extra keys in first-seen order.
fn table_columns(inventory: &[DeviceRecord]) -> Vec<&str> {
    let mut columns: Vec<&str> = FIELDNAMES.to_vec();
    for record in inventory {
        for key in record.keys() {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }
    columns
}

fn write_devices_table(inventory: &[DeviceRecord], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let columns: Vec<&str> = table_columns(inventory)
        .into_iter()
        .filter(|c| ctx.include_field(c))
        .collect();

    if !ctx.no_header {
        table.set_header(columns.iter().map(|c| Cell::new(c.to_uppercase())));
    }

    for record in inventory {
        table.add_row(
            columns
                .iter()
                .map(|c| Cell::new(record.get(c).unwrap_or_default())),
        );
    }

    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(field) = &err.error.field {
                let _ = writeln!(out, "  Field: {field}");
            }
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Only visible when debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("{}: {ms:.2}ms", self.label);
    }
}
