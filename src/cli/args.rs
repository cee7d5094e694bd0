/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

/// netinv — manage a CSV inventory of network devices.
///
/// With no subcommand, prints the loaded inventory and exits.
#[derive(Debug, Parser)]
#[command(
    name = "netinv",
    about = "Manage a CSV-backed inventory of network devices",
    version
)]
pub struct Cli {
    /// Output format for `list` and `get`. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated column names to include in table output.
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log debug detail and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// Aligned table with headers.
    Table,
    /// JSON array, 4-space indented.
    Json,
    /// YAML block sequence.
    Yaml,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new device and save the inventory.
    Add(AddArgs),
    /// List every device.
    List,
    /// Show a single device by name.
    Get(GetArgs),
    /// Remove a device by name and save the inventory.
    Remove(RemoveArgs),
}

/// Arguments for `netinv add`.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Device name.
    #[arg(long)]
    pub name: String,

    /// Management IP address.
    #[arg(long)]
    pub ip: String,

    /// Username.
    #[arg(long)]
    pub user: String,

    /// Password.
    #[arg(long)]
    pub password: String,

    /// Device description.
    #[arg(long)]
    pub desc: String,
}

/// Arguments for `netinv get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Exact device name (case-sensitive).
    pub name: String,
}

/// Arguments for `netinv remove`.
#[derive(Debug, Parser)]
pub struct RemoveArgs {
    /// Exact device name (case-sensitive). Only the first match is removed.
    #[arg(long)]
    pub name: String,
}
