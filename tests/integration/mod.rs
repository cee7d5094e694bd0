//! Integration tests: library operations end to end and the built binary.

mod inventory_tests;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const HEADER: &str = "Name,Management IP,Username,Password,Description\n";
pub const ROUTER_ROW: &str = "Router1,10.0.0.1,admin,pass123,Core router\n";

/// A scratch directory holding an `inventory.csv` with the given rows.
pub fn inventory_dir(rows: &[&str]) -> anyhow::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    std::fs::write(&path, format!("{HEADER}{}", rows.concat()))?;
    Ok((dir, path))
}

/// Run the `netinv` binary inside `dir` using the default backing file.
pub fn netinv(dir: &Path, args: &[&str]) -> anyhow::Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_netinv"))
        .args(args)
        .current_dir(dir)
        .env_remove("NETINV_INVENTORY")
        .env_remove("RUST_LOG")
        .output()?)
}
