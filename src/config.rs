/// Runtime configuration: where the backing file lives.
use std::path::PathBuf;

/// Environment variable that overrides the backing file location.
pub const INVENTORY_ENV: &str = "NETINV_INVENTORY";

/// Backing file used when `NETINV_INVENTORY` is unset.
pub const DEFAULT_INVENTORY: &str = "inventory.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// CSV file read at startup and rewritten by mutating commands.
    pub path: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY),
        }
    }
}

impl InventoryConfig {
    /// Resolve from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(INVENTORY_ENV).map(PathBuf::from))
    }

    /// Use `path` when present and non-empty, otherwise the default.
    #[must_use]
    pub fn from_override(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self { path },
            _ => Self::default(),
        }
    }
}
