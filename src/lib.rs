#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! netinv — manage a CSV-backed inventory of network devices.
//!
//! The [`inventory`] module holds the data operations: load the backing file,
//! look a device up by name, render JSON or YAML, append or remove a device,
//! and rewrite the file with a fixed column order.
//!
//! ```no_run
//! use std::path::Path;
//! use netinv::inventory::{format_inventory_json, get_device, read_inventory};
//!
//! let inventory = read_inventory(Path::new("inventory.csv"))?;
//! if let Some(router) = get_device(&inventory, "Router1") {
//!     println!("{:?}", router.get("Management IP"));
//! }
//! println!("{}", format_inventory_json(&inventory)?);
//! # Ok::<(), netinv::inventory::InventoryError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod inventory;
pub mod types;
