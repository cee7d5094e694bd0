#![deny(clippy::all, clippy::pedantic)]
//! netinv — manage a CSV-backed inventory of network devices.

use clap::Parser;

use netinv::cli::{Cli, OutputCtx, write_error};
use netinv::commands;
use netinv::config::InventoryConfig;
use netinv::types::ErrorOutput;

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = InventoryConfig::from_env();
    log::debug!("inventory file: {}", config.path.display());

    let ctx = OutputCtx::new(cli.output, cli.json, cli.fields.as_deref(), cli.no_header);

    if let Err(err) = commands::dispatch(cli.command.as_ref(), &config.path, &ctx) {
        let error_output = ErrorOutput::from_inventory_error(&err);
        write_error(&error_output, cli.output, cli.json);
        std::process::exit(err.exit_code());
    }
}
