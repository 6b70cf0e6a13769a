use std::path::Path;

use anyhow::Context;
use boot_flags_tool::{Cli, Config, commands};
use clap::{CommandFactory, Parser};

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        log::debug!("No --config given, using the 88MW30x memory map");
        return Ok(Config::default());
    };
    Config::read(path).with_context(|| format!("Reading --config {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.commands {
        Some(command) => commands::process(&config, command).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
