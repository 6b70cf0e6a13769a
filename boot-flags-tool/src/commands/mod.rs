mod decode;
mod encode;
mod inject;
mod read;

pub use decode::render;
pub use encode::encode;
pub use inject::write_boot_flags;
pub use read::read_snapshot;

use crate::{Commands, config::Config};

pub async fn process(config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Decode(args) => decode::process(args),
        Commands::Encode(args) => encode::process(args),
        Commands::Read { probe_args } => read::process(config, probe_args).await,
        Commands::Inject { flags, probe_args } => inject::process(config, flags, probe_args).await,
    }
}
