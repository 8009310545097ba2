use swatch_config::SwatchConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod analyze;
pub mod config;
pub mod export;
pub mod extract;
pub mod motion;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &SwatchConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(args, config, flags),
        Commands::Export(args) => export::handle(args, config, flags),
        Commands::Motion(args) => motion::handle(args, flags),
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Config => config::handle(config, flags),
    }
}
