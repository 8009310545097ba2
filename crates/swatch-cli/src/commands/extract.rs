use swatch_config::SwatchConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::analyze::analyze_path;
use crate::output::output;

/// Handle `swatch extract`.
pub fn handle(args: &ExtractArgs, config: &SwatchConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = analyze_path(&args.path, &config.source)?;

    match args.only {
        Some(category) => output(&analysis.tokens.select(category)?, flags.format),
        None => output(&analysis, flags.format),
    }
}
