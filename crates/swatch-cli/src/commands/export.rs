use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use swatch_config::{ExportConfig, SwatchConfig};
use swatch_export::{ExportOptions, StarterKit, TokenFormat, TokenNames, generate_reports};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::analyze::analyze_path;
use crate::commands::motion::read_observed;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportSummary {
    out_dir: String,
    files: Vec<String>,
    warnings: usize,
}

/// Handle `swatch export`.
pub fn handle(args: &ExportArgs, config: &SwatchConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = analyze_path(&args.path, &config.source)?;

    let names = match &args.names {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            TokenNames::from_json(&text)
                .with_context(|| format!("invalid token names in {}", path.display()))?
        }
        None => TokenNames::default(),
    };

    let reports = match &args.motion {
        Some(path) => generate_reports(&read_observed(path)?),
        None => Vec::new(),
    };

    let options = export_options(args, &config.export)?;
    let kit = StarterKit::build(&analysis.tokens, &analysis.metadata, &names, &reports, &options)?;

    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.out_dir));
    kit.write_to(&out_dir)?;

    output(
        &ExportSummary {
            out_dir: out_dir.display().to_string(),
            files: kit.files().keys().cloned().collect(),
            warnings: analysis.metadata.warnings.len(),
        },
        flags.format,
    )
}

/// Command-line flags win over the `[export]` config section.
fn export_options(args: &ExportArgs, config: &ExportConfig) -> anyhow::Result<ExportOptions> {
    let include_unnamed = if args.include_unnamed {
        true
    } else if args.named_only {
        false
    } else {
        config.include_unnamed
    };

    let formats = if args.formats.is_empty() {
        config
            .formats
            .iter()
            .map(|name| name.parse::<TokenFormat>())
            .collect::<Result<Vec<_>, _>>()?
    } else {
        args.formats.clone()
    };

    Ok(ExportOptions {
        include_unnamed,
        formats,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use swatch_config::ExportConfig;
    use swatch_export::TokenFormat;

    use super::export_options;
    use crate::cli::root_commands::ExportArgs;

    fn args() -> ExportArgs {
        ExportArgs {
            path: PathBuf::from("site.css"),
            out: None,
            names: None,
            include_unnamed: false,
            named_only: false,
            formats: Vec::new(),
            motion: None,
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let config = ExportConfig {
            include_unnamed: false,
            formats: vec!["json".to_string(), "CSS".to_string()],
            ..ExportConfig::default()
        };
        let options = export_options(&args(), &config).expect("options");
        assert!(!options.include_unnamed);
        assert_eq!(options.formats, vec![TokenFormat::Json, TokenFormat::Css]);
    }

    #[test]
    fn flags_override_config() {
        let mut include = args();
        include.include_unnamed = true;
        include.formats = vec![TokenFormat::Scss];
        let config = ExportConfig {
            include_unnamed: false,
            ..ExportConfig::default()
        };
        let options = export_options(&include, &config).expect("options");
        assert!(options.include_unnamed);
        assert_eq!(options.formats, vec![TokenFormat::Scss]);

        let mut named_only = args();
        named_only.named_only = true;
        let options = export_options(&named_only, &ExportConfig::default()).expect("options");
        assert!(!options.include_unnamed);
    }
}
