use clap::{Parser, ValueEnum};
use swatch_config::SwatchConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `swatch` binary.
#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Swatch - design token extraction from CSS")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to configured defaults.
    pub fn global_flags(&self, config: &SwatchConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true)
                .map_err(anyhow::Error::msg)?,
        };
        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use swatch_config::SwatchConfig;
    use swatch_core::TokenCategory;
    use swatch_export::TokenFormat;

    use super::root_commands::SchemaType;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["swatch", "--format", "table", "--verbose", "config"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["swatch", "extract", "site.css", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
    }

    #[test]
    fn missing_format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["swatch", "config"]).expect("cli should parse");
        let mut config = SwatchConfig::default();
        config.general.default_format = "table".to_string();

        let flags = cli.global_flags(&config).expect("flags should resolve");
        assert_eq!(flags.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["swatch", "--format", "xml", "config"]).is_err());
    }

    #[test]
    fn extract_only_accepts_categories() {
        let cli = Cli::try_parse_from(["swatch", "extract", "a.css", "--only", "spacing"])
            .expect("cli should parse");
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.only, Some(TokenCategory::Spacing));

        assert!(Cli::try_parse_from(["swatch", "extract", "a.css", "--only", "sizes"]).is_err());
    }

    #[test]
    fn export_formats_are_comma_separated() {
        let cli = Cli::try_parse_from(["swatch", "export", "a.css", "--formats", "css,json"])
            .expect("cli should parse");
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.formats, vec![TokenFormat::Css, TokenFormat::Json]);
    }

    #[test]
    fn unnamed_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "swatch",
            "export",
            "a.css",
            "--include-unnamed",
            "--named-only",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_type_defaults_to_analysis() {
        let cli = Cli::try_parse_from(["swatch", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, SchemaType::Analysis);

        let cli = Cli::try_parse_from(["swatch", "schema", "motion-report"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(args) if args.type_name == SchemaType::MotionReport
        ));
    }
}
