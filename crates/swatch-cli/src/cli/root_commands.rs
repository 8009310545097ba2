use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use swatch_core::TokenCategory;
use swatch_export::TokenFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract design tokens from a stylesheet or a saved HTML page.
    Extract(ExtractArgs),
    /// Write a design-system starter kit.
    Export(ExportArgs),
    /// Turn observed runtime animations into motion reports.
    Motion(MotionArgs),
    /// Print the JSON schema of a wire type.
    Schema(SchemaArgs),
    /// Print the resolved configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// CSS file, or `.html`/`.htm` page whose stylesheets are collected.
    pub path: PathBuf,

    /// Print a single token collection.
    #[arg(long)]
    pub only: Option<TokenCategory>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// CSS file, or `.html`/`.htm` page whose stylesheets are collected.
    pub path: PathBuf,

    /// Output directory (defaults to `export.out_dir`).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// JSON file of user-chosen token names.
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Give unnamed tokens generated names.
    #[arg(long, conflicts_with = "named_only")]
    pub include_unnamed: bool,

    /// Emit only tokens named in `--names`.
    #[arg(long)]
    pub named_only: bool,

    /// Token files to emit, comma-separated (defaults to `export.formats`).
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<TokenFormat>,

    /// JSON array of observed animations to turn into motion reports.
    #[arg(long)]
    pub motion: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct MotionArgs {
    /// JSON array of observed animations.
    pub file: PathBuf,

    /// Print Markdown documents instead of structured reports.
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "analysis")]
    pub type_name: SchemaType,
}

/// Wire types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    TokenSet,
    Analysis,
    MotionReport,
    ObservedAnimation,
}
