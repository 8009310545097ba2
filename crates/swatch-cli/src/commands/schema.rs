use schemars::schema_for;
use swatch_core::{AnalysisResult, MotionReport, ObservedAnimation, TokenSet};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `swatch schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::TokenSet => schema_for!(TokenSet),
        SchemaType::Analysis => schema_for!(AnalysisResult),
        SchemaType::MotionReport => schema_for!(MotionReport),
        SchemaType::ObservedAnimation => schema_for!(ObservedAnimation),
    };
    output(&schema, flags.format)
}
