use std::fs;
use std::path::Path;

use anyhow::Context;
use swatch_core::ObservedAnimation;
use swatch_export::{generate_reports, render_markdown};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MotionArgs;
use crate::output::output;

/// Handle `swatch motion`.
pub fn handle(args: &MotionArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reports = generate_reports(&read_observed(&args.file)?);

    if args.markdown {
        let documents = reports.iter().map(render_markdown).collect::<Vec<_>>();
        print!("{}", documents.join("\n"));
        return Ok(());
    }

    output(&reports, flags.format)
}

/// Read a JSON array of observed animations.
pub fn read_observed(path: &Path) -> anyhow::Result<Vec<ObservedAnimation>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of observed animations", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use swatch_core::Trigger;

    use super::read_observed;

    #[test]
    fn reads_observations_with_unknown_triggers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("observed.json");
        fs::write(
            &path,
            r#"[{"element":".a","trigger":"focus","durationMs":100,"properties":[]}]"#,
        )
        .expect("write");

        let observed = read_observed(&path).expect("observations");
        assert_eq!(observed[0].trigger, Trigger::Other);
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("observed.json");
        fs::write(&path, "{}").expect("write");

        let error = read_observed(&path).unwrap_err();
        assert!(format!("{error:#}").contains("observed.json"));
    }
}
