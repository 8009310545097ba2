use swatch_config::SwatchConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `swatch config`. Raw output is TOML, ready to paste into a config file.
pub fn handle(config: &SwatchConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Raw {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }
    output(config, flags.format)
}

#[cfg(test)]
mod tests {
    use swatch_config::SwatchConfig;

    #[test]
    fn default_config_renders_as_toml() {
        let text = toml::to_string_pretty(&SwatchConfig::default()).expect("toml");
        assert!(text.contains("[export]"));
        assert!(text.contains("out_dir = \"starter-kit\""));
        assert!(text.contains("max_stylesheets = 50"));
    }
}
