//! Configuration file loading and structures

use crate::cli::OutputFormat;
use anyhow::Result;
use camino::Utf8PathBuf;
use canon_core::CanonConfig;
use canon_core::config::CONFIG_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;

/// CLI-level keys of `.canon.toml`. Rule tables are read by `CanonConfig`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            format: Some(OutputFormat::Human),
        }
    }
}

pub fn load_config(path: Option<&Utf8PathBuf>) -> Result<ConfigFile> {
    let config_path = path
        .cloned()
        .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&content)?)
    } else {
        Ok(ConfigFile::default())
    }
}

/// Rule configuration: the explicit file when given, `.canon.toml` otherwise.
pub fn load_rule_config(path: Option<&Utf8PathBuf>) -> Result<CanonConfig> {
    let config = match path {
        Some(p) => Some(CanonConfig::from_file(p.as_std_path())?),
        None => CanonConfig::load_default_strict()?,
    };
    Ok(config.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_key_is_lowercase() {
        let cfg: ConfigFile = toml::from_str("format = \"json\"\n[rule.CAP0014]\nmax = 20\n").unwrap();
        assert_eq!(cfg.format, Some(OutputFormat::Json));
    }

    #[test]
    fn missing_file_falls_back_to_human() {
        let missing = Utf8PathBuf::from("does/not/exist/.canon.toml");
        let cfg = load_config(Some(&missing)).unwrap();
        assert_eq!(cfg.format, Some(OutputFormat::Human));
    }
}
