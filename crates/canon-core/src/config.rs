//! Configuration loading for .canon.toml

use canon_rule_abi::Severity;
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CONFIG_FILE_NAME: &str = ".canon.toml";

/// Root configuration from .canon.toml
///
/// Keys of `rule` are either rule codes (`CAP0014`) or rule names
/// (`MethodComplexity`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CanonConfig {
    #[serde(default)]
    pub rule: HashMap<String, RuleSettings>,
}

/// Settings for a single rule
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[garde(context(()))]
pub struct RuleSettings {
    #[garde(skip)]
    pub enabled: Option<bool>,
    #[garde(custom(validate_severity))]
    pub severity: Option<String>,

    // Single-threshold rules (complexity, monster method, god class, ...)
    #[garde(custom(validate_max))]
    pub max: Option<usize>,
    // Comment lines allowed next to a local variable (CAP0006)
    #[garde(custom(validate_max))]
    pub max_comment_lines: Option<usize>,

    // Two-tier rules (parameter counts)
    #[garde(custom(validate_parameter_threshold))]
    pub warning_max: Option<usize>,
    #[garde(custom(validate_parameter_threshold))]
    pub error_max: Option<usize>,
}

impl RuleSettings {
    /// Configured severity, if one is set and valid.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.severity.as_deref().and_then(Severity::parse)
    }

    fn validate_all(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())?;
        if let (Some(warning), Some(error)) = (self.warning_max, self.error_max)
            && warning >= error
        {
            return Err(format!(
                "warning_max ({warning}) must be lower than error_max ({error})"
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Custom Validators
// Note: garde requires `&Option<T>` and `&()` signatures - clippy lints suppressed
// ============================================================================

#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::option_if_let_else
)]
fn validate_severity(value: &Option<String>, _ctx: &()) -> garde::Result {
    if let Some(v) = value {
        match Severity::parse(v) {
            Some(_) => Ok(()),
            None => Err(garde::Error::new(format!(
                "'{v}' is not a valid severity - use 'warning' or 'error'"
            ))),
        }
    } else {
        Ok(())
    }
}

#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::option_if_let_else
)]
fn validate_max(value: &Option<usize>, _ctx: &()) -> garde::Result {
    if let Some(v) = value {
        if (1..=1000).contains(v) {
            Ok(())
        } else {
            Err(garde::Error::new(format!(
                "{v} is outside the range 1-1000"
            )))
        }
    } else {
        Ok(())
    }
}

#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::option_if_let_else
)]
fn validate_parameter_threshold(value: &Option<usize>, _ctx: &()) -> garde::Result {
    if let Some(v) = value {
        if (1..=50).contains(v) {
            Ok(())
        } else {
            Err(garde::Error::new(format!(
                "{v} is outside the range 1-50 - common values are 5 and 10"
            )))
        }
    } else {
        Ok(())
    }
}

// ============================================================================
// Config Error
// ============================================================================

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config read error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Validation(e) => write!(f, "config validation error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Config Loading
// ============================================================================

impl CanonConfig {
    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML content is invalid.
    /// Returns `ConfigError::Validation` if rule settings fail validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        for (key, settings) in &config.rule {
            settings
                .validate_all()
                .map_err(|e| ConfigError::Validation(format!("rule.{key}: {e}")))?;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`CanonConfig::parse`].
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Load from default location (.canon.toml in current directory)
    #[must_use]
    pub fn load_default() -> Option<Self> {
        let cwd = std::env::current_dir().ok()?;
        let config_path = cwd.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return None;
        }

        Self::from_file(&config_path).ok()
    }

    /// Load from default location, returning error details on failure.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` with details if loading or validation fails.
    pub fn load_default_strict() -> Result<Option<Self>, ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| ConfigError::Io(e.to_string()))?;
        let config_path = cwd.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        Self::from_file(&config_path).map(Some)
    }

    /// Settings for a rule, looked up by code first and then by name.
    #[must_use]
    pub fn settings_for(&self, code: &str, name: &str) -> Option<&RuleSettings> {
        self.rule.get(code).or_else(|| self.rule.get(name))
    }

    /// Whether a rule is enabled, falling back to its default.
    #[must_use]
    pub fn is_enabled(&self, code: &str, name: &str, default: bool) -> bool {
        self.settings_for(code, name)
            .and_then(|s| s.enabled)
            .unwrap_or(default)
    }
}
