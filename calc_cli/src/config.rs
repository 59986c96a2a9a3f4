//! Optional TOML configuration for the command-line front end.
//!
//! ```toml
//! [output]
//! pretty = false
//!
//! [logging]
//! default = "info"
//!
//! [logging.modules]
//! calc_core = "debug"
//! ```
//!
//! Resolution: `--config` / `SIMPLECALC_CONFIG` if given (must exist), else
//! `simplecalc.toml` in the working directory if present, else defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const CONFIG_FILE_NAME: &str = "simplecalc.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub output: OutputSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Indent the JSON record
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for every target not listed in `modules`
    pub default: String,
    /// Per-target overrides, e.g. `calc_core = "debug"`
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default: "warn".to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string understood by `EnvFilter`
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }

    /// Reject levels `EnvFilter` would otherwise read as target names.
    pub fn validate(&self) -> Result<()> {
        let levels = std::iter::once(("default", &self.default))
            .chain(self.modules.iter().map(|(module, level)| (module.as_str(), level)));
        for (key, level) in levels {
            if level.parse::<LevelFilter>().is_err() {
                bail!(
                    "Invalid log level '{}' for '{}': expected off, error, warn, info, debug or trace",
                    level,
                    key
                );
            }
        }
        EnvFilter::try_new(self.directives())
            .with_context(|| format!("Invalid logging directives '{}'", self.directives()))?;
        Ok(())
    }
}

impl CliConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(contents).context("Invalid configuration")?;
        config.logging.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Unable to parse config file: {}", path.display()))
    }

    /// Load from an explicit path, or from `dir/simplecalc.toml` when present.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::from_path(&candidate);
        }
        Ok(CliConfig::default())
    }
}
