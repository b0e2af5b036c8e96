//! Configuration settings for the simulator

use crate::game_of_life::io::Whitespace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of generations a run advances unless configured otherwise
pub const DEFAULT_GENERATIONS: usize = 10;

/// Appended to the input file stem to name Life 1.06 output
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_output.lif";

/// Appended to the input file stem to name JSON output
pub const DEFAULT_JSON_OUTPUT_SUFFIX: &str = "_output.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Accept any run of whitespace between coordinates instead of a single space
    pub lenient_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Output file suffix; derived from `format` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Life106,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Life106,
            suffix: None,
        }
    }
}

impl OutputFormat {
    pub fn default_suffix(self) -> &'static str {
        match self {
            OutputFormat::Life106 => DEFAULT_OUTPUT_SUFFIX,
            OutputFormat::Json => DEFAULT_JSON_OUTPUT_SUFFIX,
        }
    }
}

impl OutputConfig {
    /// The configured suffix, or the default for the output format
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(self.format.default_suffix())
    }
}

impl InputConfig {
    pub fn whitespace(&self) -> Whitespace {
        if self.lenient_whitespace {
            Whitespace::Lenient
        } else {
            Whitespace::Strict
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if let Some(ref suffix) = self.output.suffix {
            if suffix.is_empty() {
                anyhow::bail!("Output suffix cannot be empty");
            }

            if suffix.contains(['/', '\\']) {
                anyhow::bail!("Output suffix cannot contain a path separator: {}", suffix);
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.lenient_whitespace {
            self.input.lenient_whitespace = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub format: Option<OutputFormat>,
    pub lenient_whitespace: bool,
}

/// Where the driver reads the initial pattern from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.generations, 10);
        assert_eq!(settings.output.suffix(), "_output.lif");
        assert_eq!(settings.output.format, OutputFormat::Life106);
        assert_eq!(settings.input.whitespace(), Whitespace::Strict);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/sparse_life.yaml");

        let mut settings = Settings::default();
        settings.simulation.generations = 3;
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("input:\n  lenient_whitespace: true\n").unwrap();
        assert_eq!(settings.simulation.generations, DEFAULT_GENERATIONS);
        assert_eq!(settings.input.whitespace(), Whitespace::Lenient);
        assert_eq!(settings.output.suffix(), DEFAULT_OUTPUT_SUFFIX);
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.output.suffix = Some(String::new());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.output.suffix = Some("/etc/out.lif".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_suffix_follows_format() {
        let mut settings = Settings::default();
        settings.output.format = OutputFormat::Json;
        assert_eq!(settings.output.suffix(), "_output.json");

        settings.output.suffix = Some("_next.txt".to_string());
        assert_eq!(settings.output.suffix(), "_next.txt");

        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert!(!yaml.contains("suffix"));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "simulation:\n  generations: 0\n").unwrap();
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            generations: Some(4),
            format: Some(OutputFormat::Json),
            lenient_whitespace: true,
        });
        assert_eq!(settings.simulation.generations, 4);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.input.lenient_whitespace);

        let before = settings.clone();
        settings.merge_with_cli(&CliOverrides::default());
        assert_eq!(settings, before);
    }
}
