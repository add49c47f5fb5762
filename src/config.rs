pub(crate) mod global;
pub(crate) mod local;

use crate::formats::OutputFormat;
use crate::lattice::Delta;
use crate::lll_error::{LllError, LllErrorKind};
use crate::rules::RuleLevel;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Contents of a `config.toml`, either the per-user or the per-project one.
#[derive(Debug, Deserialize, Default, Serialize, Clone, PartialEq)]
pub(crate) struct LllConfig {
    #[serde(default)]
    pub(crate) reduction: ReductionConfig,
    #[serde(default)]
    pub(crate) output: OutputConfig,
    #[serde(default)]
    pub(crate) rules: RuleConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub(crate) struct ReductionConfig {
    /// `delta = "3/4"` or `delta = 0.99`
    pub(crate) delta: Option<DeltaSetting>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum DeltaSetting {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub(crate) struct OutputConfig {
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub(crate) struct RuleConfig {
    /// Maps rule name to its level
    #[serde(flatten)]
    pub(crate) rule_levels: HashMap<String, RuleLevel>,
}

impl LllConfig {
    /// Global config overlaid with the project one in the working directory.
    pub(crate) fn load() -> Result<Self, Box<LllError>> {
        let global = global::load_global()?;
        let local = local::load_local()?;
        Ok(global.overlay(local))
    }

    /// Reads `path`; a missing file yields defaults.
    pub(crate) fn read(path: &Path) -> Result<Self, Box<LllError>> {
        if !path.exists() {
            debug!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path).map_err(|e| {
            LllError::boxed(
                "Failed to read config file",
                &format!("Could not read {}: {}", path.display(), e),
                LllErrorKind::Config,
            )
        })?;

        toml::from_str(&config_content).map_err(|e| {
            LllError::boxed(
                "Failed to parse config file",
                &format!("Invalid TOML in {}: {}", path.display(), e),
                LllErrorKind::Config,
            )
        })
    }

    /// Values set in `other` win over ours.
    pub(crate) fn overlay(mut self, other: LllConfig) -> Self {
        if other.reduction.delta.is_some() {
            self.reduction.delta = other.reduction.delta;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        self.rules.rule_levels.extend(other.rules.rule_levels);
        self
    }

    pub(crate) fn delta(&self) -> Result<Option<Delta>, Box<LllError>> {
        match &self.reduction.delta {
            None => Ok(None),
            Some(DeltaSetting::Text(text)) => text.parse().map(Some),
            Some(DeltaSetting::Number(number)) => number.to_string().parse().map(Some),
        }
    }

    pub(crate) fn output_format(&self) -> Option<OutputFormat> {
        self.output.format
    }
}

impl RuleConfig {
    /// Get rule level for a specific rule
    pub(crate) fn get_rule_level(&self, rule_name: &str) -> Option<&RuleLevel> {
        self.rule_levels.get(rule_name)
    }

    /// Configured names that match none of `known`, sorted.
    pub(crate) fn unknown_rule_names(&self, known: &[&str]) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .rule_levels
            .keys()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Rational;

    #[test]
    fn test_default_config() {
        let config = LllConfig::default();
        assert!(config.rules.rule_levels.is_empty());
        assert!(config.delta().unwrap().is_none());
        assert!(config.output_format().is_none());
    }

    #[test]
    fn test_config_parsing() {
        let toml_content = r#"
[reduction]
delta = "99/100"

[output]
format = "csv"

[rules]
NoZeroRows = "Error"
UniformDimension = "Warning"
"#;
        let config: LllConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.delta().unwrap().unwrap().value(),
            &Rational::from((99, 100))
        );
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert_eq!(
            config.rules.get_rule_level("NoZeroRows"),
            Some(&RuleLevel::Error)
        );
        assert_eq!(
            config.rules.get_rule_level("UniformDimension"),
            Some(&RuleLevel::Warning)
        );
        assert!(config.rules.get_rule_level("Nope").is_none());
    }

    #[test]
    fn test_unknown_rule_names() {
        let toml_content = r#"
[rules]
NoZeroRowz = "Skip"
NoZeroRows = "Error"
a01 = "Skip"
"#;
        let config: LllConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.rules.unknown_rule_names(&["UniformDimension", "NoZeroRows"]),
            ["NoZeroRowz", "a01"]
        );
        assert!(RuleConfig::default().unknown_rule_names(&[]).is_empty());
    }

    #[test]
    fn test_numeric_delta() {
        let config: LllConfig = toml::from_str("[reduction]\ndelta = 0.99\n").unwrap();
        assert_eq!(
            config.delta().unwrap().unwrap().value(),
            &Rational::from((99, 100))
        );

        let config: LllConfig = toml::from_str("[reduction]\ndelta = 2.0\n").unwrap();
        assert!(config.delta().is_err());
    }

    #[test]
    fn test_overlay_prefers_other() {
        let global: LllConfig = toml::from_str(
            "[reduction]\ndelta = \"3/4\"\n[output]\nformat = \"csv\"\n[rules]\nNoZeroRows = \"Skip\"\n",
        )
        .unwrap();
        let local: LllConfig =
            toml::from_str("[reduction]\ndelta = \"0.9\"\n[rules]\nNoZeroRows = \"Error\"\n")
                .unwrap();

        let merged = global.overlay(local);
        assert_eq!(
            merged.reduction.delta,
            Some(DeltaSetting::Text("0.9".to_string()))
        );
        assert_eq!(merged.output_format(), Some(OutputFormat::Csv));
        assert_eq!(
            merged.rules.get_rule_level("NoZeroRows"),
            Some(&RuleLevel::Error)
        );
    }

    #[test]
    fn test_read_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert_eq!(LllConfig::read(&missing).unwrap(), LllConfig::default());

        fs::write(&missing, "[reduction\ndelta=").unwrap();
        let err = LllConfig::read(&missing).unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::Config);
        assert!(err.message().contains("Invalid TOML"));
    }
}
