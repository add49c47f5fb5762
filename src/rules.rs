use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    config::RuleConfig,
    lattice::Basis,
    lll_error::{LllError, LllErrorKind, NO_STEP},
};

pub(crate) mod a01_uniform_dimension;
pub(crate) mod a02_no_zero_rows;
pub(crate) mod a03_row_count_within_dimension;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub(crate) enum RuleLevel {
    /// Skip the rule check
    Skip,
    /// Warn if the rule is not satisfied and try to fix it, but continue
    Warning,
    /// Fail if the rule is not satisfied and cannot be fixed
    Error,
}

pub(crate) enum RuleOutput {
    /// If Rule check has failed!
    Exception(String),
    /// If Rule check is passed!
    Success,
}

/// A check applied to the input basis before reduction.
///
/// Levels come from the `[rules]` table of the config, keyed by rule name:
/// ```toml
/// [rules]
/// NoZeroRows = "Error"
/// ```
pub(crate) trait Rule {
    fn new(rule_config: Option<&RuleConfig>) -> Self
    where
        Self: Sized;
    fn get_name(&self) -> &str;
    fn get_description(&self) -> &str;
    fn get_level(&self) -> RuleLevel;

    /// Implement logic to check the rule
    fn check(&self, basis: &Basis) -> Result<RuleOutput, Box<LllError>>;

    /// Implement logic to fix the rule if broken
    fn try_fix(&self, basis: &mut Basis) -> Result<bool, Box<LllError>>;

    fn execute(&self, basis: &mut Basis) -> Result<bool, Box<LllError>> {
        if self.get_level() == RuleLevel::Skip {
            return Ok(true);
        }
        let check_report = self.check(basis)?;
        match check_report {
            RuleOutput::Success => Ok(true),
            RuleOutput::Exception(exception) => {
                if self.get_level() == RuleLevel::Warning {
                    warn!("{}: {}", self.get_name(), exception);
                    // No need to verify as it's a warning level!
                    self.try_fix(basis)?;
                    return Ok(true);
                }
                if self.try_fix(basis)? {
                    if self.verify(basis)? {
                        Ok(true)
                    } else {
                        Err(self.to_lll_error("Failed to verify the rule", &exception))
                    }
                } else {
                    Err(self.to_lll_error("Basis rejected by rule", &exception))
                }
            }
        }
    }

    fn verify(&self, basis: &Basis) -> Result<bool, Box<LllError>> {
        match self.check(basis)? {
            RuleOutput::Success => Ok(true),
            RuleOutput::Exception(_) => Ok(false),
        }
    }

    fn to_lll_error(&self, name: &str, message: &str) -> Box<LllError> {
        Box::new(LllError::new(
            name,
            &format!("{} ({})", message, self.get_description()),
            LllErrorKind::Rules,
            NO_STEP,
            self.get_name(),
        ))
    }
}

/// Level from config, falling back to the rule's own default.
pub(crate) fn configured_level(
    rule_config: Option<&RuleConfig>,
    name: &str,
    default_level: RuleLevel,
) -> RuleLevel {
    rule_config
        .and_then(|config| config.get_rule_level(name))
        .cloned()
        .unwrap_or(default_level)
}

/// Rules run by `validate_basis`, in order.
///
/// Config keys naming no rule are reported with a warning.
pub(crate) fn default_rules(rule_config: Option<&RuleConfig>) -> Vec<Box<dyn Rule>> {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(a01_uniform_dimension::UniformDimension::new(rule_config)),
        Box::new(a02_no_zero_rows::NoZeroRows::new(rule_config)),
        Box::new(
            a03_row_count_within_dimension::RowCountWithinDimension::new(rule_config),
        ),
    ];
    if let Some(config) = rule_config {
        let known: Vec<&str> = rules.iter().map(|rule| rule.get_name()).collect();
        for name in config.unknown_rule_names(&known) {
            warn!(
                "Unknown rule '{name}' in [rules] config is ignored; known rules: {}",
                known.join(", ")
            );
        }
    }
    rules
}
