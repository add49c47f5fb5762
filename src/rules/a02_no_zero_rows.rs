use crate::config::RuleConfig;
use crate::lattice::{Basis, vector};
use crate::lll_error::LllError;
use crate::rules::{Rule, RuleLevel, RuleOutput, configured_level};
use log::info;

pub(crate) struct NoZeroRows {
    name: String,
    description: String,
    level: RuleLevel,
}

impl Rule for NoZeroRows {
    fn new(rule_config: Option<&RuleConfig>) -> Self {
        let name = "NoZeroRows";
        Self {
            name: name.to_string(),
            description: "Zero vectors contribute nothing to the lattice".to_string(),
            level: configured_level(rule_config, name, RuleLevel::Warning),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_description(&self) -> &str {
        &self.description
    }

    fn get_level(&self) -> RuleLevel {
        self.level.clone()
    }

    fn check(&self, basis: &Basis) -> Result<RuleOutput, Box<LllError>> {
        let zero_rows: Vec<String> = basis
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| vector::is_zero(row))
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        if zero_rows.is_empty() {
            Ok(RuleOutput::Success)
        } else {
            Ok(RuleOutput::Exception(format!(
                "zero row(s) at {}",
                zero_rows.join(", ")
            )))
        }
    }

    fn try_fix(&self, basis: &mut Basis) -> Result<bool, Box<LllError>> {
        let dropped = basis.retain_nonzero();
        info!("Dropped {dropped} zero row(s) from the basis");
        Ok(true)
    }
}
