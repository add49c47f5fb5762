use crate::config::RuleConfig;
use crate::lattice::Basis;
use crate::lll_error::LllError;
use crate::rules::{Rule, RuleLevel, RuleOutput, configured_level};

pub(crate) struct UniformDimension {
    name: String,
    description: String,
    level: RuleLevel,
}

impl Rule for UniformDimension {
    fn new(rule_config: Option<&RuleConfig>) -> Self {
        let name = "UniformDimension";
        Self {
            name: name.to_string(),
            description: "Every row must have the same, non-zero length".to_string(),
            level: configured_level(rule_config, name, RuleLevel::Error),
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
        let Some(dimension) = basis.dimension() else {
            return Ok(RuleOutput::Success);
        };
        if dimension == 0 {
            return Ok(RuleOutput::Exception("row 1 is empty".to_string()));
        }
        for (i, row) in basis.rows().iter().enumerate() {
            if row.len() != dimension {
                return Ok(RuleOutput::Exception(format!(
                    "row {} has {} entries but row 1 has {}",
                    i + 1,
                    row.len(),
                    dimension
                )));
            }
        }
        Ok(RuleOutput::Success)
    }

    fn try_fix(&self, _basis: &mut Basis) -> Result<bool, Box<LllError>> {
        Ok(false)
    }
}
