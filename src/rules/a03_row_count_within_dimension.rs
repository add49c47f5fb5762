use crate::config::RuleConfig;
use crate::lattice::Basis;
use crate::lll_error::LllError;
use crate::rules::{Rule, RuleLevel, RuleOutput, configured_level};

/// More rows than columns can never be linearly independent.
pub(crate) struct RowCountWithinDimension {
    name: String,
    description: String,
    level: RuleLevel,
}

impl Rule for RowCountWithinDimension {
    fn new(rule_config: Option<&RuleConfig>) -> Self {
        let name = "RowCountWithinDimension";
        Self {
            name: name.to_string(),
            description: "A basis cannot have more rows than columns".to_string(),
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
        match basis.dimension() {
            Some(dimension) if basis.len() > dimension => Ok(RuleOutput::Exception(format!(
                "{} rows of dimension {}",
                basis.len(),
                dimension
            ))),
            _ => Ok(RuleOutput::Success),
        }
    }

    fn try_fix(&self, _basis: &mut Basis) -> Result<bool, Box<LllError>> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lll_error::LllErrorKind;

    #[test]
    fn test_too_many_rows() {
        let mut basis = Basis::from_i64_rows(&[[1, 0], [0, 1], [1, 1]]);
        let err = RowCountWithinDimension::new(None)
            .execute(&mut basis)
            .unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::Rules);
        assert!(err.message().contains("3 rows of dimension 2"));
    }

    #[test]
    fn test_square_and_tall_ok() {
        let mut square = Basis::from_i64_rows(&[[1, 0], [0, 1]]);
        assert!(RowCountWithinDimension::new(None).execute(&mut square).unwrap());
        let mut wide = Basis::from_i64_rows(&[[1, 0, 5]]);
        assert!(RowCountWithinDimension::new(None).execute(&mut wide).unwrap());
    }
}
