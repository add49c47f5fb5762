use super::ta03_reduce_basis::ReduceBasis;
use super::ta04_check_basis::CheckBasis;
use super::ta05_emit_basis::EmitBasis;
use crate::lll_error::LllError;
use crate::rules::default_rules;
use crate::session::{Goal, Session};
use crate::step::{ActionStep, Step};
use log::debug;

pub(crate) struct ValidateBasis {
    name: String,
}

impl ActionStep for ValidateBasis {
    fn new() -> Self
    where
        Self: Sized,
    {
        ValidateBasis {
            name: "validate_basis".to_owned(),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
        for rule in default_rules(Some(&session.rule_config)) {
            debug!("Checking rule {}: {}", rule.get_name(), rule.get_description());
            rule.execute(&mut session.basis)?;
        }

        match session.goal {
            Goal::Check => Ok(Step::Task(Box::new(CheckBasis::new()))),
            Goal::Reduce if session.basis.is_empty() => {
                Ok(Step::Task(Box::new(EmitBasis::new())))
            }
            Goal::Reduce => Ok(Step::Task(Box::new(ReduceBasis::new()))),
        }
    }
}
