use super::ta02_validate_basis::ValidateBasis;
use crate::constants::DEMO_BASIS;
use crate::formats::{csv, json};
use crate::lattice::Basis;
use crate::lll_error::LllError;
use crate::session::{InputSource, Session};
use crate::step::{ActionStep, Step};
use log::debug;

pub(crate) struct LoadBasis {
    name: String,
}

impl ActionStep for LoadBasis {
    fn new() -> Self
    where
        Self: Sized,
    {
        LoadBasis {
            name: "load_basis".to_owned(),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
        let basis = match &session.source {
            InputSource::File(path) => csv::load_basis(path)?,
            InputSource::Data(data) => json::parse_basis(data)?,
            InputSource::Demo => Basis::from_i64_rows(&DEMO_BASIS),
        };
        debug!(
            "Loaded {} row(s) of dimension {}",
            basis.len(),
            basis.dimension().unwrap_or(0)
        );

        if session.source == InputSource::Demo {
            session.original = Some(basis.clone());
        }
        session.basis = basis;
        Ok(Step::Task(Box::new(ValidateBasis::new())))
    }
}
