use crate::lattice::is_reduced;
use crate::lll_error::LllError;
use crate::session::Session;
use crate::step::{ActionStep, Step};

pub(crate) struct CheckBasis {
    name: String,
}

impl ActionStep for CheckBasis {
    fn new() -> Self
    where
        Self: Sized,
    {
        CheckBasis {
            name: "check_basis".to_owned(),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
        let report = is_reduced(&session.basis, &session.delta)?;
        session.progress.suspend(|| println!("{report}"));
        session.report = Some(report);
        Ok(Step::Stop)
    }
}
