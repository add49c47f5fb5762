use super::ta05_emit_basis::EmitBasis;
use crate::lattice::reduce_with;
use crate::lll_error::LllError;
use crate::session::Session;
use crate::step::{ActionStep, Step};
use log::info;

pub(crate) struct ReduceBasis {
    name: String,
}

impl ActionStep for ReduceBasis {
    fn new() -> Self
    where
        Self: Sized,
    {
        ReduceBasis {
            name: "reduce_basis".to_owned(),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
        info!(
            "Reducing {} row(s) with delta = {}",
            session.basis.len(),
            session.delta
        );
        let progress = session.progress.clone();
        let stats = reduce_with(&mut session.basis, &session.delta, |stats| {
            if stats.iterations % 64 == 0 {
                progress.set_message(format!(
                    "{} iterations, {} swaps",
                    stats.iterations, stats.swaps
                ));
            }
        })?;
        info!(
            "Reduced in {} iterations ({} size reductions, {} swaps)",
            stats.iterations, stats.size_reductions, stats.swaps
        );
        session.stats = Some(stats);
        Ok(Step::Task(Box::new(EmitBasis::new())))
    }
}
