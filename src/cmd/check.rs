use super::{MISSING_INPUT_MESSAGE, build_session};
use crate::config::LllConfig;
use crate::lattice::ReductionReport;
use crate::session::{Goal, InputSource};
use crate::step::{ActionStep, Step};
use crate::workflow_queue::WorkflowQueue;
use crate::workflows::action::ta01_load_basis::LoadBasis;

/// Exit code 0 when the basis is LLL-reduced, 1 when it is not or on error.
pub(crate) fn check(
    source: Option<InputSource>,
    delta: Option<&str>,
    lll_config: LllConfig,
) -> i32 {
    let Some(source) = source else {
        eprintln!("{MISSING_INPUT_MESSAGE}");
        return 2;
    };

    let mut session = match build_session(source, Goal::Check, delta, None, None, lll_config) {
        Ok(session) => session,
        Err(err) => {
            err.print_error();
            return 1;
        }
    };

    let workflow_queue = WorkflowQueue::new(Step::Start(Box::new(LoadBasis::new())));
    match workflow_queue.execute(&mut session) {
        Ok(()) if session.report == Some(ReductionReport::Reduced) => 0,
        Ok(()) => 1,
        Err(err) => {
            err.print_error();
            1
        }
    }
}
