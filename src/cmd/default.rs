use super::{MISSING_INPUT_MESSAGE, build_session};
use crate::config::LllConfig;
use crate::formats::OutputFormat;
use crate::session::{Goal, InputSource};
use crate::step::{ActionStep, Step};
use crate::workflow_queue::WorkflowQueue;
use crate::workflows::action::ta01_load_basis::LoadBasis;
use log::debug;
use std::path::PathBuf;

/// Loads, validates, reduces and prints a basis. Returns the process exit code.
pub(crate) fn default_cmd_workflow(
    source: Option<InputSource>,
    delta: Option<&str>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    lll_config: LllConfig,
) -> i32 {
    let Some(source) = source else {
        eprintln!("{MISSING_INPUT_MESSAGE}");
        return 2;
    };

    let mut session = match build_session(source, Goal::Reduce, delta, format, output, lll_config)
    {
        Ok(session) => session,
        Err(err) => {
            err.print_error();
            return 1;
        }
    };

    let workflow_queue = WorkflowQueue::new(Step::Start(Box::new(LoadBasis::new())));
    match workflow_queue.execute(&mut session) {
        Ok(()) => {
            if let Some(stats) = session.stats {
                debug!(
                    "{} iterations, {} size reductions, {} swaps",
                    stats.iterations, stats.size_reductions, stats.swaps
                );
            }
            0
        }
        Err(err) => {
            err.print_error();
            1
        }
    }
}
