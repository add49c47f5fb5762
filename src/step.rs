use crate::lll_error::LllError;
use crate::session::Session;

pub(crate) enum Step {
    Start(Box<dyn ActionStep>),
    Task(Box<dyn ActionStep>),
    Stop,
}

impl Step {
    pub(crate) fn is_stop(&self) -> bool {
        matches!(self, Step::Stop)
    }
}

pub(crate) trait ActionStep {
    fn new() -> Self
    where
        Self: Sized;

    fn get_name(&self) -> &str;

    /// Runs the step against the session and returns the step to run next.
    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>>;
}
