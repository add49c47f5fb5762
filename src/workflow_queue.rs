use crate::constants::SPINNER_TICK_MS;
use crate::lll_error::{LllError, LllErrorKind};
use crate::session::Session;
use crate::step::{ActionStep, Step};
use indicatif::{HumanDuration, ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};
use std::time::{Duration, Instant};

pub(crate) struct WorkflowQueue {
    init_step: Step,
    pb: ProgressBar,
}

impl WorkflowQueue {
    pub(crate) fn new(init_step: Step) -> Self {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan/blue.bold} [{pos:.yellow}/?] {prefix:.bold} {wide_msg:.green}",
        ) {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));

        WorkflowQueue { init_step, pb }
    }

    fn run_step(
        &self,
        step: &dyn ActionStep,
        session: &mut Session,
    ) -> Result<Step, Box<LllError>> {
        info!("Running step: {}", step.get_name());
        self.pb.set_prefix(step.get_name().to_owned());
        self.pb.set_message("in progress...");

        let next = step
            .execute(session)
            .map_err(|err| err.in_step(step.get_name()))?;

        self.pb.inc(1);
        self.pb.tick();
        Ok(next)
    }

    pub(crate) fn execute(&self, session: &mut Session) -> Result<(), Box<LllError>> {
        let Step::Start(first) = &self.init_step else {
            return Err(LllError::boxed(
                "init_step must be a Start Task!",
                "init_step must be a Start Task! This is a bug in the code",
                LllErrorKind::WorkflowQueue,
            ));
        };

        let started = Instant::now();
        session.progress = self.pb.clone();

        let result = self.drive(first.as_ref(), session);
        match &result {
            Ok(()) => {
                self.pb.finish_and_clear();
                if self.pb.is_hidden() {
                    debug!("Workflow finished in {}", HumanDuration(started.elapsed()));
                } else {
                    eprintln!("Done in {}", HumanDuration(started.elapsed()));
                }
            }
            Err(_) => self.pb.abandon(),
        }
        result
    }

    fn drive(&self, first: &dyn ActionStep, session: &mut Session) -> Result<(), Box<LllError>> {
        let mut next_step = self.run_step(first, session)?;

        while !next_step.is_stop() {
            match next_step {
                Step::Task(task) => {
                    next_step = self.run_step(task.as_ref(), session)?;
                }
                Step::Start(_) => {
                    return Err(LllError::boxed(
                        "next_step must not be a Start Task!",
                        "next_step must not be a Start Task! This is a bug in the code",
                        LllErrorKind::WorkflowQueue,
                    ));
                }
                Step::Stop => unreachable!("loop exits on Stop"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Goal, InputSource};

    struct Bump;
    struct Finish;
    struct Restart;

    impl ActionStep for Bump {
        fn new() -> Self {
            Bump
        }
        fn get_name(&self) -> &str {
            "bump"
        }
        fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
            session.output = Some("bumped".into());
            Ok(Step::Task(Box::new(Finish::new())))
        }
    }

    impl ActionStep for Finish {
        fn new() -> Self {
            Finish
        }
        fn get_name(&self) -> &str {
            "finish"
        }
        fn execute(&self, _session: &mut Session) -> Result<Step, Box<LllError>> {
            Ok(Step::Stop)
        }
    }

    impl ActionStep for Restart {
        fn new() -> Self {
            Restart
        }
        fn get_name(&self) -> &str {
            "restart"
        }
        fn execute(&self, _session: &mut Session) -> Result<Step, Box<LllError>> {
            Ok(Step::Start(Box::new(Finish::new())))
        }
    }

    #[test]
    fn test_runs_until_stop() {
        let mut session = Session::new(InputSource::Demo, Goal::Reduce);
        let queue = WorkflowQueue::new(Step::Start(Box::new(Bump::new())));
        queue.execute(&mut session).unwrap();
        assert_eq!(session.output, Some("bumped".into()));
    }

    #[test]
    fn test_rejects_non_start_init() {
        let mut session = Session::new(InputSource::Demo, Goal::Reduce);
        let queue = WorkflowQueue::new(Step::Task(Box::new(Bump::new())));
        let err = queue.execute(&mut session).unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::WorkflowQueue);
    }

    #[test]
    fn test_rejects_start_mid_workflow() {
        let mut session = Session::new(InputSource::Demo, Goal::Reduce);
        let queue = WorkflowQueue::new(Step::Start(Box::new(Restart::new())));
        assert!(queue.execute(&mut session).is_err());
    }
}
