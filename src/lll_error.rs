use colored::Colorize;
use std::fmt;

pub(crate) const NO_STEP: &str = "";
pub(crate) const NO_RULE: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LllErrorKind {
    /// Reading or parsing the input basis
    Input,
    /// Loading `.lll/config.toml` or the global config
    Config,
    /// A validation rule refused the basis
    Rules,
    /// Gram-Schmidt or the reduction loop itself
    Reduction,
    /// Writing the reduced basis
    Output,
    /// Step chaining inside the workflow queue
    WorkflowQueue,
}

impl fmt::Display for LllErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LllErrorKind::Input => "input",
            LllErrorKind::Config => "config",
            LllErrorKind::Rules => "rules",
            LllErrorKind::Reduction => "reduction",
            LllErrorKind::Output => "output",
            LllErrorKind::WorkflowQueue => "workflow queue",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LllError {
    name: String,
    message: String,
    kind: LllErrorKind,
    step_name: String,
    rule_name: String,
}

impl LllError {
    pub(crate) fn new(
        name: &str,
        message: &str,
        kind: LllErrorKind,
        step_name: &str,
        rule_name: &str,
    ) -> Self {
        LllError {
            name: name.to_owned(),
            message: message.to_owned(),
            kind,
            step_name: step_name.to_owned(),
            rule_name: rule_name.to_owned(),
        }
    }

    /// Shorthand for errors raised outside any step or rule.
    pub(crate) fn boxed(name: &str, message: &str, kind: LllErrorKind) -> Box<Self> {
        Box::new(Self::new(name, message, kind, NO_STEP, NO_RULE))
    }

    pub(crate) fn kind(&self) -> LllErrorKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    /// Attach the step that was running when the error surfaced, unless one is set already.
    pub(crate) fn in_step(mut self: Box<Self>, step_name: &str) -> Box<Self> {
        if self.step_name.is_empty() {
            self.step_name = step_name.to_owned();
        }
        self
    }

    pub(crate) fn print_error(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.name.bold());
        eprintln!("  {}", self.message());
        let mut context = vec![format!("kind: {}", self.kind())];
        if !self.step_name.is_empty() {
            context.push(format!("step: {}", self.step_name));
        }
        if !self.rule_name.is_empty() {
            context.push(format!("rule: {}", self.rule_name));
        }
        eprintln!("  {}", context.join(", ").dimmed());
    }
}

impl fmt::Display for LllError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for LllError {}
