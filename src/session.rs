use crate::config::RuleConfig;
use crate::formats::OutputFormat;
use crate::lattice::{Basis, Delta, ReductionReport, ReductionStats};
use indicatif::ProgressBar;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// CSV file, one row per line
    File(PathBuf),
    /// JSON array of rows given on the command line
    Data(String),
    /// Built-in 3x3 example
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Goal {
    Reduce,
    Check,
}

/// State threaded through the steps of one run.
pub(crate) struct Session {
    pub(crate) source: InputSource,
    pub(crate) goal: Goal,
    pub(crate) delta: Delta,
    pub(crate) format: OutputFormat,
    pub(crate) output: Option<PathBuf>,
    pub(crate) rule_config: RuleConfig,
    pub(crate) basis: Basis,
    /// Input as loaded, kept for the demo printout
    pub(crate) original: Option<Basis>,
    pub(crate) stats: Option<ReductionStats>,
    pub(crate) report: Option<ReductionReport>,
    pub(crate) progress: ProgressBar,
}

impl Session {
    pub(crate) fn new(source: InputSource, goal: Goal) -> Self {
        Session {
            source,
            goal,
            delta: Delta::default(),
            format: OutputFormat::default(),
            output: None,
            rule_config: RuleConfig::default(),
            basis: Basis::default(),
            original: None,
            stats: None,
            report: None,
            progress: ProgressBar::hidden(),
        }
    }
}
