pub(crate) mod check;
pub(crate) mod default;

use crate::config::LllConfig;
use crate::formats::OutputFormat;
use crate::lattice::Delta;
use crate::lll_error::LllError;
use crate::session::{Goal, InputSource, Session};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

pub(crate) const MISSING_INPUT_MESSAGE: &str =
    "Please specify input with --test, --file <path>, or --data <array>";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Output format of the reduced basis
    #[arg(long, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// Write the reduced basis to this file instead of stdout
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Run the built-in example basis
    #[arg(long, conflicts_with_all = ["file", "data"])]
    pub(crate) test: bool,

    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Path to a CSV file holding the basis, one row per line
    #[arg(long, conflicts_with = "data")]
    pub(crate) file: Option<PathBuf>,

    /// Basis as a JSON array of rows, e.g. [["11","3","4"],["2","11","5"]]
    #[arg(long)]
    pub(crate) data: Option<String>,

    /// Lovász parameter, 1/4 < delta <= 1 (fraction or decimal, default 3/4)
    #[arg(long)]
    pub(crate) delta: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check whether the given basis is already LLL-reduced
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parses arguments. Returns `None` when the invocation was fully handled here.
    pub(crate) fn new() -> Option<Self> {
        let cli = Cli::parse();
        if let Some(Commands::Completions { shell }) = cli.command {
            let mut command = Cli::command();
            let bin_name = command.get_name().to_string();
            generate(shell, &mut command, bin_name, &mut std::io::stdout());
            return None;
        }
        Some(cli)
    }
}

impl InputArgs {
    pub(crate) fn source(&self, demo: bool) -> Option<InputSource> {
        if demo {
            Some(InputSource::Demo)
        } else if let Some(path) = &self.file {
            Some(InputSource::File(path.clone()))
        } else {
            self.data.clone().map(InputSource::Data)
        }
    }

    /// Fills unset fields from `fallback`, e.g. flags given before a subcommand.
    pub(crate) fn or(self, fallback: InputArgs) -> InputArgs {
        let has_source = self.file.is_some() || self.data.is_some();
        InputArgs {
            file: if has_source { self.file } else { fallback.file },
            data: if has_source { self.data } else { fallback.data },
            delta: self.delta.or(fallback.delta),
        }
    }
}

/// Builds the session, applying flag > config > default precedence.
pub(crate) fn build_session(
    source: InputSource,
    goal: Goal,
    delta_flag: Option<&str>,
    format_flag: Option<OutputFormat>,
    output: Option<PathBuf>,
    config: LllConfig,
) -> Result<Session, Box<LllError>> {
    let mut session = Session::new(source, goal);

    // the demo always runs with the textbook parameter
    if session.source != InputSource::Demo {
        session.delta = match delta_flag {
            Some(text) => text.parse::<Delta>()?,
            None => config.delta()?.unwrap_or_default(),
        };
    }
    session.format = format_flag
        .or(config.output_format())
        .unwrap_or_default();
    session.output = output;
    session.rule_config = config.rules;
    Ok(session)
}
