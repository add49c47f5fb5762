use crate::cmd::check::check;
use crate::cmd::default::default_cmd_workflow;
use crate::cmd::{Cli, Commands};
use crate::config::LllConfig;

mod cmd;
mod config;
mod constants;
mod formats;
mod lattice;
mod lll_error;
mod rules;
mod session;
mod step;
mod workflow_queue;
mod workflows;

fn main() {
    let cli_instance_wrap = Cli::new();

    if let Some(cli_instance) = cli_instance_wrap {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
            match cli_instance.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            },
        ))
        .format_timestamp_secs()
        .init();

        let lll_config = LllConfig::load().unwrap_or_else(|err| {
            err.print_error();
            std::process::exit(1);
        });

        let code = match cli_instance.command {
            Some(Commands::Check { input }) => {
                let input = input.or(cli_instance.input);
                check(input.source(false), input.delta.as_deref(), lll_config)
            }
            Some(Commands::Completions { .. }) => 0,
            None => default_cmd_workflow(
                cli_instance.input.source(cli_instance.test),
                cli_instance.input.delta.as_deref(),
                cli_instance.format,
                cli_instance.output,
                lll_config,
            ),
        };
        std::process::exit(code);
    }
}
