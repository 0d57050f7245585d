use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dhcid_domain::{CliOverrides, DomainError};
use tracing::debug;

mod args;
mod bootstrap;
mod di;
mod invocation;

use args::{classify_parse_error, Cli};

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => exit_with_usage(&classify_parse_error(&e)),
    };

    let invocation = match cli.invocation() {
        Ok(invocation) => invocation,
        Err(e) => exit_with_usage(&e),
    };

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    debug!(?invocation, ttl = config.record.ttl, "Resolved invocation");

    let use_cases = di::UseCases::new();

    match invocation.execute(&use_cases, config.record.ttl) {
        Ok(line) => {
            println!("{}", line);
            Ok(())
        }
        Err(e) if e.is_usage_error() => exit_with_usage(&e),
        Err(e) => {
            debug!(error = %e, "DHCID computation failed");
            Err(e).context("Failed to compute DHCID")
        }
    }
}

fn exit_with_usage(err: &DomainError) -> ! {
    eprintln!("error: {}\n\n{}", err, Cli::command().render_usage());
    std::process::exit(1);
}
