use clap::Parser;
use commands::Command;

pub use color_eyre::Result;

mod commands;
mod http_server;
mod ranking;
mod state;

pub(crate) use state::{AppConfig, AppState};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let _sentry_guard = tracing_common::setup_sentry();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    tracing_common::setup_tracing("server")?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run().await
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn validate_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = CliArgs::try_parse_from(["server"]).unwrap();

        assert!(matches!(cli.command.unwrap_or_default(), Command::Serve));
    }

    #[test]
    fn migrate_subcommand_parses() {
        let cli = CliArgs::try_parse_from(["server", "migrate"]).unwrap();

        assert!(matches!(cli.command, Some(Command::Migrate)));
    }
}
