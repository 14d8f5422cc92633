use clap::Subcommand;
use tracing::info;

use crate::{AppConfig, Result};

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the web server
    #[default]
    Serve,
    /// Apply database migrations and exit
    Migrate,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Migrate => migrate().await,
        }
    }
}

async fn migrate() -> Result<()> {
    let config = AppConfig::from_env()?;

    db::setup_db_pool(&config.database_url).await?;
    info!("Migrations complete");

    Ok(())
}
