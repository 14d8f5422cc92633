use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use db::{setup_db_pool, ProduceStore};
use debug_ignore::DebugIgnore;
use tracing::instrument;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_APP_NAME: &str = "Produce Picker";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: DebugIgnore<String>,
    pub port: u16,
    pub app_name: String,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .wrap_err("Missing DATABASE_URL, needed for app launch")?;

        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().wrap_err("Invalid PORT not parsable")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: DebugIgnore(database_url),
            port,
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub store: Arc<dyn ProduceStore>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub async fn from_env() -> crate::Result<Self> {
        let app = AppConfig::from_env()?;
        let pool = setup_db_pool(&app.database_url).await?;

        Ok(AppState {
            app,
            store: Arc::new(pool),
        })
    }
}
