use tracing::info;

use crate::{
    http_server::{routes, server::run_server},
    AppState, Result,
};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env().await?;
    let port = app_state.app.port;

    info!(app_name = %app_state.app.app_name, "Starting HTTP server");
    run_server(routes::make_router().with_state(app_state), port).await?;

    info!("Main Returning");

    Ok(())
}
