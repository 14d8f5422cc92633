use std::net::SocketAddr;

use axum::Router;
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::trace::RequestSpans;

pub(crate) async fn run_server(routes: Router, port: u16) -> color_eyre::Result<()> {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(RequestSpans)
        .on_response(RequestSpans);

    let app = routes.layer(trace_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Failed to run server")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for ctrl-c, shutting down");
        return;
    }

    tracing::info!("Received ctrl-c, shutting down");
}
