pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;

use std::future::Future;

use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::AppError;
use crate::middleware::request_logger;
use crate::routes::root;

pub fn create_app(config: &Config) -> Router {
    let app = Router::new().route("/", get(root::handler));

    if config.debug {
        app.layer(from_fn(request_logger))
    } else {
        app
    }
}

/// Runs the accept loop until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// Stops accepting once `signal` resolves; in-flight requests are answered first.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(AppError::Serve)
}

pub async fn run_app(config: Config) -> Result<(), AppError> {
    logging::init_logger(config.debug);
    let app = create_app(&config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(debug = config.debug, "listening on http://{}", addr);

    serve(listener, app).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
