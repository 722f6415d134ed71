use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::errors::StartupError;
use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Connect the store, prepare its schema and build the application router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::prepare(&db, &cfg.database).await?;
    let state = ServerState::new(db, cfg);
    Ok(routes::build_router(state, build_cors()))
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight
/// requests for at most `cfg.server.shutdown_timeout()`.
pub async fn serve_until<F>(listener: TcpListener, app: Router, cfg: &AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            return match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e.into()),
                Err(e) => Err(e.into()),
            };
        }
        _ = shutdown => {
            info!(event = "shutdown_requested", "draining in-flight requests");
        }
    }

    let _ = stop_tx.send(());
    let drain = cfg.server.shutdown_timeout();
    match tokio::time::timeout(drain, &mut server).await {
        Ok(Ok(Ok(()))) => info!(event = "shutdown_complete", "server stopped"),
        Ok(Ok(Err(e))) => error!(event = "shutdown_error", error = %e, "server error during drain"),
        Ok(Err(e)) => error!(event = "shutdown_error", error = %e, "server task failed"),
        Err(_) => {
            warn!(event = "shutdown_timeout", timeout = ?drain, "abandoning in-flight requests");
            server.abort();
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
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
}

/// Public entry: build the app and run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(event = "listening", %addr, "catalog server started");
    serve_until(listener, app, &cfg, shutdown_signal()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = 18080;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 18080);
    }
}
