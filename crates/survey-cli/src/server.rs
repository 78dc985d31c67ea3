//! Serve loop and shutdown handling.
//!
//! The snapshot is written exactly once, after the server has stopped,
//! whichever way it stopped: a shutdown signal, a server error, or a panic
//! in the server task.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use survey_api::AppState;
use survey_config::ServerConfig;
use survey_db::{JsonDb, SurveyService};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub async fn serve(
    config: &ServerConfig,
    service: Arc<SurveyService>,
    db: &JsonDb,
) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server started");

    let app = survey_api::router(AppState::new(Arc::clone(&service)));
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    let outcome = tokio::select! {
        () = shutdown_signal() => {
            tracing::info!("graceful shutdown request received");
            let _ = stop_tx.send(());
            if let Ok(joined) = tokio::time::timeout(grace, &mut server).await {
                joined
            } else {
                tracing::warn!(?grace, "in-flight requests did not finish in time, aborting");
                server.abort();
                Ok(Ok(()))
            }
        }
        joined = &mut server => joined,
    };

    tracing::info!("application stopped accepting requests, dumping data");
    let dumped = dump(&service, db);

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(error)) => return Err(error).context("server failed"),
        Err(join_error) => {
            return Err(anyhow::anyhow!("server task failed: {join_error}"));
        }
    }
    dumped
}

/// Write the current snapshot to the data file.
pub fn dump(service: &SurveyService, db: &JsonDb) -> anyhow::Result<()> {
    let snapshot = service.entries();
    match db.dump(&snapshot) {
        Ok(()) => {
            tracing::info!(
                path = %db.path().display(),
                surveys = snapshot.surveys.len(),
                responses = snapshot.response_count(),
                "dumping data complete"
            );
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "dumping data failed");
            Err(error).context("dumping data failed")
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("system call received");
}
