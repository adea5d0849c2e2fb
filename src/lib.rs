//! survey-intake — survey submission service.
//!
//! Accepts slider-style survey submissions over HTTP, remaps them onto the
//! canonical schema, and stores one document per submission.
//!
//! # Architecture
//!
//! ```text
//! client ──► survey-http ──► survey-core (normalize) ──► SurveyStore
//!                                                         ├─ survey-mongo
//!                                                         └─ MemoryStore
//! ```
//!
//! This crate is the bootstrap: pick the store, run the startup ping, serve.

use std::sync::Arc;

use anyhow::Context;
use survey_core::config::{Config, StoreBackend, StoreConfig};
use survey_core::{MemoryStore, SurveyStore};
use survey_mongo::MongoStore;

/// Apply command-line overrides on top of the loaded configuration.
///
/// `--port` wins over both the config file and `SURVEY_SERVER__PORT`.
pub fn apply_overrides(mut config: Config, port: Option<u16>) -> Config {
    if let Some(port) = port {
        config.server.port = port;
    }
    config
}

/// Build the store selected by `store.backend`.
pub async fn open_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn SurveyStore>> {
    match config.backend {
        StoreBackend::Mongodb => {
            let store = MongoStore::connect(config)
                .await
                .context("failed to build the mongodb client from store.uri")?;
            tracing::info!(
                database = %config.database,
                collection = store.collection_name(),
                "using the mongodb store"
            );
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory store; submissions are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// One-shot liveness check at startup.
///
/// A failed ping is only logged unless `store.fail_on_startup_ping` is set.
pub async fn check_store(store: &dyn SurveyStore, config: &StoreConfig) -> anyhow::Result<()> {
    match store.ping().await {
        Ok(()) => {
            tracing::info!(database = %config.database, "store connected");
            Ok(())
        }
        Err(err) if config.fail_on_startup_ping => {
            Err(err).context("store ping failed and store.fail_on_startup_ping is set")
        }
        Err(err) => {
            tracing::warn!(error = %err, "store ping failed; starting anyway");
            Ok(())
        }
    }
}

/// Run the service until Ctrl-C / SIGTERM.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = open_store(&config.store).await?;
    check_store(store.as_ref(), &config.store).await?;

    let app = survey_http::router(store);
    let listener = tokio::net::TcpListener::bind((config.server.bind.as_str(), config.server.port))
        .await
        .with_context(|| format!("binding {}:{}", config.server.bind, config.server.port))?;
    tracing::info!(addr = %listener.local_addr()?, "survey-intake listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("survey-intake stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
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
