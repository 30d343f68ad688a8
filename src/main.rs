// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imagepullsecret_patcher::config::Config;
use imagepullsecret_patcher::kubernetes::create_client;
use imagepullsecret_patcher::reconcilers::Reconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the info default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting imagepullsecret-patcher {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Config: secrets={}, all_sa={}, force={}, managedonly={}, run_once={}, interval={}s",
        config.secret_names,
        config.patch_all_service_accounts,
        config.force,
        config.managed_only,
        config.run_once,
        config.loop_interval.as_secs()
    );

    let client = create_client().await?;

    Reconciler::new(client, config)
        .run_until(shutdown_signal())
        .await?;

    info!("imagepullsecret-patcher stopped");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
