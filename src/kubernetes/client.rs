// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation with in-cluster / kubeconfig auto-detection

use crate::constants::IN_CLUSTER_TOKEN_PATH;
use crate::error::{PatcherError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use std::path::Path;
use tracing::info;

/// Where the client credentials come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    InCluster,
    Kubeconfig,
}

impl ConfigSource {
    /// In-cluster when the service account token is mounted, kubeconfig otherwise.
    pub fn detect(token_path: &Path) -> Self {
        if token_path.exists() {
            ConfigSource::InCluster
        } else {
            ConfigSource::Kubeconfig
        }
    }
}

/// Create a Kubernetes client for the cluster the patcher runs against
pub async fn create_client() -> Result<Client> {
    let config = match ConfigSource::detect(Path::new(IN_CLUSTER_TOKEN_PATH)) {
        ConfigSource::InCluster => {
            let config = KConfig::incluster().map_err(|e| {
                PatcherError::KubeconfigError(format!("Failed to load in-cluster config: {}", e))
            })?;
            info!("Using in-cluster Kubernetes config");
            config
        }
        ConfigSource::Kubeconfig => {
            let config = KConfig::from_kubeconfig(&KubeConfigOptions::default())
                .await
                .map_err(|e| {
                    PatcherError::KubeconfigError(format!("Failed to load kubeconfig: {}", e))
                })?;
            info!("Using local kubeconfig");
            config
        }
    };

    Client::try_from(config)
        .map_err(|e| PatcherError::KubeconfigError(format!("Failed to create client: {}", e)))
}
