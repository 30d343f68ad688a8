// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatcherError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load Kubernetes config: {0}")]
    KubeconfigError(String),

    #[error("{0} environment variable is required")]
    MissingConfig(&'static str),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to list namespaces: {0}")]
    NamespaceList(#[source] kube::Error),
}

pub type Result<T> = std::result::Result<T, PatcherError>;
