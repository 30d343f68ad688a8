// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace and ServiceAccount access.

pub mod client;
pub mod namespaces;
pub mod service_accounts;

pub use client::{create_client, ConfigSource};
pub use namespaces::{is_namespace_excluded, list_eligible_namespaces};
pub use service_accounts::{
    get_service_account, list_target_service_accounts, patch_image_pull_secrets,
};
