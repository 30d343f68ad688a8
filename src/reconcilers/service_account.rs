// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ServiceAccount reconciler - ensures the configured image-pull secrets are attached.

use crate::kubernetes::{get_service_account, patch_image_pull_secrets};
use crate::types::RegistrySecrets;
use k8s_openapi::api::core::v1::{LocalObjectReference, ServiceAccount};
use kube::Client;
use std::collections::BTreeSet;
use tracing::{debug, error, info, instrument, warn};

/// Policy flags applied to every ServiceAccount in a cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchPolicy {
    pub force: bool,
    pub managed_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// None of the configured secrets are attached and managed-only is on
    Unmanaged,
    /// Every configured secret is already attached
    AlreadySatisfied,
}

/// What to do with a ServiceAccount
#[derive(Debug, Clone, PartialEq)]
pub enum PatchPlan {
    Skip(SkipReason),
    Apply(Vec<LocalObjectReference>),
}

/// Result of reconciling a single ServiceAccount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Patched,
    Skipped(SkipReason),
    NotFound,
    ReadFailed,
    PatchFailed,
}

/// Decide whether a ServiceAccount needs patching and compute the new list.
///
/// Existing references are kept in place; configured names not yet present
/// are appended in configured order.
pub fn plan_patch(
    service_account: &ServiceAccount,
    secrets: &RegistrySecrets,
    policy: PatchPolicy,
) -> PatchPlan {
    let existing = service_account.image_pull_secrets.as_deref().unwrap_or_default();
    let current: BTreeSet<&str> = existing.iter().map(|r| r.name.as_str()).collect();

    if policy.managed_only && !secrets.intersects(&current) {
        return PatchPlan::Skip(SkipReason::Unmanaged);
    }

    if !policy.force && secrets.is_subset_of(&current) {
        return PatchPlan::Skip(SkipReason::AlreadySatisfied);
    }

    let mut updated = existing.to_vec();
    updated.extend(secrets.missing_from(&current).map(|name| LocalObjectReference {
        name: name.to_string(),
    }));

    PatchPlan::Apply(updated)
}

/// Fetch, plan and patch one ServiceAccount. Failures are logged, never returned.
#[instrument(skip_all, fields(namespace = %namespace, service_account = %name))]
pub async fn reconcile_service_account(
    client: &Client,
    namespace: &str,
    name: &str,
    secrets: &RegistrySecrets,
    policy: PatchPolicy,
) -> Outcome {
    let service_account = match get_service_account(client, namespace, name).await {
        Ok(Some(sa)) => sa,
        Ok(None) => {
            debug!("ServiceAccount {}/{} not found, skipping", namespace, name);
            return Outcome::NotFound;
        }
        Err(e) => {
            warn!("Failed to read ServiceAccount {}/{}: {}", namespace, name, e);
            return Outcome::ReadFailed;
        }
    };

    let updated = match plan_patch(&service_account, secrets, policy) {
        PatchPlan::Skip(reason) => {
            debug!("ServiceAccount {}/{} skipped: {:?}", namespace, name, reason);
            return Outcome::Skipped(reason);
        }
        PatchPlan::Apply(updated) => updated,
    };

    match patch_image_pull_secrets(client, namespace, name, &updated).await {
        Ok(()) => {
            info!("Patched {}/{}", namespace, name);
            Outcome::Patched
        }
        Err(e) => {
            error!("Failed to patch {}/{}: {}", namespace, name, e);
            Outcome::PatchFailed
        }
    }
}
