// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ServiceAccount listing, reading and image-pull secret patching

use crate::constants::{DEFAULT_SERVICE_ACCOUNT, OPERATOR_NAME};
use crate::error::Result;
use k8s_openapi::api::core::v1::{LocalObjectReference, ServiceAccount};
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client, ResourceExt,
};
use serde::Serialize;
use tracing::{instrument, warn};

/// Merge patch body replacing the image-pull secret list
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ImagePullSecretsPatch<'a> {
    image_pull_secrets: &'a [LocalObjectReference],
}

/// Names of the ServiceAccounts to reconcile in a namespace.
///
/// Without `patch_all` this is always `["default"]` and the API is not
/// consulted. A failed listing is logged and yields no targets.
#[instrument(skip(client))]
pub async fn list_target_service_accounts(
    client: &Client,
    namespace: &str,
    patch_all: bool,
) -> Vec<String> {
    if !patch_all {
        return vec![DEFAULT_SERVICE_ACCOUNT.to_string()];
    }

    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    match service_accounts.list(&ListParams::default()).await {
        Ok(list) => list.items.iter().map(|sa| sa.name_any()).collect(),
        Err(e) => {
            warn!("Failed to list ServiceAccounts in {}: {}", namespace, e);
            Vec::new()
        }
    }
}

/// Read a ServiceAccount, returning `None` when it does not exist
pub async fn get_service_account(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<Option<ServiceAccount>> {
    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    match service_accounts.get(name).await {
        Ok(sa) => Ok(Some(sa)),
        Err(kube::Error::Api(err)) if err.code == 404 => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Replace the image-pull secret list of a ServiceAccount
pub async fn patch_image_pull_secrets(
    client: &Client,
    namespace: &str,
    name: &str,
    image_pull_secrets: &[LocalObjectReference],
) -> Result<()> {
    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    let pp = PatchParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };
    let body = ImagePullSecretsPatch { image_pull_secrets };

    service_accounts
        .patch(name, &pp, &Patch::Merge(&body))
        .await?;

    Ok(())
}
