// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing and annotation-based exclusion

use crate::constants::annotations;
use crate::error::{PatcherError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// List the names of all namespaces not opted out via annotation.
///
/// A failed list call is returned as [`PatcherError::NamespaceList`]; callers
/// treat it as fatal.
#[instrument(skip(client))]
pub async fn list_eligible_namespaces(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(PatcherError::NamespaceList)?;

    Ok(namespace_list
        .items
        .into_iter()
        .filter(|ns| {
            if is_namespace_excluded(ns) {
                debug!("Skipping namespace {} (excluded via annotation)", ns.name_any());
                false
            } else {
                true
            }
        })
        .map(|ns| ns.name_any())
        .collect())
}

/// Check if a namespace carries the exclude annotation set to exactly "true"
pub fn is_namespace_excluded(namespace: &Namespace) -> bool {
    namespace
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(annotations::EXCLUDE))
        .is_some_and(|v| v == "true")
}
