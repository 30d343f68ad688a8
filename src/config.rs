// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env as vars};
use crate::error::{PatcherError, Result};
use crate::types::RegistrySecrets;
use std::env;
use std::time::Duration;

/// Patcher configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Secrets every targeted ServiceAccount must reference
    pub secret_names: RegistrySecrets,
    /// Exit after a single cycle
    pub run_once: bool,
    /// Delay between the end of one cycle and the start of the next
    pub loop_interval: Duration,
    /// Target every ServiceAccount instead of only "default"
    pub patch_all_service_accounts: bool,
    /// Patch even when the configured secrets are already attached
    pub force: bool,
    /// Only touch ServiceAccounts that already carry one of the configured secrets
    pub managed_only: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_names = RegistrySecrets::parse(
            &lookup(vars::REGISTRY_SECRET_NAMES).unwrap_or_default(),
        );
        if secret_names.is_empty() {
            return Err(PatcherError::MissingConfig(vars::REGISTRY_SECRET_NAMES));
        }

        let loop_interval = match lookup(vars::LOOP_INTERVAL) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|e| PatcherError::InvalidConfig {
                    key: vars::LOOP_INTERVAL,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(defaults::LOOP_INTERVAL_SECS),
        };

        let flag = |key: &str, default: bool| lookup(key).map_or(default, |v| parse_bool(&v));

        Ok(Config {
            secret_names,
            run_once: flag(vars::RUN_ONCE, defaults::RUN_ONCE),
            loop_interval,
            patch_all_service_accounts: flag(
                vars::PATCH_ALL_SERVICEACCOUNTS,
                defaults::PATCH_ALL_SERVICEACCOUNTS,
            ),
            force: flag(vars::FORCE, defaults::FORCE),
            managed_only: flag(vars::MANAGEDONLY, defaults::MANAGEDONLY),
        })
    }
}

/// "true", "1" and "yes" (any case) are true, everything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
