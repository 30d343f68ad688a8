// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Polling reconciler - walks every eligible namespace on a fixed interval.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{list_eligible_namespaces, list_target_service_accounts};
use crate::reconcilers::service_account::{reconcile_service_account, Outcome, PatchPolicy};
use kube::Client;
use std::future::Future;
use tokio::time::sleep;
use tracing::{info, instrument};

/// Counters for one reconciliation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub namespaces: usize,
    pub service_accounts: usize,
    pub patched: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl CycleSummary {
    fn record(&mut self, outcome: Outcome) {
        self.service_accounts += 1;
        match outcome {
            Outcome::Patched => self.patched += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::ReadFailed | Outcome::PatchFailed => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Sleeping,
    Terminated,
}

pub struct Reconciler {
    client: Client,
    config: Config,
}

impl Reconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Run cycles until single-shot completion or until `shutdown` resolves
    /// while sleeping. A namespace listing failure ends the loop with an error.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut state = LoopState::Running;

        loop {
            state = match state {
                LoopState::Running => {
                    self.run_cycle().await?;
                    if self.config.run_once {
                        LoopState::Terminated
                    } else {
                        LoopState::Sleeping
                    }
                }
                LoopState::Sleeping => {
                    info!("Sleeping for {} seconds...", self.config.loop_interval.as_secs());
                    tokio::select! {
                        _ = &mut shutdown => {
                            info!("Shutdown requested, stopping");
                            LoopState::Terminated
                        }
                        _ = sleep(self.config.loop_interval) => LoopState::Running,
                    }
                }
                LoopState::Terminated => return Ok(()),
            };
        }
    }

    /// Perform one full pass over all eligible namespaces
    #[instrument(skip(self))]
    pub async fn run_cycle(&self) -> Result<CycleSummary> {
        let namespaces = list_eligible_namespaces(&self.client).await?;
        info!(
            "Processing {} namespaces (excluding annotated ones)",
            namespaces.len()
        );

        let policy = PatchPolicy {
            force: self.config.force,
            managed_only: self.config.managed_only,
        };
        let mut summary = CycleSummary {
            namespaces: namespaces.len(),
            ..Default::default()
        };

        for namespace in &namespaces {
            let targets = list_target_service_accounts(
                &self.client,
                namespace,
                self.config.patch_all_service_accounts,
            )
            .await;

            for name in &targets {
                let outcome = reconcile_service_account(
                    &self.client,
                    namespace,
                    name,
                    &self.config.secret_names,
                    policy,
                )
                .await;
                summary.record(outcome);
            }
        }

        info!(
            "Completed cycle: patched {} ServiceAccount(s) ({} checked, {} skipped, {} not found, {} failed)",
            summary.patched,
            summary.service_accounts,
            summary.skipped,
            summary.not_found,
            summary.failed
        );

        Ok(summary)
    }
}
