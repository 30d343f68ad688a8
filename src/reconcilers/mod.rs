// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Polling reconcilers that converge ServiceAccounts toward the configured secrets.

pub mod cycle;
pub mod service_account;

pub use cycle::{CycleSummary, Reconciler};
pub use service_account::{
    plan_patch, reconcile_service_account, Outcome, PatchPlan, PatchPolicy, SkipReason,
};
