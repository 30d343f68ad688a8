// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys read by the patcher
pub mod annotations {
    /// When set to "true" on a namespace, the namespace is skipped for the cycle
    pub const EXCLUDE: &str = "k8s.titansoft.com/imagepullsecret-patcher-exclude";
}

/// Field manager recorded on every patch
pub const OPERATOR_NAME: &str = "imagepullsecret-patcher";

/// ServiceAccount targeted when not patching every ServiceAccount
pub const DEFAULT_SERVICE_ACCOUNT: &str = "default";

/// Token mounted into pods running in-cluster
pub const IN_CLUSTER_TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Environment variable names
pub mod env {
    pub const REGISTRY_SECRET_NAMES: &str = "REGISTRY_SECRET_NAMES";
    pub const RUN_ONCE: &str = "RUN_ONCE";
    pub const LOOP_INTERVAL: &str = "LOOP_INTERVAL";
    pub const PATCH_ALL_SERVICEACCOUNTS: &str = "PATCH_ALL_SERVICEACCOUNTS";
    pub const FORCE: &str = "FORCE";
    pub const MANAGEDONLY: &str = "MANAGEDONLY";
}

/// Defaults applied when an optional variable is unset
pub mod defaults {
    pub const LOOP_INTERVAL_SECS: u64 = 10;
    pub const RUN_ONCE: bool = false;
    pub const PATCH_ALL_SERVICEACCOUNTS: bool = false;
    pub const FORCE: bool = true;
    pub const MANAGEDONLY: bool = false;
}
