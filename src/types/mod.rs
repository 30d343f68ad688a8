// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain value types shared by configuration and reconciliation.

pub mod registry_secrets;

pub use registry_secrets::RegistrySecrets;
