// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::collections::BTreeSet;

/// The ordered, de-duplicated set of image-pull secret names to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySecrets {
    names: Vec<String>,
}

impl RegistrySecrets {
    /// Parse a comma-separated list. Entries are trimmed, blanks are dropped
    /// and later duplicates are ignored.
    pub fn parse(raw: &str) -> Self {
        Self::from_names(raw.split(','))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !unique.iter().any(|n| n == name) {
                unique.push(name.to_string());
            }
        }
        Self { names: unique }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when every configured name is in `current`.
    pub fn is_subset_of(&self, current: &BTreeSet<&str>) -> bool {
        self.names.iter().all(|n| current.contains(n.as_str()))
    }

    /// True when at least one configured name is in `current`.
    pub fn intersects(&self, current: &BTreeSet<&str>) -> bool {
        self.names.iter().any(|n| current.contains(n.as_str()))
    }

    /// Configured names absent from `current`, in configured order.
    pub fn missing_from<'a>(
        &'a self,
        current: &'a BTreeSet<&'a str>,
    ) -> impl Iterator<Item = &'a str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |n| !current.contains(n))
    }
}

impl std::fmt::Display for RegistrySecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}
