// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_SYSTEM_NAMESPACE};
use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace on the host cluster where credentials secrets are stored
    pub system_namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Override the system namespace, e.g. from a command line flag
    pub fn with_system_namespace(mut self, namespace: Option<&str>) -> Self {
        if let Some(ns) = namespace.filter(|ns| !ns.trim().is_empty()) {
            self.system_namespace = ns.to_string();
        }
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let system_namespace = lookup(vars::SYSTEM_NAMESPACE)
            .filter(|ns| !ns.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_NAMESPACE.to_string());

        Config { system_namespace }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            system_namespace: DEFAULT_SYSTEM_NAMESPACE.to_string(),
        }
    }
}
