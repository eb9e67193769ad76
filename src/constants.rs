// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace on the host cluster holding member credentials
pub const DEFAULT_SYSTEM_NAMESPACE: &str = "federation-system";

/// Key under which the member kubeconfig is stored in its credentials secret
pub const KUBECONFIG_SECRET_KEY: &str = "kubeconfig";

/// Client CIDR advertised for a member's server address
pub const DEFAULT_CLIENT_CIDR: &str = "0.0.0.0/0";

/// Resource kinds used in error reporting
pub mod kinds {
    pub const CLUSTER: &str = "cluster";
    pub const SECRET: &str = "secret";
}

/// Environment variables read by [`crate::config::Config`]
pub mod env {
    pub const SYSTEM_NAMESPACE: &str = "FEDERATION_SYSTEM_NAMESPACE";
}
