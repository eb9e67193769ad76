// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FederationError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("context \"{0}\" not found in kubeconfig")]
    ContextNotFound(String),

    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} \"{name}\" already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("Failed to serialize credentials: {0}")]
    CredentialsError(String),
}

impl FederationError {
    /// Classify a Kubernetes API error for a named resource.
    ///
    /// 404 and 409 responses become [`FederationError::NotFound`] and
    /// [`FederationError::AlreadyExists`]; everything else is kept as is.
    pub fn from_api(err: kube::Error, kind: &'static str, name: &str) -> Self {
        match err {
            kube::Error::Api(ref resp) if resp.code == 404 => FederationError::NotFound {
                kind,
                name: name.to_string(),
            },
            kube::Error::Api(ref resp) if resp.code == 409 => FederationError::AlreadyExists {
                kind,
                name: name.to_string(),
            },
            e => FederationError::KubeError(e),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FederationError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FederationError>;
