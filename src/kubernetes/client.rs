// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the federation control plane and the host cluster

use crate::error::{FederationError, Result};
use crate::kubernetes::kubeconfig::KubeconfigSources;
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client for a context in the given kubeconfig sources.
///
/// Without a context name the current context is used.
#[instrument(skip(sources))]
pub async fn create_client_for_context(
    sources: &KubeconfigSources,
    context: Option<&str>,
) -> Result<Client> {
    let (kubeconfig, context) = sources.select(context)?;

    debug!("Creating Kubernetes client for context {}", context);

    let options = KubeConfigOptions {
        context: Some(context.clone()),
        ..Default::default()
    };

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig.clone(), &options)
        .await
        .map_err(|e| {
            FederationError::KubeconfigError(format!(
                "Failed to create config for context {}: {}",
                context, e
            ))
        })?;

    Client::try_from(client_config)
        .map_err(|e| FederationError::KubeconfigError(format!("Failed to create client: {}", e)))
}
