// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registering a cluster with the federation

use crate::error::Result;
use crate::kubernetes::KubeconfigSources;
use crate::membership::{CredentialSecretClient, MembershipClient};
use crate::types::cluster::Cluster;
use std::fmt;
use tracing::{info, instrument};

/// Parameters of a join
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub cluster_name: String,
    /// Kubeconfig context of the joining cluster, defaults to the cluster name
    pub cluster_context: Option<String>,
    /// Name of the credentials secret, defaults to the cluster name
    pub secret_name: Option<String>,
}

impl JoinRequest {
    pub fn new(cluster_name: &str) -> Self {
        Self {
            cluster_name: cluster_name.to_string(),
            cluster_context: None,
            secret_name: None,
        }
    }

    pub fn cluster_context(&self) -> &str {
        self.cluster_context.as_deref().unwrap_or(&self.cluster_name)
    }

    pub fn secret_name(&self) -> &str {
        self.secret_name.as_deref().unwrap_or(&self.cluster_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined { cluster: String },
}

impl fmt::Display for JoinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinOutcome::Joined { cluster } => {
                write!(f, "Successfully added cluster {:?} to federation", cluster)
            }
        }
    }
}

/// Join a cluster to the federation.
///
/// The credentials secret is created first; the membership record is only
/// created once the secret exists. Any failure aborts the join.
#[instrument(skip(clusters, secrets, sources), fields(cluster = %request.cluster_name))]
pub async fn join(
    clusters: &MembershipClient,
    secrets: &CredentialSecretClient,
    sources: &KubeconfigSources,
    request: &JoinRequest,
) -> Result<JoinOutcome> {
    let resolved = sources.resolve(request.cluster_context())?;
    let secret_name = request.secret_name();

    info!(
        "Creating credentials secret {}/{} for cluster {}",
        secrets.namespace(),
        secret_name,
        request.cluster_name
    );
    let secret = secrets.credentials_secret(secret_name, &resolved.credentials_yaml()?);
    secrets.create(&secret).await?;

    info!(
        "Registering cluster {} at {}",
        request.cluster_name, resolved.server
    );
    let cluster = Cluster::member(&request.cluster_name, &resolved.server, secret_name);
    clusters.create(&cluster).await?;

    Ok(JoinOutcome::Joined {
        cluster: request.cluster_name.clone(),
    })
}
