// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Removing a cluster from the federation

use crate::error::Result;
use crate::membership::{CredentialSecretClient, MembershipClient};
use std::fmt;
use tracing::{debug, info, instrument};

/// Result of an unjoin. Only [`UnjoinOutcome::Removed`] is a success; every
/// other variant is a warning and the cluster is considered already gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnjoinOutcome {
    Removed { cluster: String },
    ClusterNotFound { cluster: String },
    SecretNotFound { secret: String },
    MissingSecretReference { cluster: String },
}

impl UnjoinOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UnjoinOutcome::Removed { .. })
    }
}

impl fmt::Display for UnjoinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnjoinOutcome::Removed { cluster } => {
                write!(f, "Successfully removed cluster {:?} from federation", cluster)
            }
            UnjoinOutcome::ClusterNotFound { cluster } => write!(
                f,
                "WARNING: cluster {:?} not found in federation, so its credentials' secret couldn't be deleted",
                cluster
            ),
            UnjoinOutcome::SecretNotFound { secret } => write!(
                f,
                "WARNING: secret {:?} not found in the host cluster, so it couldn't be deleted",
                secret
            ),
            UnjoinOutcome::MissingSecretReference { cluster } => write!(
                f,
                "WARNING: cluster {:?} has no credentials' secret reference, so no secret was deleted",
                cluster
            ),
        }
    }
}

/// Remove a cluster from the federation and delete its credentials secret.
///
/// The secret to delete is the one referenced by the membership record, which
/// is read before the record is deleted. Missing resources are reported as
/// warnings; every other failure is returned as an error.
#[instrument(skip(clusters, secrets))]
pub async fn unjoin(
    clusters: &MembershipClient,
    secrets: &CredentialSecretClient,
    cluster_name: &str,
) -> Result<UnjoinOutcome> {
    let cluster = match clusters.get(cluster_name).await {
        Ok(cluster) => cluster,
        Err(e) if e.is_not_found() => {
            info!("Cluster {} is not a federation member", cluster_name);
            return Ok(UnjoinOutcome::ClusterNotFound {
                cluster: cluster_name.to_string(),
            });
        }
        Err(e) => return Err(e),
    };
    let secret_name = cluster.secret_name().map(str::to_string);

    match clusters.delete(cluster_name).await {
        Ok(()) => info!("Removed cluster {} from federation", cluster_name),
        Err(e) if e.is_not_found() => {
            debug!("Cluster {} was already deleted", cluster_name);
        }
        Err(e) => return Err(e),
    }

    let Some(secret_name) = secret_name else {
        info!("Cluster {} does not reference a credentials secret", cluster_name);
        return Ok(UnjoinOutcome::MissingSecretReference {
            cluster: cluster_name.to_string(),
        });
    };

    match secrets.delete(&secret_name).await {
        Ok(()) => {
            info!(
                "Deleted credentials secret {}/{}",
                secrets.namespace(),
                secret_name
            );
            Ok(UnjoinOutcome::Removed {
                cluster: cluster_name.to_string(),
            })
        }
        Err(e) if e.is_not_found() => {
            info!(
                "Credentials secret {}/{} not found",
                secrets.namespace(),
                secret_name
            );
            Ok(UnjoinOutcome::SecretNotFound {
                secret: secret_name,
            })
        }
        Err(e) => Err(e),
    }
}
