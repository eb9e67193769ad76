// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Membership records in the federation control plane

use crate::constants::kinds;
use crate::error::{FederationError, Result};
use crate::types::cluster::Cluster;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// Typed access to the federation control plane's cluster collection
#[derive(Clone)]
pub struct MembershipClient {
    api: Api<Cluster>,
}

impl MembershipClient {
    pub fn new(federation_client: Client) -> Self {
        Self {
            api: Api::all(federation_client),
        }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Cluster> {
        self.api
            .get(name)
            .await
            .map_err(|e| FederationError::from_api(e, kinds::CLUSTER, name))
    }

    #[instrument(skip(self, cluster), fields(cluster = %cluster.name_any()))]
    pub async fn create(&self, cluster: &Cluster) -> Result<Cluster> {
        let name = cluster.name_any();
        let created = self
            .api
            .create(&PostParams::default(), cluster)
            .await
            .map_err(|e| FederationError::from_api(e, kinds::CLUSTER, &name))?;

        debug!("Created cluster {}", name);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.api
            .delete(name, &DeleteParams::default())
            .await
            .map_err(|e| FederationError::from_api(e, kinds::CLUSTER, name))?;

        debug!("Deleted cluster {}", name);
        Ok(())
    }
}
