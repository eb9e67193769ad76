// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credentials secrets in the host cluster's system namespace

use crate::constants::{kinds, KUBECONFIG_SECRET_KEY};
use crate::error::{FederationError, Result};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Typed access to secrets in the federation system namespace
#[derive(Clone)]
pub struct CredentialSecretClient {
    api: Api<Secret>,
    namespace: String,
}

impl CredentialSecretClient {
    pub fn new(host_client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(host_client, namespace),
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn get(&self, name: &str) -> Result<Secret> {
        self.api
            .get(name)
            .await
            .map_err(|e| FederationError::from_api(e, kinds::SECRET, name))
    }

    #[instrument(skip(self, secret), fields(namespace = %self.namespace, secret = %secret.name_any()))]
    pub async fn create(&self, secret: &Secret) -> Result<Secret> {
        let name = secret.name_any();
        let created = self
            .api
            .create(&PostParams::default(), secret)
            .await
            .map_err(|e| FederationError::from_api(e, kinds::SECRET, &name))?;

        debug!("Created secret {}/{}", self.namespace, name);
        Ok(created)
    }

    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.api
            .delete(name, &DeleteParams::default())
            .await
            .map_err(|e| FederationError::from_api(e, kinds::SECRET, name))?;

        debug!("Deleted secret {}/{}", self.namespace, name);
        Ok(())
    }

    /// Build the secret holding a member cluster's kubeconfig
    pub fn credentials_secret(&self, name: &str, kubeconfig: &str) -> Secret {
        Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(self.namespace.clone()),
                ..Default::default()
            },
            data: Some(BTreeMap::from([(
                KUBECONFIG_SECRET_KEY.to_string(),
                ByteString(kubeconfig.as_bytes().to_vec()),
            )])),
            type_: Some("Opaque".to_string()),
            ..Default::default()
        }
    }
}
