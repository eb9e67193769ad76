// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_CLIENT_CIDR;
use kube::{api::ObjectMeta, CustomResource};
use serde::{Deserialize, Serialize};

/// A member cluster registered with the federation control plane.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "federation", version = "v1beta1", kind = "Cluster")]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Server addresses the member can be reached on, per client network
    #[serde(rename = "serverAddressByClientCIDRs", default)]
    pub server_address_by_client_cidrs: Vec<ServerAddressByClientCidr>,
    /// Secret in the system namespace holding the member's kubeconfig
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretReference>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerAddressByClientCidr {
    #[serde(rename = "clientCIDR")]
    pub client_cidr: String,
    pub server_address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct SecretReference {
    pub name: String,
}

impl Cluster {
    /// Build the membership record for a cluster joining the federation
    pub fn member(name: &str, server_address: &str, secret_name: &str) -> Self {
        Cluster {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec: ClusterSpec {
                server_address_by_client_cidrs: vec![ServerAddressByClientCidr {
                    client_cidr: DEFAULT_CLIENT_CIDR.to_string(),
                    server_address: server_address.to_string(),
                }],
                secret_ref: Some(SecretReference {
                    name: secret_name.to_string(),
                }),
            },
        }
    }

    /// Name of the secret holding this member's credentials, if referenced
    pub fn secret_name(&self) -> Option<&str> {
        self.spec
            .secret_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn server_address(&self) -> Option<&str> {
        self.spec
            .server_address_by_client_cidrs
            .first()
            .map(|s| s.server_address.as_str())
    }
}
