// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Layered kubeconfig sources and context resolution

use crate::error::{FederationError, Result};
use kube::config::Kubeconfig;
use std::path::Path;
use tracing::{debug, instrument};

/// Kubeconfig sources consulted when resolving a context.
///
/// The global source is the user's default kubeconfig. A non-empty explicit
/// source replaces it entirely.
#[derive(Debug, Clone, Default)]
pub struct KubeconfigSources {
    pub global: Kubeconfig,
    pub explicit: Option<Kubeconfig>,
}

/// Server address and minified kubeconfig for a single context
#[derive(Debug, Clone)]
pub struct ResolvedContext {
    pub context: String,
    pub server: String,
    pub credentials: Kubeconfig,
}

impl ResolvedContext {
    /// Serialize the credential bundle as stored in the member's secret
    pub fn credentials_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.credentials)
            .map_err(|e| FederationError::CredentialsError(e.to_string()))
    }
}

impl KubeconfigSources {
    pub fn new(global: Kubeconfig, explicit: Option<Kubeconfig>) -> Self {
        Self { global, explicit }
    }

    /// Load the default kubeconfig and, if given, an explicit kubeconfig file.
    ///
    /// An empty explicit path counts as not given. The default kubeconfig may
    /// be absent only when an explicit one is supplied.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = match explicit.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => {
                debug!("Reading explicit kubeconfig {}", path.display());
                Some(Kubeconfig::read_from(path).map_err(|e| {
                    FederationError::KubeconfigError(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))
                })?)
            }
            None => None,
        };

        let global = match Kubeconfig::read() {
            Ok(kubeconfig) => kubeconfig,
            Err(e) if explicit.is_some() => {
                debug!("No default kubeconfig available: {}", e);
                Kubeconfig::default()
            }
            Err(e) => {
                return Err(FederationError::KubeconfigError(format!(
                    "Failed to read default kubeconfig: {}",
                    e
                )))
            }
        };

        Ok(Self { global, explicit })
    }

    /// Sources in lookup order
    pub fn candidates(&self) -> Vec<&Kubeconfig> {
        match &self.explicit {
            Some(explicit) if !explicit.contexts.is_empty() => vec![explicit],
            _ => vec![&self.global],
        }
    }

    /// Pick the source and context name to build a client from.
    ///
    /// Without a context name, the current context of the first source is used.
    pub fn select(&self, context: Option<&str>) -> Result<(&Kubeconfig, String)> {
        match context {
            Some(name) => self
                .candidates()
                .into_iter()
                .find(|kc| kc.contexts.iter().any(|c| c.name == name))
                .map(|kc| (kc, name.to_string()))
                .ok_or_else(|| FederationError::ContextNotFound(name.to_string())),
            None => {
                let kubeconfig = self.candidates()[0];
                let current = kubeconfig.current_context.clone().ok_or_else(|| {
                    FederationError::KubeconfigError("no current context is set".to_string())
                })?;
                Ok((kubeconfig, current))
            }
        }
    }

    /// Resolve the server address and credentials for a named context
    #[instrument(skip(self))]
    pub fn resolve(&self, context: &str) -> Result<ResolvedContext> {
        let (kubeconfig, _) = self.select(Some(context))?;
        let named = kubeconfig
            .contexts
            .iter()
            .find(|c| c.name == context)
            .ok_or_else(|| FederationError::ContextNotFound(context.to_string()))?;

        let Some(ctx) = named.context.as_ref() else {
            return Err(FederationError::KubeconfigError(format!(
                "context \"{}\" is empty",
                context
            )));
        };

        let Some(cluster) = kubeconfig.clusters.iter().find(|c| c.name == ctx.cluster) else {
            return Err(FederationError::KubeconfigError(format!(
                "cluster \"{}\" of context \"{}\" not found",
                ctx.cluster, context
            )));
        };

        let server = cluster
            .cluster
            .as_ref()
            .and_then(|c| c.server.clone())
            .ok_or_else(|| {
                FederationError::KubeconfigError(format!(
                    "cluster \"{}\" has no server address",
                    ctx.cluster
                ))
            })?;

        url::Url::parse(&server).map_err(|e| {
            FederationError::KubeconfigError(format!(
                "invalid server address \"{}\" for cluster \"{}\": {}",
                server, ctx.cluster, e
            ))
        })?;

        let user = ctx.user.as_deref();
        let credentials = Kubeconfig {
            clusters: vec![cluster.clone()],
            auth_infos: kubeconfig
                .auth_infos
                .iter()
                .filter(|a| user == Some(a.name.as_str()))
                .cloned()
                .collect(),
            contexts: vec![named.clone()],
            current_context: Some(context.to_string()),
            kind: Some("Config".to_string()),
            api_version: Some("v1".to_string()),
            ..Default::default()
        };

        debug!("Resolved context {} to server {}", context, server);

        Ok(ResolvedContext {
            context: context.to_string(),
            server,
            credentials,
        })
    }
}
