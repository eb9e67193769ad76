// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface for `kubefed join` and `kubefed unjoin`.

use crate::config::Config;
use crate::federation::{join, unjoin, JoinOutcome, JoinRequest, UnjoinOutcome};
use crate::kubernetes::{create_client_for_context, KubeconfigSources};
use crate::membership::{CredentialSecretClient, MembershipClient};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Manage cluster membership of a federation
#[derive(Parser, Debug)]
#[command(name = "kubefed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Kubeconfig file to use instead of the default one
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Context of the federation control plane (default: current context)
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Context of the cluster hosting the federation control plane
    #[arg(long = "host-cluster-context", alias = "host", global = true)]
    pub host_cluster_context: Option<String>,

    /// Namespace on the host cluster holding member credentials
    /// (default: $FEDERATION_SYSTEM_NAMESPACE, then federation-system)
    #[arg(long, global = true)]
    pub federation_system_namespace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join a cluster to the federation
    Join(JoinArgs),
    /// Remove a cluster from the federation
    Unjoin(UnjoinArgs),
}

#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Name of the cluster to join
    pub cluster_name: String,

    /// Kubeconfig context of the cluster to join (default: the cluster name)
    #[arg(long)]
    pub cluster_context: Option<String>,

    /// Name of the secret holding the cluster's credentials (default: the cluster name)
    #[arg(long)]
    pub secret_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct UnjoinArgs {
    /// Name of the cluster to remove
    pub cluster_name: String,
}

/// Command outcome as shown to the operator
pub trait Outcome: std::fmt::Display {
    fn is_success(&self) -> bool;
}

impl Outcome for JoinOutcome {
    fn is_success(&self) -> bool {
        true
    }
}

impl Outcome for UnjoinOutcome {
    fn is_success(&self) -> bool {
        UnjoinOutcome::is_success(self)
    }
}

/// Write an outcome to the output stream on success, to the warning stream otherwise.
///
/// Success lines are newline terminated, warnings are written as is.
pub fn render(outcome: &impl Outcome, out: &mut impl Write, warn: &mut impl Write) -> std::io::Result<()> {
    if outcome.is_success() {
        writeln!(out, "{}", outcome)
    } else {
        write!(warn, "{}", outcome)
    }
}

impl Cli {
    /// Run the command against the configured clusters
    pub async fn run(self) -> Result<()> {
        let config = Config::from_env()
            .with_system_namespace(self.federation_system_namespace.as_deref());
        let sources = KubeconfigSources::load(self.kubeconfig.as_deref())?;

        let host_context = self
            .host_cluster_context
            .as_deref()
            .context("--host-cluster-context is required")?;

        let federation_client = create_client_for_context(&sources, self.context.as_deref())
            .await
            .context("Failed to connect to the federation control plane")?;
        let host_client = create_client_for_context(&sources, Some(host_context))
            .await
            .context("Failed to connect to the host cluster")?;

        let clusters = MembershipClient::new(federation_client);
        let secrets = CredentialSecretClient::new(host_client, &config.system_namespace);

        let (mut stdout, mut stderr) = (std::io::stdout(), std::io::stderr());
        match self.command {
            Commands::Join(args) => {
                info!("Joining cluster {}", args.cluster_name);
                let request = JoinRequest {
                    cluster_name: args.cluster_name,
                    cluster_context: args.cluster_context,
                    secret_name: args.secret_name,
                };
                let outcome = join(&clusters, &secrets, &sources, &request).await?;
                render(&outcome, &mut stdout, &mut stderr)?;
            }
            Commands::Unjoin(args) => {
                info!("Unjoining cluster {}", args.cluster_name);
                let outcome = unjoin(&clusters, &secrets, &args.cluster_name).await?;
                render(&outcome, &mut stdout, &mut stderr)?;
            }
        }

        Ok(())
    }
}
