// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig resolution and client creation.

pub mod client;
pub mod kubeconfig;

pub use client::create_client_for_context;
pub use kubeconfig::{KubeconfigSources, ResolvedContext};
