// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Federation API resource types.

pub mod cluster;

pub use cluster::{Cluster, ClusterSpec, SecretReference, ServerAddressByClientCidr};
