// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Join and unjoin of federation member clusters.

pub mod join;
pub mod unjoin;

pub use join::{join, JoinOutcome, JoinRequest};
pub use unjoin::{unjoin, UnjoinOutcome};
