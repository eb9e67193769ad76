// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed clients for membership records and their credentials secrets.

pub mod clusters;
pub mod secrets;

pub use clusters::MembershipClient;
pub use secrets::CredentialSecretClient;
