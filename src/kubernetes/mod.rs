// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Thin wrappers around the cluster namespace and RBAC stores.

pub mod namespaces;
pub mod rolebindings;

pub use namespaces::{
    delete_namespace, ensure_namespace_exists, list_namespace_names, NamespaceOutcome,
};
pub use rolebindings::create_role_binding;
