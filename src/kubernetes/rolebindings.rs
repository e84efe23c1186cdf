// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Role binding creation for user access to provisioned namespaces

use crate::constants::ROLE_BINDING_SUFFIX;
use crate::error::{BivouacError, Result};
use k8s_openapi::api::rbac::v1::{RoleBinding, RoleRef, Subject};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{info, instrument};

const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Bind `user` to the ClusterRole `role` within `namespace`.
///
/// The binding is named `<prefix>troubleshooter`; its lifetime is owned by
/// the namespace, so nothing tracks it after creation.
#[instrument(skip(client))]
pub async fn create_role_binding(
    client: &Client,
    namespace: &str,
    prefix: &str,
    user: &str,
    role: &str,
) -> Result<RoleBinding> {
    let name = format!("{}{}", prefix, ROLE_BINDING_SUFFIX);
    let binding = RoleBinding {
        metadata: ObjectMeta {
            name: Some(name.clone()),
            ..Default::default()
        },
        subjects: Some(vec![Subject {
            api_group: Some(RBAC_API_GROUP.to_string()),
            kind: "User".to_string(),
            name: user.to_string(),
            ..Default::default()
        }]),
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_string(),
            kind: "ClusterRole".to_string(),
            name: role.to_string(),
        },
    };

    let role_bindings: Api<RoleBinding> = Api::namespaced(client.clone(), namespace);
    let created = role_bindings
        .create(&PostParams::default(), &binding)
        .await
        .map_err(|e| {
            BivouacError::RoleBinding(format!(
                "Failed to create role binding {} in namespace {}: {}",
                name, namespace, e
            ))
        })?;

    info!("Created rolebinding {} in namespace {}", name, namespace);
    Ok(created)
}
