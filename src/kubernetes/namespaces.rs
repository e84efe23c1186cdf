// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{BivouacError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{info, instrument};

/// What `ensure_namespace_exists` found in the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceOutcome {
    Created,
    AlreadyExists,
}

/// Ensure a namespace exists in the cluster, create if it doesn't.
///
/// A namespace that is already present, including one created by a
/// concurrent run between our check and our create, is reported as
/// [`NamespaceOutcome::AlreadyExists`] rather than an error.
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str) -> Result<NamespaceOutcome> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            info!("Namespace {} already exists, skipping creation", namespace);
            Ok(NamespaceOutcome::AlreadyExists)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", namespace);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(namespace.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            match namespaces.create(&PostParams::default(), &ns).await {
                Ok(_) => {
                    info!("Created namespace {}", namespace);
                    Ok(NamespaceOutcome::Created)
                }
                Err(kube::Error::Api(err)) if err.code == 409 => {
                    info!("Namespace {} already exists, skipping creation", namespace);
                    Ok(NamespaceOutcome::AlreadyExists)
                }
                Err(e) => Err(BivouacError::NamespaceCreate(format!(
                    "Failed to create namespace {}: {}",
                    namespace, e
                ))),
            }
        }
        Err(e) => Err(BivouacError::NamespaceCreate(format!(
            "Failed to check namespace {}: {}",
            namespace, e
        ))),
    }
}

/// List the names of all namespaces in the cluster
pub async fn list_namespace_names(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;

    Ok(list.items.iter().map(|ns| ns.name_any()).collect())
}

/// Delete a namespace by name
#[instrument(skip(client))]
pub async fn delete_namespace(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces
        .delete(namespace, &DeleteParams::default())
        .await?;

    info!("Deleted namespace {}", namespace);
    Ok(())
}
