// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace provisioning: name assembly, stale-namespace cleanup, creation
//! and optional user role assignment.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{
    create_role_binding, delete_namespace, ensure_namespace_exists, list_namespace_names,
};
use crate::naming::{random_token, NormalizedName};
use kube::Client;
use rand::Rng;
use tracing::{error, info};

/// Provisions one ephemeral namespace per run.
///
/// The RNG is owned by the provisioner and seeded once by the caller, so a
/// fixed seed yields a fully deterministic namespace name.
pub struct Provisioner<R> {
    client: Client,
    rng: R,
}

/// The fixed part of the namespace name, shared by every run for the same
/// branch (and build hash). Stale namespaces are matched against it.
fn assemble_stem(config: &Config, branch: &NormalizedName) -> String {
    match &config.buildhash {
        Some(hash) => format!("{}-{}-{}", config.prefix, branch, hash),
        None => format!("{}-{}-", config.prefix, branch),
    }
}

impl<R: Rng> Provisioner<R> {
    pub fn new(client: Client, rng: R) -> Self {
        Self { client, rng }
    }

    /// Create the namespace for this run and return its name.
    ///
    /// Stale same-stem namespaces are swept first, then the namespace is
    /// created (an existing one is kept as-is), then `--user` is granted the
    /// configured role. Only the creation step can fail the run; the sweep
    /// and the role assignment are best-effort.
    pub async fn provision(&mut self, config: &Config, branch: &NormalizedName) -> Result<String> {
        let stem = assemble_stem(config, branch);
        let namespace = match &config.buildhash {
            Some(_) => stem.clone(),
            None => format!("{}{}", stem, random_token(&mut self.rng)),
        };

        self.cleanup(&stem, &namespace).await;

        ensure_namespace_exists(&self.client, &namespace).await?;

        match &config.user {
            Some(user) => {
                info!(
                    "Assigning role {} in namespace {} to user {}",
                    config.role, namespace, user
                );
                if let Err(e) =
                    create_role_binding(&self.client, &namespace, &config.prefix, user, &config.role)
                        .await
                {
                    // The namespace itself is usable, so the run still succeeds
                    error!("{}", e);
                }
            }
            None => info!("No user was defined - skipping role assignment"),
        }

        Ok(namespace)
    }

    /// Best-effort sweep of namespaces left behind by earlier runs.
    ///
    /// Deletes every namespace whose name starts with `stem`, except `keep`,
    /// the namespace being provisioned right now. Failures are logged and do
    /// not stop the remaining deletes or the run.
    async fn cleanup(&self, stem: &str, keep: &str) {
        info!("Starting to cleanup dangling namespaces");

        let names = match list_namespace_names(&self.client).await {
            Ok(names) => names,
            Err(e) => {
                error!("Failed to list namespaces for cleanup: {}", e);
                return;
            }
        };

        for name in names {
            if name.starts_with(stem) && name != keep {
                if let Err(e) = delete_namespace(&self.client, &name).await {
                    error!("Failed to delete namespace {}: {}", name, e);
                }
            }
        }
    }

    /// Delete every namespace matching the stem for this branch/build.
    ///
    /// Individual delete failures are logged and skipped; the returned count
    /// is the number of successful deletes.
    pub async fn teardown(&self, config: &Config, branch: &NormalizedName) -> Result<usize> {
        let stem = assemble_stem(config, branch);
        info!("Deleting namespaces with prefix {}", stem);

        let names = list_namespace_names(&self.client).await?;

        let mut deleted = 0;
        for name in names.iter().filter(|name| name.starts_with(&stem)) {
            match delete_namespace(&self.client, name).await {
                Ok(()) => deleted += 1,
                Err(e) => error!("Failed to delete namespace {}: {}", name, e),
            }
        }

        info!("Deleted {} namespaces with prefix {}", deleted, stem);
        Ok(deleted)
    }
}
