// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bivouac::config::{Config, Mode};
use bivouac::naming::normalize;
use bivouac::provision::Provisioner;

/// Structured JSON logging, filtered by the --level directive
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config.level);

    info!("Starting bivouac");

    // The branch name maps the pipeline run to its namespace
    let branch = normalize(&config.branchname)?;

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    match config.mode {
        Mode::Create => {
            let mut provisioner = Provisioner::new(client, StdRng::from_entropy());
            let namespace = provisioner.provision(&config, &branch).await?;
            info!("Namespace {} is ready", namespace);

            if let Some(path) = &config.out_file_path {
                std::fs::write(path, namespace.as_bytes()).with_context(|| {
                    format!("failed to write namespace name to {}", path.display())
                })?;
            }
        }
        Mode::Delete => {
            let provisioner = Provisioner::new(client, StdRng::from_entropy());
            provisioner.teardown(&config, &branch).await?;
        }
    }

    Ok(())
}
