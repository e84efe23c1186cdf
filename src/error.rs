// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BivouacError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("parameter {0} is required")]
    MissingInput(&'static str),

    #[error("branch name '{0}' is empty after normalization")]
    EmptyAfterNormalization(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceCreate(String),

    #[error("Role binding creation failed: {0}")]
    RoleBinding(String),
}

pub type Result<T> = std::result::Result<T, BivouacError>;
