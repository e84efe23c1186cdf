// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::constants::{DEFAULT_PREFIX, DEFAULT_ROLE};

/// Whether a run provisions a namespace or tears matching ones down
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Delete,
}

/// Tool configuration parsed from the command line
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bivouac",
    version,
    about = "Provisions ephemeral Kubernetes namespaces for CI pipeline runs"
)]
pub struct Config {
    /// Prefix for the namespace name
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Branch name the namespace is derived from (required)
    #[arg(long, default_value = "")]
    pub branchname: String,

    /// User authorized inside the created namespace
    #[arg(long)]
    pub user: Option<String>,

    /// Build hash appended to the name instead of a random token
    #[arg(long)]
    pub buildhash: Option<String>,

    /// ClusterRole granted to --user
    #[arg(long, default_value = DEFAULT_ROLE)]
    pub role: String,

    /// Provision a namespace or delete the matching ones
    #[arg(long, value_enum, default_value_t = Mode::Create)]
    pub mode: Mode,

    /// Log verbosity (tracing filter directive, e.g. "debug" or "bivouac=trace")
    #[arg(long, default_value = "info")]
    pub level: String,

    /// File that receives the final namespace name
    #[arg(long)]
    pub out_file_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["bivouac", "--branchname", "feat/SOME-1234"]);
        assert_eq!(config.prefix, "tcn");
        assert_eq!(config.role, "edit");
        assert_eq!(config.mode, Mode::Create);
        assert_eq!(config.level, "info");
        assert!(config.user.is_none());
        assert!(config.buildhash.is_none());
        assert!(config.out_file_path.is_none());
    }

    #[test]
    fn test_delete_mode() {
        let config = Config::parse_from(["bivouac", "--branchname", "main", "--mode", "delete"]);
        assert_eq!(config.mode, Mode::Delete);
    }

    #[test]
    fn test_missing_branchname_parses_as_empty() {
        // Emptiness is rejected later by normalization, not by the parser
        let config = Config::parse_from(["bivouac"]);
        assert!(config.branchname.is_empty());
    }
}
