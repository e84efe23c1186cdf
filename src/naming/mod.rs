// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Branch name normalization and random suffix tokens.

pub mod normalize;
pub mod token;

pub use normalize::{normalize, NormalizedName};
pub use token::random_token;
