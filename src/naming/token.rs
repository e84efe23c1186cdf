// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Random namespace suffix tokens.
//!
//! The generator is passed in by the caller so the process seeds exactly one
//! RNG at startup and tests can inject a fixed seed.

use crate::constants::token::{CHARSET, LENGTH};
use rand::Rng;

/// Produce a token of [`LENGTH`] characters drawn uniformly from [`CHARSET`].
pub fn random_token<R: Rng>(rng: &mut R) -> String {
    (0..LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
