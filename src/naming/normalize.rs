// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turns a free-form branch name into an RFC-1123 label fragment.

use crate::constants::MAX_LABEL_LENGTH;
use crate::error::{BivouacError, Result};
use std::fmt;

/// A branch name reduced to `[a-z0-9-]`, non-empty, no leading or trailing
/// `-`, at most [`MAX_LABEL_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a branch name into a valid namespace name fragment.
///
/// Lowercases the input, replaces every character outside `[-a-z0-9]` with
/// `-`, truncates to the label cap and then strips `-` runs from both ends.
/// Truncation happens before the trim so a cut that lands on a separator
/// cannot leave one trailing.
pub fn normalize(branch: &str) -> Result<NormalizedName> {
    if branch.is_empty() {
        return Err(BivouacError::MissingInput("branchname"));
    }

    let mut normalized: String = branch
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            'a'..='z' | '0'..='9' | '-' => ch,
            _ => '-',
        })
        .collect();

    // Every char is ASCII at this point, so the byte cap is a char cap
    normalized.truncate(MAX_LABEL_LENGTH);

    let trimmed = normalized.trim_matches('-');
    if trimmed.is_empty() {
        return Err(BivouacError::EmptyAfterNormalization(branch.to_string()));
    }

    Ok(NormalizedName(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_invalid_characters() {
        assert_eq!(normalize("feat/SOME-1234").unwrap().as_str(), "feat-some-1234");
    }

    #[test]
    fn test_trims_leading_separators() {
        assert_eq!(normalize("-feat/SOME-1234").unwrap().as_str(), "feat-some-1234");
    }

    #[test]
    fn test_trims_trailing_separators() {
        assert_eq!(normalize("feat/SOME-1234-").unwrap().as_str(), "feat-some-1234");
    }

    #[test]
    fn test_trims_both_ends() {
        assert_eq!(normalize("-feat/SOME-1234-").unwrap().as_str(), "feat-some-1234");
    }

    #[test]
    fn test_only_special_characters_is_an_error() {
        assert!(matches!(
            normalize("&!-"),
            Err(BivouacError::EmptyAfterNormalization(_))
        ));
    }

    #[test]
    fn test_empty_input_is_missing_input() {
        assert!(matches!(normalize(""), Err(BivouacError::MissingInput(_))));
    }

    #[test]
    fn test_unicode_is_replaced() {
        assert_eq!(normalize("Ünïcode#branch").unwrap().as_str(), "n-code-branch");
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        let once = normalize("feat/SOME-1234").unwrap();
        let twice = normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truncates_to_label_cap() {
        let long = "a".repeat(100);
        let normalized = normalize(&long).unwrap();
        assert_eq!(normalized.as_str().len(), MAX_LABEL_LENGTH);
    }

    #[test]
    fn test_truncation_cut_on_separator_is_trimmed() {
        // 63rd char is a '-', so the cap leaves a trailing separator to trim
        let input = format!("{}-{}", "a".repeat(62), "b".repeat(10));
        let normalized = normalize(&input).unwrap();
        assert_eq!(normalized.as_str(), "a".repeat(62));
    }

    #[test]
    fn test_output_charset_invariant() {
        for input in ["x", "Feature/JIRA-42_test", "a--b", "...v1.2.3..."] {
            let normalized = normalize(input).unwrap();
            assert!(!normalized.as_str().starts_with('-'));
            assert!(!normalized.as_str().ends_with('-'));
            assert!(normalized
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
