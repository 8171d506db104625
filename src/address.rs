// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Account identifier validation

use std::collections::HashSet;

use tracing::warn;

/// Length of `0x` followed by 20 hex-encoded bytes
const ADDRESS_LEN: usize = 42;

/// Check a candidate against the `0x` + 40 hex character account format
///
/// Hex digits may be either case. Surrounding whitespace is rejected; use
/// [`valid_addresses`] for trimmed input.
///
/// ```
/// use semioledger::is_valid_address;
///
/// assert!(is_valid_address("0xABCDEF0123456789ABCDEF0123456789ABCDEF01"));
/// assert!(!is_valid_address("0x123"));
/// assert!(!is_valid_address(""));
/// ```
pub fn is_valid_address(candidate: &str) -> bool {
    candidate.len() == ADDRESS_LEN
        && candidate.starts_with("0x")
        && candidate[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Reduce candidate strings to the set of accounts the pipeline should query
///
/// Candidates are trimmed, invalid ones are dropped with a warning, and the
/// rest are lower-cased and de-duplicated in first-seen order.
pub fn valid_addresses<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut accounts = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if !is_valid_address(trimmed) {
            warn!(candidate = %trimmed, "Skipping invalid address");
            continue;
        }
        let account = trimmed.to_ascii_lowercase();
        if seen.insert(account.clone()) {
            accounts.push(account);
        }
    }

    accounts
}
