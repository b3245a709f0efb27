//! Matching user text against a choice list.
//!
//! Default seeding and the line-based fallback both go through these rules,
//! so a default written as `2`, `banana` or `Banana` means the same thing
//! everywhere.

use std::collections::BTreeSet;

use log::warn;

use crate::choice_definitions::Choice;

/// Parses a 1-based ordinal into a 0-based index, if it is in range.
pub fn parse_ordinal(token: &str, choice_count: usize) -> Option<usize> {
    let ordinal = token.trim().parse::<usize>().ok()?;
    (1..=choice_count).contains(&ordinal).then(|| ordinal - 1)
}

fn exact_match(choices: &[Choice], token: &str) -> Option<usize> {
    choices
        .iter()
        .position(|c| c.value == token)
        .or_else(|| choices.iter().position(|c| c.label == token))
}

/// Finds the index of the choice a default token names.
///
/// Exact value wins, then exact label, then a 1-based ordinal.
pub fn resolve_default_token(choices: &[Choice], token: &str) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    exact_match(choices, token).or_else(|| parse_ordinal(token, choices.len()))
}

/// Initial cursor for a single-choice widget.
pub fn resolve_single_default(choices: &[Choice], default: Option<&str>) -> Option<usize> {
    let default = default?;
    let resolved = resolve_default_token(choices, default);
    if resolved.is_none() {
        warn!("Default `{}` does not match any choice, ignoring it", default);
    }
    resolved
}

/// Initial chosen set for a multi-choice widget.
///
/// The default is a comma-separated list; every token may be an ordinal, a
/// value or a label. Tokens that match nothing are skipped.
pub fn resolve_multi_default(choices: &[Choice], default: Option<&str>) -> BTreeSet<usize> {
    let Some(default) = default else {
        return BTreeSet::new();
    };

    default
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let resolved = resolve_default_token(choices, token);
            if resolved.is_none() {
                warn!("Default `{}` does not match any choice, ignoring it", token.trim());
            }
            resolved
        })
        .collect()
}

/// Matches a line of typed input against the choices.
///
/// Accepts a 1-based ordinal, an exact value or label, or a case-insensitive
/// label prefix. When several labels share the prefix the first registered
/// choice wins.
pub fn match_token(choices: &[Choice], token: &str) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(index) = parse_ordinal(token, choices.len()) {
        return Some(index);
    }

    if let Some(index) = exact_match(choices, token) {
        return Some(index);
    }

    let lowered = token.to_lowercase();
    choices
        .iter()
        .position(|c| c.label.to_lowercase().starts_with(&lowered))
}

/// Comma-joined values of the chosen indices, in choice order.
pub fn join_values(choices: &[Choice], chosen: &BTreeSet<usize>) -> String {
    chosen
        .iter()
        .filter_map(|&i| choices.get(i))
        .map(|c| c.value.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
