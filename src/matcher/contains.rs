//! Contains checks: substring and regex predicates inside a request.
//!
//! A requested value of the form
//!
//! ```json
//! [{"contains_exact": "VendorSpecific"}, {"not_contains_regex": "Mode\\s\\*/"}]
//! ```
//!
//! matched against a string in the environment runs every listed check as a
//! conjunction. Four checks are recognized; anything else is an error that
//! names every unrecognized check in the list, not just the first.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde_json::Value;

use crate::error::{EnvmatchError, Result};

/// One of the four recognized contains checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainsCheck {
    /// Operand is a literal substring of the environment string.
    ContainsExact,
    /// Operand is not a literal substring of the environment string.
    NotContainsExact,
    /// Operand, compiled as a regex, matches somewhere in the string.
    ContainsRegex,
    /// Operand, compiled as a regex, matches nowhere in the string.
    NotContainsRegex,
}

impl ContainsCheck {
    /// All recognized checks, in documentation order.
    pub const ALL: [ContainsCheck; 4] = [
        ContainsCheck::ContainsExact,
        ContainsCheck::NotContainsExact,
        ContainsCheck::ContainsRegex,
        ContainsCheck::NotContainsRegex,
    ];

    /// The check name as it appears in a request.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainsCheck::ContainsExact => "contains_exact",
            ContainsCheck::NotContainsExact => "not_contains_exact",
            ContainsCheck::ContainsRegex => "contains_regex",
            ContainsCheck::NotContainsRegex => "not_contains_regex",
        }
    }

    /// Look up a check by its request name.
    pub fn from_name(name: &str) -> Option<ContainsCheck> {
        Self::ALL.into_iter().find(|check| check.as_str() == name)
    }

    /// Evaluate this check against an environment string.
    ///
    /// A non-string operand never matches, for any polarity; the request
    /// format declares operands as strings and anything else cannot be
    /// compared against text.
    ///
    /// # Errors
    ///
    /// Returns [`EnvmatchError::InvalidRegex`] when a regex operand does not
    /// compile.
    pub fn evaluate(self, operand: &Value, text: &str) -> Result<bool> {
        let Some(operand) = operand.as_str() else {
            return Ok(false);
        };
        match self {
            ContainsCheck::ContainsExact => Ok(text.contains(operand)),
            ContainsCheck::NotContainsExact => Ok(!text.contains(operand)),
            ContainsCheck::ContainsRegex => Ok(compile(operand)?.is_match(text)),
            ContainsCheck::NotContainsRegex => Ok(!compile(operand)?.is_match(text)),
        }
    }
}

impl fmt::Display for ContainsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainsCheck {
    type Err = EnvmatchError;

    fn from_str(s: &str) -> Result<Self> {
        ContainsCheck::from_name(s).ok_or_else(|| EnvmatchError::InvalidContainsChecks {
            checks: vec![s.to_string()],
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| EnvmatchError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

/// Interpret a requested array as a contains-check list.
///
/// Qualifies only when the array is non-empty and every element is a
/// single-entry object; returns the `(name, operand)` pairs. Name validity is
/// not checked here — an unrecognized name in a qualifying list is an error
/// raised by [`run_contains_checks`], while a non-qualifying list falls back
/// to the generic matching rules.
pub(crate) fn as_check_list(items: &[Value]) -> Option<Vec<(&str, &Value)>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::Object(entry) if entry.len() == 1 => {
                entry.iter().next().map(|(name, operand)| (name.as_str(), operand))
            }
            _ => None,
        })
        .collect()
}

/// Run a contains-check list against an environment string.
///
/// The list is a conjunction: every check must pass. Before evaluating,
/// every check name is validated; all unrecognized names are collected into
/// a single error.
///
/// # Errors
///
/// Returns [`EnvmatchError::InvalidContainsChecks`] listing every
/// unrecognized name, or [`EnvmatchError::InvalidRegex`] from a regex check.
pub(crate) fn run_contains_checks(checks: &[(&str, &Value)], text: &str) -> Result<bool> {
    let mut invalid: BTreeSet<&str> = BTreeSet::new();
    let mut parsed: Vec<(ContainsCheck, &Value)> = Vec::with_capacity(checks.len());
    for &(name, operand) in checks {
        match ContainsCheck::from_name(name) {
            Some(check) => parsed.push((check, operand)),
            None => {
                invalid.insert(name);
            }
        }
    }
    if !invalid.is_empty() {
        return Err(EnvmatchError::InvalidContainsChecks {
            checks: invalid.into_iter().map(str::to_string).collect(),
        });
    }

    for (check, operand) in parsed {
        if !check.evaluate(operand, text)? {
            return Ok(false);
        }
    }
    Ok(true)
}
