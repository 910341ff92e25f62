//! Recursive matching of environment requests against lab environments.
//!
//! A test (or any other consumer) declares what it needs as an arbitrarily
//! nested JSON value; the lab supplies its current configuration as another.
//! [`is_env_matching`] decides whether the request is satisfied.
//!
//! # Matching Rules
//!
//! Evaluated in order; the first applicable rule wins:
//!
//! - `null` in the request is a wildcard and matches anything
//! - Object vs object: every requested key must match recursively; keys
//!   missing from the environment match as `null`; extra environment keys
//!   are ignored
//! - Array vs scalar (either way around): membership test
//! - Object vs array: the object must match at least one array element
//! - Array vs array: every requested element must match the whole
//!   environment array
//! - Array vs object: at least one requested element must match the object
//! - Otherwise: plain structural equality
//! - A requested array of single-entry objects against an environment
//!   string, after equality has failed, is a list of contains checks
//!   (see [`contains`])
//!
//! Scalars are strings, numbers, and booleans. There is no coercion between
//! scalar types: `"1"` does not match `1`.

pub mod contains;

pub use contains::ContainsCheck;

use crate::error::Result;
use serde_json::Value;

/// Check whether an environment request is satisfied by an environment.
///
/// Pure and reentrant: neither input is mutated and identical inputs always
/// produce identical results. A request that does not line up is `Ok(false)`;
/// the only errors are malformed contains checks (unrecognized check name or
/// invalid regex operand), which propagate from any depth of the request.
///
/// # Arguments
///
/// * `requested` - The declared environment requirement
/// * `actual` - The current environment configuration
///
/// # Errors
///
/// Returns [`EnvmatchError::InvalidContainsChecks`] or
/// [`EnvmatchError::InvalidRegex`] for malformed contains checks.
///
/// [`EnvmatchError::InvalidContainsChecks`]: crate::error::EnvmatchError::InvalidContainsChecks
/// [`EnvmatchError::InvalidRegex`]: crate::error::EnvmatchError::InvalidRegex
pub fn is_env_matching(requested: &Value, actual: &Value) -> Result<bool> {
    match (requested, actual) {
        // Wildcard: the request makes no demand
        (Value::Null, _) => Ok(true),

        // Conjunction over requested keys; absent keys match as null
        (Value::Object(request), Value::Object(environment)) => {
            for (key, sub_request) in request {
                let sub_env = environment.get(key).unwrap_or(&Value::Null);
                if !is_env_matching(sub_request, sub_env)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        // Requested-as-array means "one of these values"; when membership
        // fails, an array of single-entry objects against a string is the
        // contains-check form instead
        (Value::Array(options), scalar) if is_scalar(scalar) => {
            if options.contains(scalar) {
                return Ok(true);
            }
            if let (Some(checks), Value::String(text)) =
                (contains::as_check_list(options), scalar)
            {
                return contains::run_contains_checks(&checks, text);
            }
            Ok(false)
        }

        // Symmetric membership: a scalar request against an environment array
        (scalar, Value::Array(items)) if is_scalar(scalar) => Ok(items.contains(scalar)),

        // Existential: the requested object must match some array element
        (request @ Value::Object(_), Value::Array(items)) => {
            for item in items {
                if is_env_matching(request, item)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }

        // Universal: each requested element against the whole environment
        // array; structural equality is the fallback when that fails
        (Value::Array(request), Value::Array(_)) => {
            for item in request {
                if !is_env_matching(item, actual)? {
                    return Ok(requested == actual);
                }
            }
            Ok(true)
        }

        // Existential on the requested side
        (Value::Array(request), Value::Object(_)) => {
            for item in request {
                if is_env_matching(item, actual)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }

        // Scalars and remaining shape combinations: structural equality
        (requested, actual) => Ok(requested == actual),
    }
}

/// Whether a value is an atomic scalar: string, number, or boolean.
///
/// `null` and containers are not scalars; `null` only matches as a wildcard
/// on the requested side or by equality on the environment side.
fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Number(_) | Value::Bool(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvmatchError;
    use serde_json::json;

    fn matches(requested: Value, actual: Value) -> bool {
        is_env_matching(&requested, &actual).unwrap()
    }

    #[test]
    fn null_request_matches_anything() {
        assert!(matches(json!(null), json!(null)));
        assert!(matches(json!(null), json!("anything")));
        assert!(matches(json!(null), json!({"board": {"model": "F5685"}})));
        assert!(matches(json!(null), json!([1, 2, 3])));
    }

    #[test]
    fn scalar_equality_is_reflexive() {
        assert!(matches(json!("dual"), json!("dual")));
        assert!(matches(json!(42), json!(42)));
        assert!(matches(json!(true), json!(true)));
    }

    #[test]
    fn scalar_types_do_not_coerce() {
        assert!(!matches(json!("1"), json!(1)));
        assert!(!matches(json!(1), json!(true)));
        assert!(!matches(json!(0), json!(false)));
    }

    #[test]
    fn object_matches_when_all_requested_keys_match() {
        let env = json!({"board": {"model": "F5685", "mode": "dual"}});
        assert!(matches(json!({"board": {"model": "F5685"}}), env.clone()));
        assert!(!matches(json!({"board": {"model": "CH7465"}}), env));
    }

    #[test]
    fn extra_environment_keys_are_ignored() {
        let request = json!({"board": {"model": "F5685"}});
        let env = json!({
            "board": {"model": "F5685", "serial": "X1"},
            "provisioner": {"type": "dhcp"}
        });
        assert!(matches(request, env));
    }

    #[test]
    fn missing_environment_key_matches_only_null_request() {
        let env = json!({"board": {}});
        assert!(matches(json!({"board": {"model": null}}), env.clone()));
        assert!(!matches(json!({"board": {"model": "F5685"}}), env));
    }

    #[test]
    fn requested_array_is_a_set_of_options() {
        assert!(matches(json!(["dual", "ipv4"]), json!("dual")));
        assert!(!matches(json!(["dual", "ipv4"]), json!("ipv6")));
        assert!(matches(json!([1, 2, 3]), json!(2)));
    }

    #[test]
    fn scalar_request_matches_membership_in_environment_array() {
        assert!(matches(json!("dual"), json!(["dual", "ipv4"])));
        assert!(!matches(json!("ipv6"), json!(["dual", "ipv4"])));
    }

    #[test]
    fn membership_is_symmetric() {
        let options = json!(["a", "b", "c"]);
        assert!(matches(options.clone(), json!("a")));
        assert!(matches(json!("a"), options));
    }

    #[test]
    fn object_request_matches_any_element_of_environment_array() {
        let env = json!([
            {"type": "lan", "count": 2},
            {"type": "wan", "count": 1}
        ]);
        assert!(matches(json!({"type": "wan"}), env.clone()));
        assert!(!matches(json!({"type": "wifi"}), env));
    }

    #[test]
    fn array_request_needs_every_element_satisfied_by_environment_array() {
        let env = json!(["lan", "wan", "wifi"]);
        assert!(matches(json!(["lan", "wan"]), env.clone()));
        assert!(!matches(json!(["lan", "moca"]), env));
    }

    #[test]
    fn equal_nested_arrays_match_via_equality_fallback() {
        // No element of [[1, 2]] matches the whole environment array, but the
        // arrays are structurally equal
        assert!(matches(json!([[1, 2]]), json!([[1, 2]])));
        assert!(!matches(json!([[1, 2]]), json!([[1, 3]])));
    }

    #[test]
    fn array_request_matches_any_against_environment_object() {
        let env = json!({"model": "F5685", "mode": "dual"});
        assert!(matches(json!([{"mode": "dual"}, {"mode": "bridge"}]), env.clone()));
        assert!(!matches(json!([{"mode": "bridge"}]), env));
    }

    #[test]
    fn mismatched_shapes_do_not_match() {
        assert!(!matches(json!("dual"), json!(null)));
        assert!(!matches(json!({"a": 1}), json!("a")));
        assert!(!matches(json!([1, 2]), json!(null)));
        assert!(!matches(json!(1), json!({"a": 1})));
    }

    #[test]
    fn empty_array_request_does_not_match_a_string() {
        // An empty option list offers nothing, and the contains-check form
        // requires at least one entry
        assert!(!matches(json!([]), json!("anything")));
    }

    #[test]
    fn contains_check_reached_after_membership_fails() {
        let request = json!([{"contains_exact": "VendorSpecific"}]);
        assert!(matches(request, json!("Main eRouter Mode */\n VendorSpecific\n")));
    }

    #[test]
    fn contains_check_against_non_string_scalar_does_not_match() {
        let request = json!([{"contains_exact": "1"}]);
        assert!(!matches(request, json!(100)));
    }

    #[test]
    fn invalid_check_propagates_from_nested_request() {
        let request = json!({"board": {"boot_file": [{"contains_abc": "x"}]}});
        let env = json!({"board": {"boot_file": "some contents"}});
        let err = is_env_matching(&request, &env).unwrap_err();
        match err {
            EnvmatchError::InvalidContainsChecks { checks } => {
                assert_eq!(checks, vec!["contains_abc".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn adding_unrelated_environment_keys_preserves_a_match() {
        let request = json!({"board": {"mode": "dual"}});
        let mut env = json!({"board": {"mode": "dual"}});
        assert!(matches(request.clone(), env.clone()));

        env["version"] = json!("1.0");
        env["board"]["serial"] = json!("X1");
        assert!(matches(request, env));
    }
}
