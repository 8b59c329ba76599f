// crates/seedcheck-core/src/runtime/builtins.rs
// ============================================================================
// Module: Built-in Reference Entrypoints
// Description: Canonical pure functions usable as harness targets.
// Purpose: Let batteries run end to end without a real solution module.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Built-in entrypoints are reference contracts, not solutions: `sum` adds
//! two integers and raises on invalid or overflowing input, `concat` joins
//! strings. They exist so battery files can be checked end to end and so the
//! exit-status contract of the CLI is testable. Real solution entrypoints
//! implement [`Entrypoint`] directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::interfaces::Entrypoint;
use crate::interfaces::EntrypointError;

// ============================================================================
// SECTION: Builtin Registry
// ============================================================================

/// Reserved identifiers for built-in entrypoints.
pub const BUILTIN_ENTRYPOINT_IDS: [&str; 2] = ["sum", "concat"];

/// Returns true when the identifier is reserved for a built-in entrypoint.
#[must_use]
pub fn is_builtin_entrypoint_id(entrypoint_id: &str) -> bool {
    BUILTIN_ENTRYPOINT_IDS.iter().any(|id| id == &entrypoint_id)
}

/// Returns the built-in entrypoint for an identifier, if one is registered.
#[must_use]
pub fn builtin_entrypoint(entrypoint_id: &str) -> Option<Box<dyn Entrypoint>> {
    match entrypoint_id {
        "sum" => Some(Box::new(SumEntrypoint)),
        "concat" => Some(Box::new(ConcatEntrypoint)),
        _ => None,
    }
}

// ============================================================================
// SECTION: Sum
// ============================================================================

/// Error message raised for arguments that are not plain integers.
const INVALID_ARGUMENT: &str = "Invalid argument";
/// Error message raised when integer addition overflows.
const INTEGER_OVERFLOW: &str = "integer overflow";

/// Adds two integers with checked overflow.
struct SumEntrypoint;

impl Entrypoint for SumEntrypoint {
    fn call(&self, args: &[Value]) -> Result<Value, EntrypointError> {
        let [left, right] = args else {
            return Err(EntrypointError::new(INVALID_ARGUMENT));
        };
        let left = integer_argument(left)?;
        let right = integer_argument(right)?;
        let total = left
            .checked_add(right)
            .ok_or_else(|| EntrypointError::new(INTEGER_OVERFLOW))?;
        Ok(Value::from(total))
    }
}

/// Extracts an i64 argument, raising on null, non-integer, or out-of-range
/// input. Overflow is reserved for the addition itself.
fn integer_argument(value: &Value) -> Result<i64, EntrypointError> {
    match value {
        Value::Number(number) if !number.is_f64() => {
            number.as_i64().ok_or_else(|| EntrypointError::new(INVALID_ARGUMENT))
        }
        _ => Err(EntrypointError::new(INVALID_ARGUMENT)),
    }
}

// ============================================================================
// SECTION: Concat
// ============================================================================

/// Concatenates string arguments in order.
struct ConcatEntrypoint;

impl Entrypoint for ConcatEntrypoint {
    fn call(&self, args: &[Value]) -> Result<Value, EntrypointError> {
        if args.is_empty() {
            return Err(EntrypointError::new(INVALID_ARGUMENT));
        }
        let mut out = String::new();
        for arg in args {
            let Value::String(text) = arg else {
                return Err(EntrypointError::new(INVALID_ARGUMENT));
            };
            out.push_str(text);
        }
        Ok(Value::String(out))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "Panic-based assertions are permitted in tests."
)]
mod tests {
    use serde_json::json;

    use super::BUILTIN_ENTRYPOINT_IDS;
    use super::builtin_entrypoint;
    use super::is_builtin_entrypoint_id;

    #[test]
    fn builtin_entrypoint_ids_resolve() {
        for id in BUILTIN_ENTRYPOINT_IDS {
            assert!(is_builtin_entrypoint_id(id));
            assert!(builtin_entrypoint(id).is_some());
        }
        assert!(!is_builtin_entrypoint_id("external"));
        assert!(builtin_entrypoint("external").is_none());
    }

    #[test]
    fn sum_adds_and_raises_on_null() {
        let sum = builtin_entrypoint("sum").unwrap();
        assert_eq!(sum.call(&[json!(2), json!(3)]).unwrap(), json!(5));
        let raised = sum.call(&[json!(null), json!(3)]).unwrap_err();
        assert_eq!(raised.message, "Invalid argument");
    }

    #[test]
    fn sum_distinguishes_invalid_input_from_overflow() {
        let sum = builtin_entrypoint("sum").unwrap();
        // An argument outside i64 range never reached the addition.
        let raised = sum.call(&[json!(u64::MAX), json!(1)]).unwrap_err();
        assert_eq!(raised.message, "Invalid argument");
        let raised = sum.call(&[json!(i64::MAX), json!(1)]).unwrap_err();
        assert_eq!(raised.message, "integer overflow");
    }

    #[test]
    fn concat_joins_strings_in_order() {
        let concat = builtin_entrypoint("concat").unwrap();
        assert_eq!(
            concat.call(&[json!("ab"), json!("cd"), json!("ef")]).unwrap(),
            json!("abcdef")
        );
    }

    #[test]
    fn concat_raises_on_empty_args() {
        let concat = builtin_entrypoint("concat").unwrap();
        let raised = concat.call(&[]).unwrap_err();
        assert_eq!(raised.message, "Invalid argument");
    }

    #[test]
    fn concat_raises_on_non_string_argument() {
        let concat = builtin_entrypoint("concat").unwrap();
        let raised = concat.call(&[json!("ab"), json!(3)]).unwrap_err();
        assert_eq!(raised.message, "Invalid argument");
    }
}
