// crates/seedcheck-core/src/runtime/equality.rs
// ============================================================================
// Module: Seedcheck Strict Equality
// Description: Non-coercive equality over JSON values.
// Purpose: Compare actual and expected outcomes without type coercion.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Strict equality never coerces: values of different JSON kinds are
//! unequal, and numbers are never compared across representations. An
//! integer equals an integer with the same mathematical value regardless of
//! signed/unsigned representation; an integer never equals a float, so `1`
//! and `1.0` are distinct. Arrays and objects compare structurally in full
//! depth.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

// ============================================================================
// SECTION: Strict Equality
// ============================================================================

/// Compares two JSON values under strict (non-coercive) equality.
#[must_use]
pub fn strict_equals(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        (Value::Array(left), Value::Array(right)) => arrays_equal(left, right),
        (Value::Object(left), Value::Object(right)) => objects_equal(left, right),
        _ => false,
    }
}

/// Compares numbers without cross-representation coercion.
fn numbers_equal(left: &Number, right: &Number) -> bool {
    match (integer_value(left), integer_value(right)) {
        (Some(left), Some(right)) => integers_equal(left, right),
        // Mixed integer/float never compares equal.
        (Some(_), None) | (None, Some(_)) => false,
        (None, None) => floats_equal(left, right),
    }
}

/// Compares two integer representations across signedness exactly.
fn integers_equal(left: IntegerValue, right: IntegerValue) -> bool {
    match (left, right) {
        (IntegerValue::Signed(left), IntegerValue::Signed(right)) => left == right,
        (IntegerValue::Unsigned(left), IntegerValue::Unsigned(right)) => left == right,
        (IntegerValue::Signed(signed), IntegerValue::Unsigned(unsigned))
        | (IntegerValue::Unsigned(unsigned), IntegerValue::Signed(signed)) => {
            u64::try_from(signed).is_ok_and(|value| value == unsigned)
        }
    }
}

/// Compares two float representations; NaN never equals anything.
fn floats_equal(left: &Number, right: &Number) -> bool {
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Compares arrays elementwise under strict equality.
fn arrays_equal(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left.iter().zip(right.iter()).all(|(a, b)| strict_equals(a, b))
}

/// Compares objects by exact key set and per-key strict equality.
fn objects_equal(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right.get(key).is_some_and(|other| strict_equals(value, other))
        })
}

// ============================================================================
// SECTION: Integer Representation
// ============================================================================

/// Integer representation of JSON numbers for exact comparison.
#[derive(Clone, Copy)]
enum IntegerValue {
    /// Signed 64-bit integer.
    Signed(i64),
    /// Unsigned 64-bit integer.
    Unsigned(u64),
}

/// Extracts integer values and rejects floats.
fn integer_value(value: &Number) -> Option<IntegerValue> {
    if value.is_f64() {
        return None;
    }
    if let Some(value) = value.as_i64() {
        return Some(IntegerValue::Signed(value));
    }
    value.as_u64().map(IntegerValue::Unsigned)
}
