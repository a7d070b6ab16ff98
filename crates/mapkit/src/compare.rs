//! Structural equality between dynamic values.

use mapkit_core::{KeySet, Value};

/// Deep, order-independent equality.
///
/// Rules, in order:
/// 1. `Null` only equals `Null`.
/// 2. Values of different kinds are unequal; `Integer(1)` != `Float(1.0)`.
/// 3. Strings compare trimmed and lower-cased.
/// 4. Sequences are equal when they have the same length and every element
///    of `a` occurs somewhere in `b`. Elements compare exactly, so nested
///    containers inside a sequence do not get the relaxed rules.
/// 5. Mappings are equal when they have the same size and every key of `a`
///    outside `skip_keys` is present in `b` with a `deep_equal` value.
/// 6. Everything else (scalars, records) compares exactly.
///
/// Exact comparison is `==` except that NaN equals NaN, so a value always
/// equals its own clone.
pub fn deep_equal(a: &Value, b: &Value, skip_keys: &KeySet) -> bool {
    if a.is_null() != b.is_null() {
        return false;
    }
    if a.kind() != b.kind() {
        return false;
    }

    match (a, b) {
        (Value::String(x), Value::String(y)) => fold(x) == fold(y),
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            xs.len() == ys.len() && xs.iter().all(|x| ys.iter().any(|y| exact_eq(x, y)))
        }
        (Value::Mapping(xm), Value::Mapping(ym)) => {
            xm.len() == ym.len()
                && xm
                    .iter()
                    .filter(|(key, _)| !skip_keys.contains(*key))
                    .all(|(key, xv)| {
                        ym.get(key)
                            .is_some_and(|yv| deep_equal(xv, yv, skip_keys))
                    })
        }
        _ => exact_eq(a, b),
    }
}

/// `==` with NaN treated as equal to itself.
fn exact_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| exact_eq(x, y))
        }
        (Value::Mapping(xm), Value::Mapping(ym)) => {
            xm.len() == ym.len()
                && xm
                    .iter()
                    .all(|(key, xv)| ym.get(key).is_some_and(|yv| exact_eq(xv, yv)))
        }
        (Value::Record(xr), Value::Record(yr)) => {
            xr.schema() == yr.schema()
                && xr
                    .values()
                    .iter()
                    .zip(yr.values())
                    .all(|(x, y)| exact_eq(x, y))
        }
        _ => a == b,
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_trims_and_lowercases() {
        assert_eq!(fold("  MiXeD\t"), "mixed");
        assert_eq!(fold("inner  space"), "inner  space");
    }

    #[test]
    fn exact_eq_matches_nan_only_with_nan() {
        let nan = Value::from(f64::NAN);
        assert!(exact_eq(&nan, &Value::from(f64::NAN)));
        assert!(!exact_eq(&nan, &Value::from(0.0)));
        assert!(exact_eq(&Value::from(0.0), &Value::from(-0.0)));
        let nested: Value = [("f", Value::from(f64::NAN))].into_iter().collect();
        assert!(exact_eq(&nested, &nested.clone()));
    }
}
