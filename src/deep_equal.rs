//! Key-order independent comparison of JSON records.
use serde_json::{Map, Value};

/// Compare two records field by field.
///
/// Records with a different number of keys are unequal without looking at
/// any value. Otherwise keys of `a` are visited in order and the first one
/// missing from `b` or holding a different value stops the comparison. Two
/// containers (objects or arrays) are compared recursively by their keys,
/// array indices acting as keys. Numbers compare by numeric value, so `1`
/// equals `1.0`; anything else compares by value.
pub fn deep_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    keyed_equal(&Keyed::Object(a), &Keyed::Object(b))
}

enum Keyed<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

impl<'a> Keyed<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(Self::Object(object)),
            Value::Array(array) => Some(Self::Array(array)),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Object(object) => object.len(),
            Self::Array(array) => array.len(),
        }
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (String, &'a Value)> + 'a> {
        match *self {
            Self::Object(object) => Box::new(object.iter().map(|(k, v)| (k.clone(), v))),
            Self::Array(array) => Box::new(array.iter().enumerate().map(|(i, v)| (i.to_string(), v))),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Self::Object(object) => object.get(key),
            Self::Array(array) => key
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == key)
                .and_then(|i| array.get(i)),
        }
    }
}

fn keyed_equal(a: &Keyed, b: &Keyed) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, value_a) in a.entries() {
        let value_b = match b.get(&key) {
            Some(value) => value,
            None => return false,
        };
        let equal = match (Keyed::from_value(value_a), Keyed::from_value(value_b)) {
            (Some(nested_a), Some(nested_b)) => keyed_equal(&nested_a, &nested_b),
            _ => scalar_equal(value_a, value_b),
        };
        if !equal {
            return false;
        }
    }
    true
}

fn scalar_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) if a != b => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn reflexive_and_order_independent() {
        let a = record(json!({"handle": "alice", "tweetUrl": "u", "n": {"x": [1, 2]}}));
        let b = record(json!({"tweetUrl": "u", "n": {"x": [1, 2]}, "handle": "alice"}));
        assert!(deep_equal(&a, &a));
        assert!(deep_equal(&a, &b));
        assert!(deep_equal(&b, &a));
    }

    #[test]
    fn key_count_mismatch() {
        let a = record(json!({"alias": "a"}));
        let b = record(json!({"alias": "a", "logo": "l"}));
        assert!(!deep_equal(&a, &b));
        assert!(!deep_equal(&b, &a));
    }

    #[test]
    fn differing_keys_and_values() {
        let a = record(json!({"alias": "a", "logo": "l"}));
        assert!(!deep_equal(&a, &record(json!({"alias": "a", "website": "l"}))));
        assert!(!deep_equal(&a, &record(json!({"alias": "a", "logo": "m"}))));
        assert!(!deep_equal(
            &record(json!({"n": {"x": 1}})),
            &record(json!({"n": {"x": 2}}))
        ));
        assert!(!deep_equal(
            &record(json!({"n": {"x": 1}})),
            &record(json!({"n": "x"}))
        ));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(deep_equal(
            &record(json!({"n": 1, "m": [2.0]})),
            &record(json!({"n": 1.0, "m": [2]}))
        ));
        assert!(!deep_equal(&record(json!({"n": 1})), &record(json!({"n": 1.5}))));
        assert!(!deep_equal(&record(json!({"n": 1})), &record(json!({"n": "1"}))));
    }

    #[test]
    fn arrays_compare_by_index() {
        assert!(deep_equal(
            &record(json!({"n": [1, {"a": null}]})),
            &record(json!({"n": [1, {"a": null}]}))
        ));
        assert!(!deep_equal(
            &record(json!({"n": [1, 2]})),
            &record(json!({"n": [2, 1]}))
        ));
        assert!(deep_equal(
            &record(json!({"n": ["a"]})),
            &record(json!({"n": {"0": "a"}}))
        ));
    }
}
