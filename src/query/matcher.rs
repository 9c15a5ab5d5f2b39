//! Structural equality and template matching over JSON values
//!
//! Sequences compare as multisets (order-insensitive, duplicates counted) and
//! mappings require identical key sets. A template is a partial mapping: the
//! empty template matches everything, a non-empty one requires the target to
//! carry every template key with a structurally equal value.

use serde_json::{Map, Value};

/// Structural equality with multiset semantics for arrays.
///
/// Mixed kinds (array vs object, string vs number, ...) are never equal.
pub fn equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => equal_sequence(a, b),
        (Value::Object(a), Value::Object(b)) => equal_mapping(a, b),
        _ => equal_scalar(a, b),
    }
}

/// Same JSON kind and equal by value
fn equal_scalar(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b) && a == b
}

/// Multiset equality: both sides are sorted by a canonical key, then compared
/// element-wise with [`equal`]
pub fn equal_sequence(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&Value> = a.iter().collect();
    let mut b: Vec<&Value> = b.iter().collect();
    a.sort_by_cached_key(|v| canonical(v));
    b.sort_by_cached_key(|v| canonical(v));
    a.into_iter().zip(b).all(|(x, y)| equal(x, y))
}

/// Total order consistent with structural equality for every JSON kind,
/// mappings included. `serde_json` maps are BTree-backed, so equal values
/// always serialize identically.
fn canonical(v: &Value) -> String {
    v.to_string()
}

/// Exact key-set equality, then pairwise [`equal`] on the values
pub fn equal_mapping(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    if a.len() != b.len() || !a.keys().all(|k| b.contains_key(k)) {
        return false;
    }
    a.iter()
        .all(|(k, va)| b.get(k).is_some_and(|vb| equal(va, vb)))
}

/// Whether `record` satisfies the partial `template`.
///
/// Every template key must be present in the record with a structurally
/// equal value; the empty template matches any record.
pub fn matches_template(template: &Map<String, Value>, record: &Map<String, Value>) -> bool {
    template
        .iter()
        .all(|(k, tv)| record.get(k).is_some_and(|rv| equal(tv, rv)))
}

/// The sub-sequence of `entries` matching `template`, in original order
pub fn filter_by_template<'a>(
    template: &Map<String, Value>,
    entries: &'a [Map<String, Value>],
) -> Vec<&'a Map<String, Value>> {
    entries
        .iter()
        .filter(|entry| matches_template(template, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[rstest]
    #[case(json!("a"), json!("a"), true)]
    #[case(json!("a"), json!("b"), false)]
    #[case(json!(1), json!(1), true)]
    #[case(json!(1), json!("1"), false)] // kind mismatch
    #[case(json!(true), json!(1), false)]
    #[case(json!(null), json!(null), true)]
    #[case(json!([1, 2]), json!({"a": 1}), false)] // sequence vs mapping
    fn test_equal_scalars_and_kinds(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        assert_eq!(equal(&a, &b), expected);
    }

    #[rstest]
    #[case(json!([1, 2, 3]), json!([3, 1, 2]), true)] // order-insensitive
    #[case(json!([1, 2, 2]), json!([2, 1, 2]), true)] // duplicates counted
    #[case(json!([1, 2, 2]), json!([1, 1, 2]), false)]
    #[case(json!([1, 2]), json!([1, 2, 3]), false)] // length mismatch
    #[case(json!([]), json!([]), true)]
    #[case(json!(["a", "b"]), json!(["b", "a"]), true)]
    fn test_equal_sequence_multiset(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        assert_eq!(equal(&a, &b), expected);
    }

    // Sorting is well-defined even for mapping elements, via the canonical
    // serialization order.
    #[test]
    fn test_equal_sequence_of_mappings() {
        let a = json!([{"k": 1}, {"k": 2}]);
        let b = json!([{"k": 2}, {"k": 1}]);
        assert!(equal(&a, &b));

        let c = json!([{"k": 1}, {"k": 1}]);
        assert!(!equal(&a, &c));
    }

    #[rstest]
    #[case(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}), true)]
    #[case(json!({"a": 1}), json!({"a": 1, "b": 2}), false)] // extra key right
    #[case(json!({"a": 1, "b": 2}), json!({"a": 1}), false)] // extra key left
    #[case(json!({"a": 1}), json!({"a": 2}), false)]
    #[case(json!({}), json!({}), true)]
    fn test_equal_mapping(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        assert_eq!(equal(&a, &b), expected);
    }

    #[test]
    fn test_equal_nested() {
        let a = json!({"apps": [{"v": "1"}, {"v": "2"}]});
        let b = json!({"apps": [{"v": "2"}, {"v": "1"}]});
        assert!(equal(&a, &b));
    }

    #[test]
    fn test_empty_template_matches_anything() {
        let template = Map::new();
        assert!(matches_template(&template, &Map::new()));
        assert!(matches_template(
            &template,
            &obj(json!({"packageName": "com.x"}))
        ));
    }

    #[rstest]
    #[case(json!({"packageName": "com.x"}), true)]
    #[case(json!({"packageName": "com.y"}), false)]
    #[case(json!({"appName": "X"}), false)] // template key absent
    fn test_matches_template_single_key(#[case] entry: Value, #[case] expected: bool) {
        let template = obj(json!({"packageName": "com.x"}));
        assert_eq!(matches_template(&template, &obj(entry)), expected);
    }

    #[test]
    fn test_template_ignores_extra_record_keys() {
        let template = obj(json!({"packageName": "com.x"}));
        let entry = obj(json!({
            "packageName": "com.x",
            "appName": "X",
            "versionName": "1.0"
        }));
        assert!(matches_template(&template, &entry));
    }

    #[test]
    fn test_filter_by_template_preserves_order() {
        let template = obj(json!({"appName": "X"}));
        let entries = vec![
            obj(json!({"appName": "X", "versionName": "1"})),
            obj(json!({"appName": "Y", "versionName": "2"})),
            obj(json!({"appName": "X", "versionName": "3"})),
        ];
        let matched = filter_by_template(&template, &entries);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].get("versionName"), Some(&json!("1")));
        assert_eq!(matched[1].get("versionName"), Some(&json!("3")));
    }
}
