//! Recursive, type-preserving key-casing transforms for JSON values
//!
//! This module converts the mapping keys of an arbitrarily nested
//! `serde_json::Value` between camelCase (the in-process application format)
//! and snake_case (the wire/storage format) while leaving values, array order,
//! and structural shape untouched.
//!
//! Only `Value::Object` entries are recursed into as records; every other
//! variant is a leaf returned unchanged. Rich values such as timestamps reach
//! this layer as JSON strings and therefore pass through untouched, so their
//! internals are never misread as mapping keys.

mod keys;

use serde_json::Value;

pub use keys::{camel_key, snake_key};

/// Target key-naming convention for a conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyConvention {
    /// camelCase - the application format.
    Camel,
    /// snake_case - the wire format.
    Snake,
}

impl KeyConvention {
    /// Rewrite a single mapping key into this convention.
    pub fn transform_key(&self, key: &str) -> String {
        match self {
            KeyConvention::Camel => camel_key(key),
            KeyConvention::Snake => snake_key(key),
        }
    }
}

/// Convert every mapping key in `value` to snake_case, at every nesting level.
///
/// Pure and total: the input is never mutated, no error conditions exist, and
/// non-mapping, non-sequence values are returned as-is. Recursion depth is
/// bounded only by the input's nesting; callers accepting untrusted,
/// arbitrarily deep input should bound depth themselves before calling.
pub fn to_snake_case(value: &Value) -> Value {
    convert(value, KeyConvention::Snake)
}

/// Convert every mapping key in `value` to camelCase, at every nesting level.
///
/// Symmetric contract to [`to_snake_case`].
pub fn to_camel_case(value: &Value) -> Value {
    convert(value, KeyConvention::Camel)
}

/// Shared traversal for both directions.
///
/// Arrays are mapped element-wise, preserving order and length. Objects get a
/// freshly built map with every key rewritten and every value converted
/// recursively; if two rewritten keys collide, the later entry wins, matching
/// plain map insertion. Everything else is a leaf and is cloned unchanged.
pub fn convert(value: &Value, convention: KeyConvention) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items.iter().map(|item| convert(item, convention)).collect(),
        ),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, val)| (convention.transform_key(key), convert(val, convention)))
                .collect(),
        ),
        leaf => leaf.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_record_to_wire_format() {
        let input = json!({
            "studentId": "abc",
            "moduleList": [{ "moduleId": "1", "progressPercentage": 50 }]
        });
        let wire = to_snake_case(&input);
        assert_eq!(
            wire,
            json!({
                "student_id": "abc",
                "module_list": [{ "module_id": "1", "progress_percentage": 50 }]
            })
        );
        assert_eq!(to_camel_case(&wire), input);
    }

    #[test]
    fn test_null_field_preserved() {
        let input = json!({ "userId": null });
        let wire = to_snake_case(&input);
        assert_eq!(wire, json!({ "user_id": null }));
        // An absent field stays absent: no key is ever invented.
        assert_eq!(wire.as_object().unwrap().len(), 1);
        assert!(wire.get("optional_field").is_none());
    }

    #[test]
    fn test_top_level_null_passthrough() {
        assert_eq!(to_snake_case(&Value::Null), Value::Null);
        assert_eq!(to_camel_case(&Value::Null), Value::Null);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_snake_case(&json!({})), json!({}));
        assert_eq!(to_snake_case(&json!([])), json!([]));
        assert_eq!(
            to_camel_case(&json!({ "outer_list": [[], {}] })),
            json!({ "outerList": [[], {}] })
        );
    }

    #[test]
    fn test_primitive_passthrough() {
        assert_eq!(to_snake_case(&json!("someString")), json!("someString"));
        assert_eq!(to_snake_case(&json!(42)), json!(42));
        assert_eq!(to_camel_case(&json!(true)), json!(true));
    }

    #[test]
    fn test_values_never_rewritten() {
        // Conversion touches keys, never values, even when a string value
        // looks like an identifier in the other convention.
        let input = json!({ "sortOrder": "createdAt", "tags": ["firstName"] });
        assert_eq!(
            to_snake_case(&input),
            json!({ "sort_order": "createdAt", "tags": ["firstName"] })
        );
    }

    #[test]
    fn test_timestamp_passthrough() {
        use chrono::{TimeZone, Utc};

        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let input = json!({ "createdAt": created });
        let wire = to_snake_case(&input);
        assert_eq!(wire, json!({ "created_at": created }));
        // The timestamp survives as the same opaque leaf, not a mapping.
        assert!(wire["created_at"].is_string());
        assert_eq!(wire["created_at"], input["createdAt"]);
    }

    #[test]
    fn test_idempotent_on_single_word_keys() {
        let input = json!({ "status": "ok", "items": [{ "count": 3 }] });
        assert_eq!(to_snake_case(&input), input);
        assert_eq!(to_camel_case(&input), input);
    }

    #[test]
    fn test_array_order_preserved() {
        let input = json!([{ "aB": 1 }, { "aB": 2 }, { "aB": 3 }]);
        let wire = to_snake_case(&input);
        let items = wire.as_array().unwrap();
        assert_eq!(items.len(), 3);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item["a_b"], json!(i + 1));
        }
    }

    #[test]
    fn test_mixed_form_keys_normalized() {
        // A key that is neither clean camel nor clean snake still converts:
        // each rule applies to the characters it recognizes.
        assert_eq!(
            to_snake_case(&json!({ "mixed_formKey": 1 })),
            json!({ "mixed_form_key": 1 })
        );
    }

    #[test]
    fn test_key_convention_transform() {
        assert_eq!(KeyConvention::Snake.transform_key("firstName"), "first_name");
        assert_eq!(KeyConvention::Camel.transform_key("first_name"), "firstName");
    }

    #[test]
    fn test_collision_keeps_later_key() {
        // "aB" and "a_b" both map to "a_b"; the later source key wins.
        let input = json!({ "aB": 1, "a_b": 2 });
        let wire = to_snake_case(&input);
        assert_eq!(wire.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_deep_nesting() {
        let input = json!({
            "levelOne": { "levelTwo": { "levelThree": { "leafValue": [1, 2, 3] } } }
        });
        let wire = to_snake_case(&input);
        assert_eq!(
            wire["level_one"]["level_two"]["level_three"]["leaf_value"],
            json!([1, 2, 3])
        );
        assert_eq!(to_camel_case(&wire), input);
    }
}
