//! Default merging for validated descriptors.

use serde_json::{Map, Value};

/// Add every key of `defaults` that `document` lacks.
///
/// Keys already present keep their value, including `false`, `0`, `""`,
/// `null` and empty collections.
#[must_use]
pub fn merge_defaults(
    mut document: Map<String, Value>,
    defaults: &Map<String, Value>,
) -> Map<String, Value> {
    for (key, value) in defaults {
        document
            .entry(key.as_str())
            .or_insert_with(|| value.clone());
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdb_core::EntityKind;
    use cdb_core::defaults::entity_defaults;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn absent_fields_receive_defaults() {
        let merged = merge_defaults(
            object(json!({"uuid": "q1", "title": "Add"})),
            &entity_defaults(EntityKind::Question),
        );
        assert_eq!(merged["type"], "Calculation");
        assert_eq!(
            merged["clientFiles"],
            json!(["client.js", "question.html", "answer.html"])
        );
    }

    #[test]
    fn explicit_values_win_even_when_falsy() {
        let defaults = object(json!({
            "clientFiles": ["client.js"],
            "singleVariant": true,
            "number": 7,
            "text": "default"
        }));
        let document = object(json!({
            "clientFiles": [],
            "singleVariant": false,
            "number": 0,
            "text": ""
        }));
        let merged = merge_defaults(document.clone(), &defaults);
        assert_eq!(merged, document);
    }

    #[test]
    fn merging_twice_is_a_no_op() {
        let defaults = entity_defaults(EntityKind::Question);
        let once = merge_defaults(object(json!({"uuid": "q1", "type": "File"})), &defaults);
        let twice = merge_defaults(once.clone(), &defaults);
        assert_eq!(once, twice);
        assert_eq!(twice["type"], "File");
    }

    #[test]
    fn empty_defaults_leave_document_unchanged() {
        let document = object(json!({"uuid": "ci1", "longName": "Fall 2019"}));
        let merged = merge_defaults(
            document.clone(),
            &entity_defaults(EntityKind::CourseInstance),
        );
        assert_eq!(merged, document);
    }
}
