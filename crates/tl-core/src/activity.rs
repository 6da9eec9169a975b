//! Activity record extraction from timeline entries.
//!
//! Exports disagree on where an entry keeps its movement data. Newer
//! on-device exports use `activity`, the older Takeout format uses
//! `activitySegment`, and some tools emit a list under `activities`.
//! Entries carrying none of these (visits, raw paths) produce no records.

use serde_json::{Map, Value};

/// Keys that may hold an entry's activity payload, in priority order.
const ACTIVITY_KEYS: &[&str] = &["activity", "activitySegment", "activities"];

/// A JSON object viewed as an activity record.
pub type ActivityRecord = Map<String, Value>;

/// Returns whether a value carries any content.
///
/// Null, `false`, zero, and empty strings, arrays or objects are empty.
pub(crate) fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the first of `keys` whose value in `map` has content.
pub(crate) fn first_with_content<'a>(
    map: &'a Map<String, Value>,
    keys: &[&str],
) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| has_content(value))
}

/// Extracts the activity records of one entry.
///
/// The payload under the first populated activity key is used; payloads under
/// later keys are ignored. An array yields each of its object elements, an
/// object yields itself. Non-object entries yield nothing.
pub fn extract_activities(entry: &Value) -> Vec<&ActivityRecord> {
    let Some(entry) = entry.as_object() else {
        return Vec::new();
    };

    match first_with_content(entry, ACTIVITY_KEYS) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        Some(Value::Object(record)) => vec![record],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn single_activity_object() {
        let entry = json!({"activity": {"distanceMeters": 10}});
        let records = extract_activities(&entry);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["distanceMeters"], 10);
    }

    #[test]
    fn activity_segment_object() {
        let entry = json!({"activitySegment": {"distance": 5}});
        assert_eq!(extract_activities(&entry).len(), 1);
    }

    #[test]
    fn activities_list_yields_each_object() {
        let entry = json!({"activities": [{"distance": 1}, "noise", {"distance": 2}]});
        assert_eq!(extract_activities(&entry).len(), 2);
    }

    #[test]
    fn first_populated_key_wins_without_merging() {
        let entry = json!({
            "activity": {"distanceMeters": 1},
            "activities": [{"distanceMeters": 2}, {"distanceMeters": 3}],
        });
        let records = extract_activities(&entry);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["distanceMeters"], 1);
    }

    #[test]
    fn empty_payload_falls_through_to_next_key() {
        let entry = json!({"activity": {}, "activitySegment": {"distance": 7}});
        let records = extract_activities(&entry);
        assert_eq!(records[0]["distance"], 7);
    }

    #[test]
    fn visits_and_paths_yield_nothing() {
        assert!(extract_activities(&json!({"visit": {"probability": 0.9}})).is_empty());
        assert!(extract_activities(&json!({"timelinePath": [{"point": "geo:1,2"}]})).is_empty());
    }

    #[test]
    fn scalar_payload_and_non_object_entry_yield_nothing() {
        assert!(extract_activities(&json!({"activity": "IN_VEHICLE"})).is_empty());
        assert!(extract_activities(&json!([1, 2, 3])).is_empty());
    }
}
