//! Vehicle classification and distance reading for activity records.

use serde_json::Value;

use crate::activity::ActivityRecord;

/// Substrings marking a candidate type as motorized travel.
///
/// Matched against the uppercased type, so `IN_VEHICLE_DRIVING` and
/// `in passenger vehicle` both qualify. There is no negative list.
pub const VEHICLE_KEYWORDS: &[&str] = &[
    "VEHICLE",
    "CAR",
    "DRIVE",
    "DRIVING",
    "IN_PASSENGER",
    "IN_VEHICLE",
    "TAXI",
    "BUS",
];

/// Returns whether a candidate type names vehicle travel.
pub fn is_vehicle_type(candidate_type: &str) -> bool {
    if candidate_type.is_empty() {
        return false;
    }
    let upper = candidate_type.to_uppercase();
    VEHICLE_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}

/// Reads the candidate type of an activity.
///
/// `topCandidate` is usually an object with a `type` field, but some exports
/// flatten it to the type string itself. Returns `""` when neither is found.
pub fn candidate_type(record: &ActivityRecord) -> &str {
    match record.get("topCandidate") {
        Some(Value::Object(candidate)) => candidate
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        Some(Value::String(kind)) => kind.as_str(),
        _ => "",
    }
}

/// Reads an activity's distance in meters.
///
/// `distanceMeters` takes precedence whenever it is set, even when unusable.
/// `distance` is only consulted when `distanceMeters` is missing or null.
pub fn distance_meters(record: &ActivityRecord) -> Option<f64> {
    match record.get("distanceMeters") {
        Some(value) if !value.is_null() => to_meters(value),
        _ => record.get("distance").and_then(to_meters),
    }
}

fn to_meters(value: &Value) -> Option<f64> {
    let meters = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (meters.is_finite() && meters >= 0.0).then_some(meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn record(value: Value) -> ActivityRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn every_keyword_classifies_as_vehicle() {
        for keyword in VEHICLE_KEYWORDS {
            assert!(is_vehicle_type(keyword), "{keyword} should be a vehicle type");
            assert!(is_vehicle_type(&keyword.to_lowercase()));
        }
    }

    #[test]
    fn keywords_match_as_substrings() {
        assert!(is_vehicle_type("IN_VEHICLE_DRIVING"));
        assert!(is_vehicle_type("in passenger vehicle"));
        assert!(is_vehicle_type("IN_BUS"));
        assert!(is_vehicle_type("Taxi"));
    }

    #[test]
    fn non_vehicle_types_are_rejected() {
        for kind in ["", "WALKING", "CYCLING", "RUNNING", "IN_TRAIN", "FLYING", "STILL"] {
            assert!(!is_vehicle_type(kind), "{kind} should not be a vehicle type");
        }
    }

    #[test]
    fn substring_false_positives_are_accepted() {
        // SCARF contains CAR.
        assert!(is_vehicle_type("SCARF"));
    }

    #[test]
    fn candidate_type_from_nested_object() {
        let rec = record(json!({
            "topCandidate": {"type": "IN_PASSENGER_VEHICLE", "probability": 0.8},
        }));
        assert_eq!(candidate_type(&rec), "IN_PASSENGER_VEHICLE");
    }

    #[test]
    fn candidate_type_from_plain_string() {
        let rec = record(json!({"topCandidate": "in passenger vehicle"}));
        assert_eq!(candidate_type(&rec), "in passenger vehicle");
    }

    #[test]
    fn candidate_type_missing_is_empty() {
        assert_eq!(candidate_type(&record(json!({}))), "");
        assert_eq!(candidate_type(&record(json!({"topCandidate": {"probability": 1}}))), "");
        assert_eq!(candidate_type(&record(json!({"topCandidate": 3}))), "");
    }

    #[test]
    fn distance_meters_wins_over_distance() {
        let rec = record(json!({"distanceMeters": 1500.5, "distance": 99}));
        assert_eq!(distance_meters(&rec), Some(1500.5));
    }

    #[test]
    fn distance_fallback_converts_strings() {
        assert_eq!(distance_meters(&record(json!({"distance": "2500"}))), Some(2500.0));
        assert_eq!(distance_meters(&record(json!({"distance": 42}))), Some(42.0));
    }

    #[test]
    fn null_distance_meters_falls_back() {
        let rec = record(json!({"distanceMeters": null, "distance": "12.5"}));
        assert_eq!(distance_meters(&rec), Some(12.5));
    }

    #[test]
    fn unusable_distances_are_none() {
        assert_eq!(distance_meters(&record(json!({}))), None);
        assert_eq!(distance_meters(&record(json!({"distance": "far"}))), None);
        assert_eq!(distance_meters(&record(json!({"distance": [1]}))), None);
        assert_eq!(distance_meters(&record(json!({"distanceMeters": -5}))), None);
        assert_eq!(distance_meters(&record(json!({"distance": "NaN"}))), None);
    }

    #[test]
    fn unusable_distance_meters_does_not_fall_back() {
        let rec = record(json!({"distanceMeters": "unknown", "distance": 10}));
        assert_eq!(distance_meters(&rec), None);
    }
}
