use crate::models::MODELS;
use crate::serialization::{DecodeError, EncodeError, IsoDuration, decode_value, encode};
use chrono::{DateTime, SecondsFormat};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Decodes a payload through the model registry, encodes it again and compares the result with the input.
#[instrument(skip_all)]
pub fn verify(json: &str) -> Result<RoundTripReport, RoundTripError> {
    let input: Value = serde_json::from_str(json).map_err(DecodeError::from)?;
    let record = decode_value(&input, &MODELS)?;
    let output = encode(record.as_ref())?;

    let mut differences = Vec::new();
    compare(String::new(), &input, &output, &mut differences);
    debug!(odata_type = record.odata_type(), differences = differences.len(), "Verified payload");

    Ok(RoundTripReport {
        odata_type: record.odata_type().map(str::to_owned),
        differences,
    })
}

#[derive(Debug)]
pub struct RoundTripReport {
    odata_type: Option<String>,
    differences: Vec<Difference>,
}

impl RoundTripReport {
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    pub fn is_equivalent(&self) -> bool {
        self.differences.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    path: String,
    kind: DifferenceKind,
}

impl Difference {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &DifferenceKind {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    /// Present in the input, absent from the re-encoded payload.
    Missing(Value),
    Unexpected(Value),
    Changed { expected: Value, actual: Value },
}

impl Display for Difference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DifferenceKind::Missing(value) => write!(f, "'{}' was dropped, expected {}", self.path, value),
            DifferenceKind::Unexpected(value) => write!(f, "'{}' was added with {}", self.path, value),
            DifferenceKind::Changed { expected, actual } => write!(f, "'{}' changed from {} to {}", self.path, expected, actual),
        }
    }
}

#[derive(Error, Debug)]
pub enum RoundTripError {
    #[error("decoding failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

fn compare(path: String, expected: &Value, actual: &Value, differences: &mut Vec<Difference>) {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => compare_objects(&path, expected, actual, differences),
        (Value::Array(expected_items), Value::Array(actual_items)) if expected_items.len() == actual_items.len() => {
            for (index, (expected, actual)) in expected_items.iter().zip(actual_items).enumerate() {
                compare(format!("{}[{}]", path, index), expected, actual, differences);
            }
        }
        _ if equivalent(expected, actual) => {}
        _ => differences.push(Difference {
            path,
            kind: DifferenceKind::Changed {
                expected: expected.clone(),
                actual: actual.clone(),
            },
        }),
    }
}

// A key holding null is the same as an absent key.
fn compare_objects(path: &str, expected: &Map<String, Value>, actual: &Map<String, Value>, differences: &mut Vec<Difference>) {
    for (key, expected_value) in expected {
        let child = child_path(path, key);
        match actual.get(key) {
            Some(actual_value) => compare(child, expected_value, actual_value, differences),
            None if expected_value.is_null() => {}
            None => differences.push(Difference {
                path: child,
                kind: DifferenceKind::Missing(expected_value.clone()),
            }),
        }
    }

    for (key, actual_value) in actual {
        if !expected.contains_key(key) && !actual_value.is_null() {
            differences.push(Difference {
                path: child_path(path, key),
                kind: DifferenceKind::Unexpected(actual_value.clone()),
            });
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_owned() } else { format!("{}.{}", path, key) }
}

fn equivalent(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(expected), Value::Number(actual)) => match expected.is_f64() || actual.is_f64() {
            true => expected.as_f64() == actual.as_f64(),
            false => expected == actual,
        },
        (Value::String(expected), Value::String(actual)) => expected == actual || is_canonical_form(expected, actual),
        _ => expected == actual,
    }
}

/// Date-times, durations and UUIDs are written in their canonical form, which need not match the input text.
///
/// The re-encoded text must be exactly the canonical form of the input, so any other rewrite is still reported. The
/// comparison does not know the field kinds: a UUID-shaped plain string that comes back lowercased, or a duration-shaped
/// one that comes back in canonical form, passes as well.
fn is_canonical_form(expected: &str, actual: &str) -> bool {
    if let Ok(instant) = DateTime::parse_from_rfc3339(expected) {
        return actual == instant.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    }
    if let Ok(duration) = expected.parse::<IsoDuration>() {
        return actual == duration.to_string();
    }
    Uuid::parse_str(expected).is_ok_and(|id| actual == id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn differences(expected: Value, actual: Value) -> Vec<Difference> {
        let mut differences = Vec::new();
        compare(String::new(), &expected, &actual, &mut differences);
        differences
    }

    #[rstest]
    #[case::vpn_traffic_rule(include_str!("../tests/resources/payloads/vpnTrafficRule.json"), Some("#microsoft.graph.vpnTrafficRule"))]
    #[case::ip_named_location(include_str!("../tests/resources/payloads/ipNamedLocation.json"), Some("#microsoft.graph.ipNamedLocation"))]
    #[case::device_shell_script(include_str!("../tests/resources/payloads/deviceShellScript.json"), Some("#microsoft.graph.deviceShellScript"))]
    #[case::recommendation(include_str!("../tests/resources/payloads/recommendation.json"), Some("#microsoft.graph.recommendation"))]
    #[case::startup_process_performance(
        include_str!("../tests/resources/payloads/startupProcessPerformance.json"),
        Some("#microsoft.graph.userExperienceAnalyticsDeviceStartupProcessPerformance")
    )]
    fn every_fixture_survives_the_round_trip(#[case] json: &str, #[case] odata_type: Option<&str>) {
        let report = verify(json).unwrap();

        assert!(report.is_equivalent(), "unexpected differences: {:?}", report.differences());
        assert_eq!(report.odata_type(), odata_type);
    }

    #[test_log::test]
    fn treats_a_payload_without_discriminator_as_an_entity() {
        let report = verify(r#"{"id": "1", "displayName": "kept in the bag"}"#).unwrap();

        assert!(report.is_equivalent());
        assert_eq!(report.odata_type(), None);
    }

    #[test]
    fn accepts_canonical_rewrites_of_the_input() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.salesOrderLine",
            "id": "B7A8A3E5-1D2C-4F6E-9A0B-C1D2E3F4A5B6",
            "itemId": "B7A8A3E5-1D2C-4F6E-9A0B-C1D2E3F4A5B6",
            "quantity": 2,
            "lineType": null
        }"##;

        let report = verify(json).unwrap();

        assert!(report.is_equivalent(), "unexpected differences: {:?}", report.differences());
    }

    #[test_log::test]
    fn reports_decode_errors_with_their_path() {
        let error = verify(r##"{"@odata.type": "#microsoft.graph.deviceShellScript", "retryCount": "three"}"##).unwrap_err();

        assert_eq!(error.to_string(), "decoding failed: field 'retryCount': expected int32, found string");
    }

    #[test]
    fn reports_malformed_json() {
        let error = verify("{").unwrap_err();

        assert!(matches!(error, RoundTripError::Decode(DecodeError::Json(_))));
    }

    #[test]
    fn reports_dropped_and_added_keys() {
        let differences = differences(json!({"a": 1, "b": {"c": "x"}, "d": null}), json!({"b": {}, "e": true}));

        assert_eq!(
            differences,
            vec![
                Difference {
                    path: "a".to_string(),
                    kind: DifferenceKind::Missing(json!(1)),
                },
                Difference {
                    path: "b.c".to_string(),
                    kind: DifferenceKind::Missing(json!("x")),
                },
                Difference {
                    path: "e".to_string(),
                    kind: DifferenceKind::Unexpected(json!(true)),
                },
            ]
        );
    }

    #[test]
    fn reports_changed_values_inside_collections() {
        let differences = differences(json!({"ranges": [{"n": 1}, {"n": 2}]}), json!({"ranges": [{"n": 1}, {"n": 3}]}));

        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].to_string(), "'ranges[1].n' changed from 2 to 3");
    }

    #[test]
    fn reports_a_collection_of_another_length_as_changed() {
        let differences = differences(json!({"tags": ["a", "b"]}), json!({"tags": ["a"]}));

        assert_eq!(differences[0].path(), "tags");
        assert!(matches!(differences[0].kind(), DifferenceKind::Changed { .. }));
    }

    #[rstest]
    #[case(json!(2), json!(2.0))]
    #[case(json!("2020-01-01T10:00:00.1Z"), json!("2020-01-01T10:00:00.100Z"))]
    #[case(json!("PT1H0M"), json!("PT1H"))]
    #[case(json!("B7A8A3E5-1D2C-4F6E-9A0B-C1D2E3F4A5B6"), json!("b7a8a3e5-1d2c-4f6e-9a0b-c1d2e3f4a5b6"))]
    fn considers_canonical_forms_equivalent(#[case] expected: Value, #[case] actual: Value) {
        assert!(equivalent(&expected, &actual));
    }

    #[rstest]
    #[case(json!("2020-01-01T10:00:00Z"), json!("2020-01-01T12:00:00+02:00"))]
    #[case(json!("P1D"), json!("PT24H"))]
    #[case(json!("desktop"), json!("Desktop"))]
    #[case(json!("2020-01-01T10:00:00Z"), json!("2020-01-01T10:00:00.000Z"))]
    #[case(json!("b7a8a3e5-1d2c-4f6e-9a0b-c1d2e3f4a5b6"), json!("B7A8A3E5-1D2C-4F6E-9A0B-C1D2E3F4A5B6"))]
    #[case(json!("{b7a8a3e5-1d2c-4f6e-9a0b-c1d2e3f4a5b6}"), json!("B7A8A3E5-1D2C-4F6E-9A0B-C1D2E3F4A5B6"))]
    #[case(json!(1), json!("1"))]
    #[case(json!(9223372036854775808u64), json!(i64::MAX))]
    #[case(json!(9007199254740993i64), json!(9007199254740992i64))]
    fn keeps_different_values_apart(#[case] expected: Value, #[case] actual: Value) {
        assert!(!equivalent(&expected, &actual));
    }
}
