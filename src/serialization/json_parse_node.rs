use crate::serialization::{DecodeError, ElementVisitor, FieldVisitor, IsoDuration, ParseNode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Number, Value};
use uuid::Uuid;

pub(crate) const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_ONLY_FORMAT: &str = "%H:%M:%S%.f";

/// A [`ParseNode`] over a borrowed `serde_json` value.
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        JsonParseNode { value }
    }

    fn get_str(&self, expected: &'static str) -> Result<Option<&'a str>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            other => Err(DecodeError::type_mismatch(expected, json_kind(other))),
        }
    }

    fn get_number(&self, expected: &'static str) -> Result<Option<&'a Number>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(value) => Ok(Some(value)),
            other => Err(DecodeError::type_mismatch(expected, json_kind(other))),
        }
    }

    fn parse_str<T, E>(&self, expected: &'static str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Option<T>, DecodeError> {
        self.get_str(expected)?
            .map(|raw| parse(raw).map_err(|_| DecodeError::invalid_value(expected, raw)))
            .transpose()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// 42.0 is accepted for an integer field, 42.5 is not. `i64::MAX as f64` is 2^63, one past the range.
fn integral(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && *value >= i64::MIN as f64 && *value < i64::MAX as f64)
            .map(|value| value as i64)
    })
}

impl ParseNode for JsonParseNode<'_> {
    fn as_parse_node(&self) -> &dyn ParseNode {
        self
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_string_value(&self) -> Result<Option<String>, DecodeError> {
        Ok(self.get_str("string")?.map(str::to_owned))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            other => Err(DecodeError::type_mismatch("boolean", json_kind(other))),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, DecodeError> {
        self.get_number("int32")?
            .map(|number| {
                integral(number)
                    .and_then(|value| i32::try_from(value).ok())
                    .ok_or_else(|| DecodeError::invalid_value("int32", number.to_string()))
            })
            .transpose()
    }

    fn get_i64_value(&self) -> Result<Option<i64>, DecodeError> {
        self.get_number("int64")?
            .map(|number| integral(number).ok_or_else(|| DecodeError::invalid_value("int64", number.to_string())))
            .transpose()
    }

    fn get_f64_value(&self) -> Result<Option<f64>, DecodeError> {
        self.get_number("double")?
            .map(|number| number.as_f64().ok_or_else(|| DecodeError::invalid_value("double", number.to_string())))
            .transpose()
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, DecodeError> {
        self.parse_str("base64", |raw| STANDARD.decode(raw))
    }

    fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, DecodeError> {
        self.parse_str("date-time", DateTime::parse_from_rfc3339)
    }

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, DecodeError> {
        self.parse_str("date", |raw| NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT))
    }

    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, DecodeError> {
        self.parse_str("time", |raw| NaiveTime::parse_from_str(raw, TIME_ONLY_FORMAT))
    }

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, DecodeError> {
        self.parse_str("duration", |raw| raw.parse::<IsoDuration>())
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>, DecodeError> {
        self.parse_str("uuid", Uuid::parse_str)
    }

    fn get_raw_value(&self) -> Result<Value, DecodeError> {
        Ok(self.value.clone())
    }

    fn get_child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value
            .get(name)
            .map(|child| Box::new(JsonParseNode::new(child)) as Box<dyn ParseNode + '_>)
    }

    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) -> Result<(), DecodeError> {
        let Value::Object(fields) = self.value else {
            return Err(DecodeError::type_mismatch("object", json_kind(self.value)));
        };

        for (name, value) in fields {
            visitor(name, &JsonParseNode::new(value))?;
        }

        Ok(())
    }

    fn visit_elements(&self, visitor: &mut ElementVisitor<'_>) -> Result<bool, DecodeError> {
        match self.value {
            Value::Null => Ok(false),
            Value::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    visitor(index, &JsonParseNode::new(element))?;
                }
                Ok(true)
            }
            other => Err(DecodeError::type_mismatch("array", json_kind(other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::ParseNodeExt;
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn reads_primitive_values() {
        let value = json!({
            "name": "Contoso",
            "enabled": true,
            "count": 42,
            "total": 9007199254740993i64,
            "ratio": 0.25,
            "content": "aGVsbG8=",
            "when": "2024-01-15T08:30:00Z",
            "day": "2024-01-15",
            "time": "08:30:00.5",
            "frequency": "PT1H",
            "deviceId": "4bd2b5a4-2c61-4a53-9d0c-1d2e7f1a0e8b",
        });
        let node = JsonParseNode::new(&value);

        let child = |name: &str| node.get_child_node(name).unwrap();

        assert_eq!(child("name").get_string_value().unwrap(), Some("Contoso".to_string()));
        assert_eq!(child("enabled").get_bool_value().unwrap(), Some(true));
        assert_eq!(child("count").get_i32_value().unwrap(), Some(42));
        assert_eq!(child("total").get_i64_value().unwrap(), Some(9007199254740993));
        assert_eq!(child("ratio").get_f64_value().unwrap(), Some(0.25));
        assert_eq!(child("content").get_byte_array_value().unwrap(), Some(b"hello".to_vec()));
        assert_eq!(
            child("when").get_date_time_value().unwrap(),
            Some(FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap())
        );
        assert_eq!(child("day").get_date_only_value().unwrap(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(child("time").get_time_only_value().unwrap().map(|t| t.nanosecond()), Some(500_000_000));
        assert_eq!(child("frequency").get_duration_value().unwrap().map(|d| d.hours), Some(1));
        assert_eq!(
            child("deviceId").get_uuid_value().unwrap().map(|id| id.to_string()),
            Some("4bd2b5a4-2c61-4a53-9d0c-1d2e7f1a0e8b".to_string())
        );
    }

    #[test]
    fn reads_null_as_unset() {
        let value = Value::Null;
        let node = JsonParseNode::new(&value);

        assert!(node.is_null());
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_i32_value().unwrap(), None);
        assert_eq!(node.get_uuid_value().unwrap(), None);
        assert_eq!(node.get_collection_of_string_values().unwrap(), None);
    }

    #[rstest]
    #[case::string_for_int(json!("42"), "int32", "string")]
    #[case::number_for_string(json!(42), "string", "number")]
    #[case::object_for_bool(json!({}), "boolean", "object")]
    #[case::array_for_double(json!([1.5]), "double", "array")]
    fn rejects_values_of_another_kind(#[case] value: Value, #[case] expected: &str, #[case] found: &str) {
        let node = JsonParseNode::new(&value);

        let error = match expected {
            "int32" => node.get_i32_value().unwrap_err(),
            "string" => node.get_string_value().unwrap_err(),
            "boolean" => node.get_bool_value().unwrap_err(),
            _ => node.get_f64_value().unwrap_err(),
        };

        assert_eq!(error.to_string(), format!("field '': expected {}, found {}", expected, found));
    }

    #[rstest]
    #[case(json!(2147483648i64))]
    #[case(json!(1.5))]
    fn rejects_numbers_outside_int32(#[case] value: Value) {
        let node = JsonParseNode::new(&value);

        assert!(matches!(node.get_i32_value(), Err(DecodeError::InvalidValue { expected: "int32", .. })));
    }

    #[rstest]
    #[case(json!(9223372036854775808u64))]
    #[case(json!(18446744073709551615u64))]
    #[case(json!(9.223372036854776e18))]
    #[case(json!(1.5))]
    fn rejects_numbers_outside_int64(#[case] value: Value) {
        let node = JsonParseNode::new(&value);

        assert!(matches!(node.get_i64_value(), Err(DecodeError::InvalidValue { expected: "int64", .. })));
    }

    #[test]
    fn reads_the_int64_bounds() {
        let max = json!(i64::MAX);
        let min = json!(i64::MIN);

        assert_eq!(JsonParseNode::new(&max).get_i64_value().unwrap(), Some(i64::MAX));
        assert_eq!(JsonParseNode::new(&min).get_i64_value().unwrap(), Some(i64::MIN));
    }

    #[test]
    fn accepts_integral_floats_for_integers() {
        let value = json!(42.0);

        assert_eq!(JsonParseNode::new(&value).get_i32_value().unwrap(), Some(42));
    }

    #[rstest]
    #[case::date_time(json!("15/01/2024"))]
    #[case::uuid(json!("not-a-uuid"))]
    #[case::base64(json!("***"))]
    fn rejects_malformed_strings(#[case] value: Value) {
        let node = JsonParseNode::new(&value);

        let failed = node.get_date_time_value().is_err() && node.get_uuid_value().is_err() && node.get_byte_array_value().is_err();
        assert!(failed);
    }

    #[test]
    fn reports_the_index_of_an_invalid_element() {
        let value = json!(["a", 1, "c"]);

        let error = JsonParseNode::new(&value).get_collection_of_string_values().unwrap_err();

        assert_eq!(error.field(), Some("[1]"));
    }

    #[test]
    fn rejects_null_elements_in_primitive_collections() {
        let value = json!(["a", null]);

        let error = JsonParseNode::new(&value).get_collection_of_string_values().unwrap_err();

        assert_eq!(error.to_string(), "field '[1]': expected string, found null");
    }

    #[test]
    fn visits_fields_in_payload_order() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let mut names = Vec::new();

        JsonParseNode::new(&value)
            .visit_fields(&mut |name, _| {
                names.push(name.to_string());
                Ok(())
            })
            .unwrap();

        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn distinguishes_an_empty_collection_from_a_null_one() {
        let empty = json!([]);

        assert_eq!(JsonParseNode::new(&empty).get_collection_of_string_values().unwrap(), Some(vec![]));
        assert_eq!(JsonParseNode::new(&Value::Null).get_collection_of_string_values().unwrap(), None);
    }
}
