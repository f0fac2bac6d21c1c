use crate::serialization::json_parse_node::{DATE_ONLY_FORMAT, TIME_ONLY_FORMAT};
use crate::serialization::{AdditionalData, EncodeError, IsoDuration, Parsable, SerializationWriter, encode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

/// Builds a single JSON object, nested records get a writer of their own.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn insert(&mut self, key: &str, value: Value) -> Result<(), EncodeError> {
        if self.fields.contains_key(key) {
            return Err(EncodeError::InvariantViolation { field: key.to_owned() });
        }

        self.fields.insert(key.to_owned(), value);
        Ok(())
    }

    fn insert_present<T>(&mut self, key: &str, value: Option<T>, to_value: impl FnOnce(T) -> Value) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.insert(key, to_value(value)),
            None => Ok(()),
        }
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.to_owned()))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), EncodeError> {
        self.insert_present(key, value, Value::Bool)
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), EncodeError> {
        self.insert_present(key, value, Value::from)
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), EncodeError> {
        self.insert_present(key, value, Value::from)
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), EncodeError> {
        let Some(value) = value else {
            return Ok(());
        };

        let number = Number::from_f64(value).ok_or_else(|| EncodeError::NonFiniteNumber {
            field: key.to_owned(),
            value,
        })?;
        self.insert(key, Value::Number(number))
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(STANDARD.encode(value)))
    }

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.format(DATE_ONLY_FORMAT).to_string()))
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.format(TIME_ONLY_FORMAT).to_string()))
    }

    fn write_duration_value(&mut self, key: &str, value: Option<IsoDuration>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.to_string()))
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), EncodeError> {
        self.insert_present(key, value, |value| Value::String(value.to_string()))
    }

    fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>) -> Result<(), EncodeError> {
        self.insert_present(key, values, |values| values.iter().cloned().map(Value::String).collect())
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), EncodeError> {
        let Some(value) = value else {
            return Ok(());
        };

        let object = encode(value).map_err(|e| e.at(key))?;
        self.insert(key, object)
    }

    fn write_collection_of_object_values(&mut self, key: &str, values: Option<&[&dyn Parsable]>) -> Result<(), EncodeError> {
        let Some(values) = values else {
            return Ok(());
        };

        let elements = values
            .iter()
            .enumerate()
            .map(|(index, value)| encode(*value).map_err(|e| e.at_index(index).at(key)))
            .collect::<Result<Vec<_>, _>>()?;
        self.insert(key, Value::Array(elements))
    }

    fn write_additional_data(&mut self, data: Option<&AdditionalData>) -> Result<(), EncodeError> {
        for (key, value) in data.into_iter().flatten() {
            self.insert(key, value.clone())?;
        }

        Ok(())
    }
}
