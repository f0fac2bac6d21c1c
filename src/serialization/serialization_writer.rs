use crate::serialization::{AdditionalData, EncodeError, IsoDuration, Parsable, WireEnum};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

/// Write access to the object being encoded.
///
/// A `None` value leaves the key out of the payload. Collections are written even when empty.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), EncodeError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), EncodeError>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), EncodeError>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), EncodeError>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), EncodeError>;

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), EncodeError>;

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<(), EncodeError>;

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<(), EncodeError>;

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<(), EncodeError>;

    fn write_duration_value(&mut self, key: &str, value: Option<IsoDuration>) -> Result<(), EncodeError>;

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), EncodeError>;

    fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>) -> Result<(), EncodeError>;

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), EncodeError>;

    fn write_collection_of_object_values(&mut self, key: &str, values: Option<&[&dyn Parsable]>) -> Result<(), EncodeError>;

    /// Writes every entry of the bag at the level of the current object.
    fn write_additional_data(&mut self, data: Option<&AdditionalData>) -> Result<(), EncodeError>;
}

pub trait SerializationWriterExt: SerializationWriter {
    fn write_enum_value<E: WireEnum>(&mut self, key: &str, value: Option<&E>) -> Result<(), EncodeError> {
        self.write_string_value(key, value.map(WireEnum::wire_value))
    }

    fn write_collection_of_enum_values<E: WireEnum>(&mut self, key: &str, values: Option<&[E]>) -> Result<(), EncodeError> {
        let values = values.map(|values| values.iter().map(|value| value.wire_value().to_owned()).collect::<Vec<_>>());
        self.write_collection_of_string_values(key, values.as_deref())
    }
}

impl<W: SerializationWriter + ?Sized> SerializationWriterExt for W {}

/// Borrows a collection of concrete records as trait objects.
pub fn object_refs<T: Parsable>(values: Option<&Vec<T>>) -> Option<Vec<&dyn Parsable>> {
    values.map(|values| values.iter().map(|value| value as &dyn Parsable).collect())
}
