use crate::serialization::{DecodeError, IsoDuration, Parsable, WireEnum, decode_into};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

/// Creates the record for a polymorphic slot, usually by resolving the node's `@odata.type`.
pub type Factory<T> = fn(&dyn ParseNode) -> Result<Box<T>, DecodeError>;

pub type FieldVisitor<'v> = dyn FnMut(&str, &dyn ParseNode) -> Result<(), DecodeError> + 'v;

pub type ElementVisitor<'v> = dyn FnMut(usize, &dyn ParseNode) -> Result<(), DecodeError> + 'v;

/// Read access to a single node of a wire payload.
///
/// Every getter returns `Ok(None)` for a null node and a [`DecodeError::TypeMismatch`] when the node holds another kind
/// of value. Errors do not carry a field path, callers prefix it while unwinding.
pub trait ParseNode {
    fn as_parse_node(&self) -> &dyn ParseNode;

    fn is_null(&self) -> bool;

    fn get_string_value(&self) -> Result<Option<String>, DecodeError>;

    fn get_bool_value(&self) -> Result<Option<bool>, DecodeError>;

    fn get_i32_value(&self) -> Result<Option<i32>, DecodeError>;

    fn get_i64_value(&self) -> Result<Option<i64>, DecodeError>;

    fn get_f64_value(&self) -> Result<Option<f64>, DecodeError>;

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, DecodeError>;

    fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, DecodeError>;

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, DecodeError>;

    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, DecodeError>;

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, DecodeError>;

    fn get_uuid_value(&self) -> Result<Option<Uuid>, DecodeError>;

    /// The node as an untyped value, used for fields outside the schema.
    fn get_raw_value(&self) -> Result<Value, DecodeError>;

    fn get_child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>>;

    /// Visits every field of an object node in payload order.
    fn visit_fields(&self, visitor: &mut FieldVisitor<'_>) -> Result<(), DecodeError>;

    /// Visits every element of an array node. Returns `false` without visiting anything when the node is null.
    fn visit_elements(&self, visitor: &mut ElementVisitor<'_>) -> Result<bool, DecodeError>;
}

pub trait ParseNodeExt: ParseNode {
    fn get_enum_value<E: WireEnum>(&self) -> Result<Option<E>, DecodeError> {
        Ok(self.get_string_value()?.map(|raw| E::from_wire(&raw)))
    }

    fn get_collection_of_primitive_values<T, F>(&self, expected: &'static str, read: F) -> Result<Option<Vec<T>>, DecodeError>
    where
        F: Fn(&dyn ParseNode) -> Result<Option<T>, DecodeError>,
    {
        let mut values = Vec::new();
        let present = self.visit_elements(&mut |index, element| {
            let value = read(element)
                .map_err(|e| e.at_index(index))?
                .ok_or_else(|| DecodeError::type_mismatch(expected, "null").at_index(index))?;
            values.push(value);
            Ok(())
        })?;

        Ok(present.then_some(values))
    }

    fn get_collection_of_string_values(&self) -> Result<Option<Vec<String>>, DecodeError> {
        self.get_collection_of_primitive_values("string", |element| element.get_string_value())
    }

    fn get_collection_of_enum_values<E: WireEnum>(&self) -> Result<Option<Vec<E>>, DecodeError> {
        self.get_collection_of_primitive_values("string", |element| element.get_enum_value::<E>())
    }

    /// Decodes a polymorphic object, the factory picks the concrete type.
    fn get_object_value<T: Parsable + ?Sized>(&self, factory: Factory<T>) -> Result<Option<Box<T>>, DecodeError> {
        if self.is_null() {
            return Ok(None);
        }

        let node = self.as_parse_node();
        let mut record = factory(node)?;
        decode_into(record.as_mut(), node)?;
        Ok(Some(record))
    }

    fn get_collection_of_object_values<T: Parsable + ?Sized>(&self, factory: Factory<T>) -> Result<Option<Vec<Box<T>>>, DecodeError> {
        let mut records = Vec::new();
        let present = self.visit_elements(&mut |index, element| {
            let mut record = factory(element).map_err(|e| e.at_index(index))?;
            decode_into(record.as_mut(), element).map_err(|e| e.at_index(index))?;
            records.push(record);
            Ok(())
        })?;

        Ok(present.then_some(records))
    }

    /// Decodes an object of a known concrete type.
    fn get_object_value_as<T: Parsable + Default>(&self) -> Result<Option<T>, DecodeError> {
        if self.is_null() {
            return Ok(None);
        }

        let mut record = T::default();
        decode_into(&mut record, self.as_parse_node())?;
        Ok(Some(record))
    }

    fn get_collection_of_object_values_as<T: Parsable + Default>(&self) -> Result<Option<Vec<T>>, DecodeError> {
        let mut records = Vec::new();
        let present = self.visit_elements(&mut |index, element| {
            let mut record = T::default();
            decode_into(&mut record, element).map_err(|e| e.at_index(index))?;
            records.push(record);
            Ok(())
        })?;

        Ok(present.then_some(records))
    }
}

impl<N: ParseNode + ?Sized> ParseNodeExt for N {}
