use crate::serialization::{DecodeError, EncodeError, ParseNode, SerializationWriter, encode};
use std::any::Any;
use std::fmt::Debug;

pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Wire fields that are not part of a record's schema, kept so they survive a decode and encode cycle.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// A record that can be decoded from and encoded to a wire payload.
pub trait Parsable: Any + Debug + Send + Sync {
    /// Decodes the wire field `name` into this record. Returns `Ok(false)` when `name` is not part of the record's
    /// schema, which leaves the field to the additional data.
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError>;

    /// Writes every schema field in declaration order, then the additional data.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError>;

    fn odata_type(&self) -> Option<&str>;

    fn set_odata_type(&mut self, value: Option<String>);

    fn additional_data(&self) -> Option<&AdditionalData> {
        None
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        None
    }
}

/// The `@odata.type` a concrete model is published under.
pub trait Discriminated {
    const ODATA_TYPE: &'static str;
}

/// Creates a record with every field unset except its discriminator.
pub fn new_discriminated<T: Parsable + Default + Discriminated>() -> T {
    let mut record = T::default();
    record.set_odata_type(Some(T::ODATA_TYPE.to_owned()));
    record
}

/// Stores a decoded value, leaving the field untouched when the wire value is null.
pub fn assign_present<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

impl dyn Parsable {
    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    pub fn is<T: Parsable>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }
}

// Two records are equal when they are of the same concrete type and produce the same payload
impl PartialEq for dyn Parsable {
    fn eq(&self, other: &Self) -> bool {
        if <dyn Any>::type_id(self as &dyn Any) != <dyn Any>::type_id(other as &dyn Any) {
            return false;
        }

        match (encode(self), encode(other)) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, NumberRange};

    #[test]
    fn creates_a_record_with_its_discriminator() {
        let entity = new_discriminated::<Entity>();

        assert_eq!(entity.odata_type(), Some("#microsoft.graph.entity"));
        assert_eq!(entity.id(), None);
    }

    #[test]
    fn keeps_the_current_value_when_the_wire_value_is_null() {
        let mut field = Some(42);

        assign_present(&mut field, None);
        assert_eq!(field, Some(42));

        assign_present(&mut field, Some(7));
        assert_eq!(field, Some(7));
    }

    #[test]
    fn compares_records_by_type_and_payload() {
        let mut lhs = Entity::default();
        lhs.set_id(Some("42".to_string()));
        let mut rhs = Entity::default();
        rhs.set_id(Some("42".to_string()));

        assert!(&lhs as &dyn Parsable == &rhs as &dyn Parsable);

        rhs.set_id(Some("7".to_string()));
        assert!(&lhs as &dyn Parsable != &rhs as &dyn Parsable);

        let range = NumberRange::default();
        assert!(&Entity::default() as &dyn Parsable != &range as &dyn Parsable);
    }

    #[test]
    fn downcasts_to_the_concrete_type() {
        let record: Box<dyn Parsable> = Box::new(Entity::default());

        assert!(record.is::<Entity>());
        assert!(record.downcast_ref::<NumberRange>().is_none());
        assert!(record.downcast_ref::<Entity>().is_some());
    }
}
