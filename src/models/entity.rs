use crate::models::{own_parsable_base, register_model};
use crate::serialization::{AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/entity
/// The base of every addressable resource. Subtypes embed it and reach the additional data through it.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.entity")]
pub struct Entity {
    additional_data: AdditionalData,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Entity {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    /// Writes the fields shared by every subtype.
    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())
    }
}

impl Parsable for Entity {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "id" => assign_present(&mut self.id, node.get_string_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.serialize_fields(writer)?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MODELS;
    use crate::serialization::{decode_as, encode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn registers_itself_by_discriminator() {
        let record = MODELS.resolve("#microsoft.graph.entity").map(|constructor| constructor());

        assert!(record.is_some_and(|record| record.is::<Entity>() && record.odata_type() == Some("#microsoft.graph.entity")));
    }

    #[test]
    fn writes_the_shared_fields_before_the_additional_data() {
        let json = r##"{"extra": true, "@odata.type": "#microsoft.graph.entity", "id": "42"}"##;

        let entity = decode_as::<Entity>(json).unwrap();

        assert_eq!(entity.id(), Some("42"));
        let encoded = encode(&entity).unwrap();
        let keys: Vec<&str> = encoded.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "@odata.type", "extra"]);
        assert_eq!(encoded, json!({"id": "42", "@odata.type": "#microsoft.graph.entity", "extra": true}));
    }
}
