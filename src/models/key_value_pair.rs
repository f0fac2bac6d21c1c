use crate::models::{own_parsable_base, register_model};
use crate::serialization::{AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/keyvaluepair
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.keyValuePair")]
pub struct KeyValuePair {
    additional_data: AdditionalData,
    name: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

impl KeyValuePair {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl Parsable for KeyValuePair {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "name" => assign_present(&mut self.name, node.get_string_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "value" => assign_present(&mut self.value, node.get_string_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("value", self.value())?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{decode_as, encode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reproduces_every_unknown_key() {
        let payload = json!({
            "name": "color",
            "first": 1,
            "second": [true, false],
            "third": {"nested": "value"},
            "fourth": null,
            "value": "blue",
        });

        let pair = decode_as::<KeyValuePair>(&payload.to_string()).unwrap();

        assert_eq!(pair.additional_data().map(|data| data.len()), Some(4));
        assert_eq!(encode(&pair).unwrap(), payload);
    }

    #[test]
    fn reproduces_the_same_payload_when_encoded_twice() {
        let payload = r#"{"name": "a", "unknown": {"deep": [1, {"x": null}]}}"#;

        let first = encode(&decode_as::<KeyValuePair>(payload).unwrap()).unwrap();
        let second = encode(&decode_as::<KeyValuePair>(&first.to_string()).unwrap()).unwrap();

        assert_eq!(first, second);
    }
}
