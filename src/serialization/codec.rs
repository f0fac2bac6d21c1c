use crate::serialization::json_parse_node::json_kind;
use crate::serialization::{DecodeError, DiscriminatorRegistry, EncodeError, JsonParseNode, JsonSerializationWriter, Parsable, ParseNode};
use serde_json::Value;
use tracing::trace;

/// Decodes every field of `node` into `record` in payload order.
///
/// Fields outside the record's schema are kept in its additional data, or dropped when the record has none.
/// Decoding stops at the first field that fails.
pub fn decode_into<R: Parsable + ?Sized>(record: &mut R, node: &dyn ParseNode) -> Result<(), DecodeError> {
    node.visit_fields(&mut |name, field| {
        if record.deserialize_field(name, field).map_err(|e| e.at(name))? {
            return Ok(());
        }

        match record.additional_data_mut() {
            Some(data) => {
                data.insert(name.to_owned(), field.get_raw_value()?);
            }
            None => trace!(field = name, "Dropped a field outside the schema"),
        }
        Ok(())
    })
}

/// Decodes a payload into the type its `@odata.type` names within `registry`.
pub fn decode_value<T: Parsable + ?Sized>(value: &Value, registry: &DiscriminatorRegistry<T>) -> Result<Box<T>, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::NotAnObject(json_kind(value)));
    }

    let node = JsonParseNode::new(value);
    let mut record = registry.create(&node)?;
    decode_into(record.as_mut(), &node)?;
    Ok(record)
}

pub fn decode_payload<T: Parsable + ?Sized>(json: &str, registry: &DiscriminatorRegistry<T>) -> Result<Box<T>, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(&value, registry)
}

/// Decodes a payload into a known concrete type, ignoring its `@odata.type`.
pub fn decode_as<T: Parsable + Default>(json: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject(json_kind(&value)));
    }

    let mut record = T::default();
    decode_into(&mut record, &JsonParseNode::new(&value))?;
    Ok(record)
}

pub fn encode(record: &dyn Parsable) -> Result<Value, EncodeError> {
    let mut writer = JsonSerializationWriter::new();
    record.serialize(&mut writer)?;
    Ok(writer.into_value())
}

pub fn encode_to_string(record: &dyn Parsable) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&encode(record)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, IpNamedLocation, Ipv4CidrRange, Ipv6CidrRange, KeyValuePair, MODELS, NumberRange};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_through_the_registry() {
        let record = decode_payload(
            r##"{"@odata.type": "#microsoft.graph.ipNamedLocation", "id": "1", "displayName": "Office"}"##,
            &MODELS,
        )
        .unwrap();

        let location = record.downcast_ref::<IpNamedLocation>().unwrap();
        assert_eq!(location.display_name(), Some("Office"));
        assert_eq!(location.entity().id(), Some("1"));
    }

    #[test]
    fn decodes_an_unknown_discriminator_as_an_entity() {
        let json = json!({"@odata.type": "#microsoft.graph.somethingNew", "id": "7", "extra": [1, 2]});

        let record = decode_value(&json, &MODELS).unwrap();

        assert!(record.is::<Entity>());
        assert_eq!(record.odata_type(), Some("#microsoft.graph.somethingNew"));
        assert_eq!(encode(record.as_ref()).unwrap(), json);
    }

    #[test]
    fn rejects_a_payload_that_is_not_an_object() {
        let error = decode_payload("[1, 2]", &MODELS).unwrap_err();

        assert!(matches!(error, DecodeError::NotAnObject("array")));
    }

    #[test]
    fn rejects_malformed_json() {
        let error = decode_as::<NumberRange>("{\"lowerNumber\": ").unwrap_err();

        assert!(matches!(error, DecodeError::Json(_)));
    }

    #[test]
    fn keeps_unknown_fields_in_the_additional_data() {
        let json = r#"{"name": "color", "value": "blue", "priority": 3, "tags": {"a": null}}"#;

        let pair = decode_as::<KeyValuePair>(json).unwrap();

        assert_eq!(pair.name(), Some("color"));
        assert_eq!(pair.additional_data().unwrap().get("priority"), Some(&json!(3)));
        assert_eq!(pair.additional_data().unwrap().get("tags"), Some(&json!({"a": null})));
        assert_eq!(encode_to_string(&pair).unwrap(), r#"{"name":"color","value":"blue","priority":3,"tags":{"a":null}}"#);
    }

    #[test]
    fn leaves_a_field_unset_when_it_is_null() {
        let range = decode_as::<NumberRange>(r#"{"lowerNumber": null, "upperNumber": 10}"#).unwrap();

        assert_eq!(range.lower_number(), None);
        assert_eq!(range.upper_number(), Some(10));
        assert_eq!(encode(&range).unwrap(), json!({"upperNumber": 10}));
    }

    #[test]
    fn reports_the_path_of_a_failing_nested_field() {
        let json = json!({
            "@odata.type": "#microsoft.graph.ipNamedLocation",
            "ipRanges": [
                {"@odata.type": "#microsoft.graph.iPv4CidrRange", "cidrAddress": "10.0.0.0/8"},
                {"@odata.type": "#microsoft.graph.iPv6CidrRange", "cidrAddress": 42}
            ]
        });

        let error = decode_value(&json, &MODELS).unwrap_err();

        assert_eq!(error.field(), Some("ipRanges[1].cidrAddress"));
    }

    #[test]
    fn decodes_each_element_of_a_polymorphic_collection_as_its_own_type() {
        let json = json!({
            "@odata.type": "#microsoft.graph.ipNamedLocation",
            "ipRanges": [
                {"@odata.type": "#microsoft.graph.iPv4CidrRange", "cidrAddress": "10.0.0.0/8"},
                {"@odata.type": "#microsoft.graph.iPv6CidrRange", "cidrAddress": "fe80::/10"}
            ]
        });

        let record = decode_value(&json, &MODELS).unwrap();
        let ranges = record.downcast_ref::<IpNamedLocation>().unwrap().ip_ranges().unwrap();

        assert!((ranges[0].as_ref() as &dyn Parsable).is::<Ipv4CidrRange>());
        assert!((ranges[1].as_ref() as &dyn Parsable).is::<Ipv6CidrRange>());
        assert_eq!(encode(record.as_ref()).unwrap(), json);
    }
}
