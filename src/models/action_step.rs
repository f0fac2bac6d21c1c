use crate::models::{ActionUrl, own_parsable_base, register_model};
use crate::serialization::{
    AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, ParseNodeExt, SerializationWriter, assign_present,
};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/actionstep
/// One step of the remediation a recommendation suggests.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.actionStep")]
pub struct ActionStep {
    action_url: Option<ActionUrl>,
    additional_data: AdditionalData,
    odata_type: Option<String>,
    step_number: Option<i64>,
    text: Option<String>,
}

impl ActionStep {
    pub fn action_url(&self) -> Option<&ActionUrl> {
        self.action_url.as_ref()
    }

    pub fn set_action_url(&mut self, value: Option<ActionUrl>) {
        self.action_url = value;
    }

    pub fn step_number(&self) -> Option<i64> {
        self.step_number
    }

    pub fn set_step_number(&mut self, value: Option<i64>) {
        self.step_number = value;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, value: Option<String>) {
        self.text = value;
    }
}

impl Parsable for ActionStep {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "actionUrl" => assign_present(&mut self.action_url, node.get_object_value_as::<ActionUrl>()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "stepNumber" => assign_present(&mut self.step_number, node.get_i64_value()?),
            "text" => assign_present(&mut self.text, node.get_string_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_object_value("actionUrl", self.action_url.as_ref().map(|url| url as &dyn Parsable))?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i64_value("stepNumber", self.step_number)?;
        writer.write_string_value("text", self.text())?;
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
    fn decodes_a_nested_record() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.actionStep",
            "actionUrl": {"displayName": "Review policies", "url": "https://aka.ms/policies", "kind": "docs"},
            "stepNumber": 1,
            "text": "Open the portal"
        }"##;

        let step = decode_as::<ActionStep>(json).unwrap();

        let url = step.action_url().unwrap();
        assert_eq!(url.display_name(), Some("Review policies"));
        assert_eq!(url.additional_data().and_then(|data| data.get("kind")), Some(&json!("docs")));
        assert_eq!(step.step_number(), Some(1));
        assert_eq!(encode(&step).unwrap()["actionUrl"]["kind"], json!("docs"));
    }

    #[test]
    fn prefixes_errors_with_the_nested_field() {
        let error = decode_as::<ActionStep>(r#"{"actionUrl": {"url": false}}"#).unwrap_err();

        assert_eq!(error.to_string(), "field 'actionUrl.url': expected string, found boolean");
    }
}
