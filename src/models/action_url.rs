use crate::models::{own_parsable_base, register_model};
use crate::serialization::{AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/actionurl
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.actionUrl")]
pub struct ActionUrl {
    additional_data: AdditionalData,
    display_name: Option<String>,
    odata_type: Option<String>,
    url: Option<String>,
}

impl ActionUrl {
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, value: Option<String>) {
        self.url = value;
    }
}

impl Parsable for ActionUrl {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "displayName" => assign_present(&mut self.display_name, node.get_string_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "url" => assign_present(&mut self.url, node.get_string_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("url", self.url())?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}
