use crate::models::{own_parsable_base, register_model};
use crate::serialization::{AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-deviceconfig-numberrange
/// An inclusive range of port numbers.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.numberRange")]
pub struct NumberRange {
    additional_data: AdditionalData,
    lower_number: Option<i32>,
    odata_type: Option<String>,
    upper_number: Option<i32>,
}

impl NumberRange {
    pub fn lower_number(&self) -> Option<i32> {
        self.lower_number
    }

    pub fn set_lower_number(&mut self, value: Option<i32>) {
        self.lower_number = value;
    }

    pub fn upper_number(&self) -> Option<i32> {
        self.upper_number
    }

    pub fn set_upper_number(&mut self, value: Option<i32>) {
        self.upper_number = value;
    }
}

impl Parsable for NumberRange {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "lowerNumber" => assign_present(&mut self.lower_number, node.get_i32_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "upperNumber" => assign_present(&mut self.upper_number, node.get_i32_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_i32_value("lowerNumber", self.lower_number)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("upperNumber", self.upper_number)?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}
