use crate::models::delegate_parsable_base;
use crate::models::ip_range::{IpRange, IpRangeable, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/ipv6range
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.iPv6Range")]
pub struct Ipv6Range {
    ip_range: IpRange,
    lower_address: Option<String>,
    upper_address: Option<String>,
}

impl Ipv6Range {
    pub fn lower_address(&self) -> Option<&str> {
        self.lower_address.as_deref()
    }

    pub fn set_lower_address(&mut self, value: Option<String>) {
        self.lower_address = value;
    }

    pub fn upper_address(&self) -> Option<&str> {
        self.upper_address.as_deref()
    }

    pub fn set_upper_address(&mut self, value: Option<String>) {
        self.upper_address = value;
    }
}

impl Parsable for Ipv6Range {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "lowerAddress" => assign_present(&mut self.lower_address, node.get_string_value()?),
            "upperAddress" => assign_present(&mut self.upper_address, node.get_string_value()?),
            _ => return self.ip_range.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.ip_range.serialize_fields(writer)?;
        writer.write_string_value("lowerAddress", self.lower_address())?;
        writer.write_string_value("upperAddress", self.upper_address())?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(ip_range);
}

impl IpRangeable for Ipv6Range {}
