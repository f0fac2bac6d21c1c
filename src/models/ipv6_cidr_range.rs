use crate::models::delegate_parsable_base;
use crate::models::ip_range::{IpRange, IpRangeable, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/ipv6cidrrange
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.iPv6CidrRange")]
pub struct Ipv6CidrRange {
    ip_range: IpRange,
    cidr_address: Option<String>,
}

impl Ipv6CidrRange {
    pub fn cidr_address(&self) -> Option<&str> {
        self.cidr_address.as_deref()
    }

    pub fn set_cidr_address(&mut self, value: Option<String>) {
        self.cidr_address = value;
    }
}

impl Parsable for Ipv6CidrRange {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "cidrAddress" => assign_present(&mut self.cidr_address, node.get_string_value()?),
            _ => return self.ip_range.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.ip_range.serialize_fields(writer)?;
        writer.write_string_value("cidrAddress", self.cidr_address())?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(ip_range);
}

impl IpRangeable for Ipv6CidrRange {}
