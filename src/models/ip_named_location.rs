use crate::models::{Entity, IpRange, IpRangeable, delegate_parsable_base, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, ParseNodeExt, SerializationWriter, assign_present};
use chrono::{DateTime, FixedOffset};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/ipnamedlocation
/// A named set of address ranges used by conditional access policies.
#[derive(Debug, Default, PartialEq)]
#[register_model("#microsoft.graph.ipNamedLocation")]
pub struct IpNamedLocation {
    entity: Entity,
    created_date_time: Option<DateTime<FixedOffset>>,
    display_name: Option<String>,
    ip_ranges: Option<Vec<Box<dyn IpRangeable>>>,
    is_trusted: Option<bool>,
    modified_date_time: Option<DateTime<FixedOffset>>,
}

impl IpNamedLocation {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn ip_ranges(&self) -> Option<&[Box<dyn IpRangeable>]> {
        self.ip_ranges.as_deref()
    }

    pub fn set_ip_ranges(&mut self, value: Option<Vec<Box<dyn IpRangeable>>>) {
        self.ip_ranges = value;
    }

    pub fn is_trusted(&self) -> Option<bool> {
        self.is_trusted
    }

    pub fn set_is_trusted(&mut self, value: Option<bool>) {
        self.is_trusted = value;
    }

    pub fn modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.modified_date_time
    }

    pub fn set_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.modified_date_time = value;
    }
}

impl Parsable for IpNamedLocation {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "createdDateTime" => assign_present(&mut self.created_date_time, node.get_date_time_value()?),
            "displayName" => assign_present(&mut self.display_name, node.get_string_value()?),
            "ipRanges" => assign_present(
                &mut self.ip_ranges,
                node.get_collection_of_object_values(IpRange::create_from_discriminator_value)?,
            ),
            "isTrusted" => assign_present(&mut self.is_trusted, node.get_bool_value()?),
            "modifiedDateTime" => assign_present(&mut self.modified_date_time, node.get_date_time_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("displayName", self.display_name())?;
        let ip_ranges = self
            .ip_ranges
            .as_ref()
            .map(|ranges| ranges.iter().map(|range| range.as_ref() as &dyn Parsable).collect::<Vec<_>>());
        writer.write_collection_of_object_values("ipRanges", ip_ranges.as_deref())?;
        writer.write_bool_value("isTrusted", self.is_trusted)?;
        writer.write_date_time_value("modifiedDateTime", self.modified_date_time.as_ref())?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(entity);
}
