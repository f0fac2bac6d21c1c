use crate::models::own_parsable_base;
use crate::serialization::{
    AdditionalData, DecodeError, Discriminated, DiscriminatorRegistry, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter,
    assign_present, new_discriminated,
};
use model_macros::register_model;
use std::sync::LazyLock;

/// An address range in any of the forms published under `#microsoft.graph.ipRange`.
pub trait IpRangeable: Parsable {}

impl PartialEq for dyn IpRangeable {
    fn eq(&self, other: &Self) -> bool {
        (self as &dyn Parsable) == (other as &dyn Parsable)
    }
}

pub static IP_RANGES: LazyLock<DiscriminatorRegistry<dyn IpRangeable>> = LazyLock::new(|| DiscriminatorRegistry::new("ipRange", construct_ip_range));

fn construct_ip_range() -> Box<dyn IpRangeable> {
    Box::new(IpRange::default())
}

fn construct<T: IpRangeable + Default + Discriminated>() -> Box<dyn IpRangeable> {
    Box::new(new_discriminated::<T>())
}

/// Registers a range variant with the family and with the global model registry.
pub(crate) fn register_model<T: IpRangeable + Default + Discriminated>() {
    IP_RANGES.register(T::ODATA_TYPE, construct::<T>);
    crate::models::register_model::<T>();
}

// API: https://learn.microsoft.com/en-us/graph/api/resources/iprange
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.ipRange")]
pub struct IpRange {
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

impl IpRange {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn IpRangeable>, DecodeError> {
        IP_RANGES.create(node)
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())
    }
}

impl Parsable for IpRange {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
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

impl IpRangeable for IpRange {}
