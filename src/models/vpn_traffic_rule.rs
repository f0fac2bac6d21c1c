use crate::models::{Ipv4Range, NumberRange, own_parsable_base, register_model};
use crate::serialization::{
    AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt,
    assign_present, impl_wire_enum, object_refs,
};
use model_macros::register_model;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum VpnTrafficRuleAppType {
    None,
    Desktop,
    Universal,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(VpnTrafficRuleAppType);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum VpnTrafficRuleRoutingPolicyType {
    None,
    SplitTunnel,
    ForceTunnel,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(VpnTrafficRuleRoutingPolicyType);

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-deviceconfig-vpntrafficrule
/// Selects the traffic a VPN profile applies to.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.vpnTrafficRule")]
pub struct VpnTrafficRule {
    additional_data: AdditionalData,
    app_id: Option<String>,
    app_type: Option<VpnTrafficRuleAppType>,
    claims: Option<String>,
    local_address_ranges: Option<Vec<Ipv4Range>>,
    local_port_ranges: Option<Vec<NumberRange>>,
    name: Option<String>,
    odata_type: Option<String>,
    protocols: Option<i32>,
    remote_address_ranges: Option<Vec<Ipv4Range>>,
    remote_port_ranges: Option<Vec<NumberRange>>,
    routing_policy_type: Option<VpnTrafficRuleRoutingPolicyType>,
}

impl VpnTrafficRule {
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, value: Option<String>) {
        self.app_id = value;
    }

    pub fn app_type(&self) -> Option<&VpnTrafficRuleAppType> {
        self.app_type.as_ref()
    }

    pub fn set_app_type(&mut self, value: Option<VpnTrafficRuleAppType>) {
        self.app_type = value;
    }

    pub fn claims(&self) -> Option<&str> {
        self.claims.as_deref()
    }

    pub fn set_claims(&mut self, value: Option<String>) {
        self.claims = value;
    }

    pub fn local_address_ranges(&self) -> Option<&[Ipv4Range]> {
        self.local_address_ranges.as_deref()
    }

    pub fn set_local_address_ranges(&mut self, value: Option<Vec<Ipv4Range>>) {
        self.local_address_ranges = value;
    }

    pub fn local_port_ranges(&self) -> Option<&[NumberRange]> {
        self.local_port_ranges.as_deref()
    }

    pub fn set_local_port_ranges(&mut self, value: Option<Vec<NumberRange>>) {
        self.local_port_ranges = value;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    /// IP protocol numbers, `6` for TCP and `17` for UDP.
    pub fn protocols(&self) -> Option<i32> {
        self.protocols
    }

    pub fn set_protocols(&mut self, value: Option<i32>) {
        self.protocols = value;
    }

    pub fn remote_address_ranges(&self) -> Option<&[Ipv4Range]> {
        self.remote_address_ranges.as_deref()
    }

    pub fn set_remote_address_ranges(&mut self, value: Option<Vec<Ipv4Range>>) {
        self.remote_address_ranges = value;
    }

    pub fn remote_port_ranges(&self) -> Option<&[NumberRange]> {
        self.remote_port_ranges.as_deref()
    }

    pub fn set_remote_port_ranges(&mut self, value: Option<Vec<NumberRange>>) {
        self.remote_port_ranges = value;
    }

    pub fn routing_policy_type(&self) -> Option<&VpnTrafficRuleRoutingPolicyType> {
        self.routing_policy_type.as_ref()
    }

    pub fn set_routing_policy_type(&mut self, value: Option<VpnTrafficRuleRoutingPolicyType>) {
        self.routing_policy_type = value;
    }
}

impl Parsable for VpnTrafficRule {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "appId" => assign_present(&mut self.app_id, node.get_string_value()?),
            "appType" => assign_present(&mut self.app_type, node.get_enum_value()?),
            "claims" => assign_present(&mut self.claims, node.get_string_value()?),
            "localAddressRanges" => assign_present(&mut self.local_address_ranges, node.get_collection_of_object_values_as()?),
            "localPortRanges" => assign_present(&mut self.local_port_ranges, node.get_collection_of_object_values_as()?),
            "name" => assign_present(&mut self.name, node.get_string_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "protocols" => assign_present(&mut self.protocols, node.get_i32_value()?),
            "remoteAddressRanges" => assign_present(&mut self.remote_address_ranges, node.get_collection_of_object_values_as()?),
            "remotePortRanges" => assign_present(&mut self.remote_port_ranges, node.get_collection_of_object_values_as()?),
            "routingPolicyType" => assign_present(&mut self.routing_policy_type, node.get_enum_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_string_value("appId", self.app_id())?;
        writer.write_enum_value("appType", self.app_type())?;
        writer.write_string_value("claims", self.claims())?;
        writer.write_collection_of_object_values("localAddressRanges", object_refs(self.local_address_ranges.as_ref()).as_deref())?;
        writer.write_collection_of_object_values("localPortRanges", object_refs(self.local_port_ranges.as_ref()).as_deref())?;
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("protocols", self.protocols)?;
        writer.write_collection_of_object_values("remoteAddressRanges", object_refs(self.remote_address_ranges.as_ref()).as_deref())?;
        writer.write_collection_of_object_values("remotePortRanges", object_refs(self.remote_port_ranges.as_ref()).as_deref())?;
        writer.write_enum_value("routingPolicyType", self.routing_policy_type())?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}
