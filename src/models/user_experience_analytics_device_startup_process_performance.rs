use crate::models::{Entity, delegate_parsable_base, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, SerializationWriter, assign_present};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-devices-userexperienceanalyticsdevicestartupprocessperformance
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.userExperienceAnalyticsDeviceStartupProcessPerformance")]
pub struct UserExperienceAnalyticsDeviceStartupProcessPerformance {
    entity: Entity,
    device_count: Option<i64>,
    median_impact_in_ms: Option<i32>,
    median_impact_in_ms2: Option<i64>,
    process_name: Option<String>,
    product_name: Option<String>,
    publisher: Option<String>,
    total_impact_in_ms: Option<i32>,
    total_impact_in_ms2: Option<i64>,
}

impl UserExperienceAnalyticsDeviceStartupProcessPerformance {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn device_count(&self) -> Option<i64> {
        self.device_count
    }

    pub fn set_device_count(&mut self, value: Option<i64>) {
        self.device_count = value;
    }

    pub fn median_impact_in_ms(&self) -> Option<i32> {
        self.median_impact_in_ms
    }

    pub fn set_median_impact_in_ms(&mut self, value: Option<i32>) {
        self.median_impact_in_ms = value;
    }

    /// The 64-bit twin of `median_impact_in_ms`. The wire schema carries both and they are not kept in sync.
    pub fn median_impact_in_ms2(&self) -> Option<i64> {
        self.median_impact_in_ms2
    }

    pub fn set_median_impact_in_ms2(&mut self, value: Option<i64>) {
        self.median_impact_in_ms2 = value;
    }

    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    pub fn set_process_name(&mut self, value: Option<String>) {
        self.process_name = value;
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn set_product_name(&mut self, value: Option<String>) {
        self.product_name = value;
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn set_publisher(&mut self, value: Option<String>) {
        self.publisher = value;
    }

    pub fn total_impact_in_ms(&self) -> Option<i32> {
        self.total_impact_in_ms
    }

    pub fn set_total_impact_in_ms(&mut self, value: Option<i32>) {
        self.total_impact_in_ms = value;
    }

    pub fn total_impact_in_ms2(&self) -> Option<i64> {
        self.total_impact_in_ms2
    }

    pub fn set_total_impact_in_ms2(&mut self, value: Option<i64>) {
        self.total_impact_in_ms2 = value;
    }
}

impl Parsable for UserExperienceAnalyticsDeviceStartupProcessPerformance {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "deviceCount" => assign_present(&mut self.device_count, node.get_i64_value()?),
            "medianImpactInMs" => assign_present(&mut self.median_impact_in_ms, node.get_i32_value()?),
            "medianImpactInMs2" => assign_present(&mut self.median_impact_in_ms2, node.get_i64_value()?),
            "processName" => assign_present(&mut self.process_name, node.get_string_value()?),
            "productName" => assign_present(&mut self.product_name, node.get_string_value()?),
            "publisher" => assign_present(&mut self.publisher, node.get_string_value()?),
            "totalImpactInMs" => assign_present(&mut self.total_impact_in_ms, node.get_i32_value()?),
            "totalImpactInMs2" => assign_present(&mut self.total_impact_in_ms2, node.get_i64_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_i64_value("deviceCount", self.device_count)?;
        writer.write_i32_value("medianImpactInMs", self.median_impact_in_ms)?;
        writer.write_i64_value("medianImpactInMs2", self.median_impact_in_ms2)?;
        writer.write_string_value("processName", self.process_name())?;
        writer.write_string_value("productName", self.product_name())?;
        writer.write_string_value("publisher", self.publisher())?;
        writer.write_i32_value("totalImpactInMs", self.total_impact_in_ms)?;
        writer.write_i64_value("totalImpactInMs2", self.total_impact_in_ms2)?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{decode_as, encode};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const STARTUP_PROCESS_PERFORMANCE: &str = include_str!("../../tests/resources/payloads/startupProcessPerformance.json");

    #[test]
    fn keeps_both_widths_of_the_median_impact() {
        let performance = decode_as::<UserExperienceAnalyticsDeviceStartupProcessPerformance>(STARTUP_PROCESS_PERFORMANCE).unwrap();

        assert_eq!(performance.median_impact_in_ms(), Some(1200));
        assert_eq!(performance.median_impact_in_ms2(), Some(4294967296));
        assert_eq!(performance.total_impact_in_ms(), Some(36000));
        assert_eq!(performance.total_impact_in_ms2(), Some(36000));
        assert_eq!(performance.device_count(), Some(30));
    }

    #[test]
    fn reproduces_the_payload() {
        let expected: Value = serde_json::from_str(STARTUP_PROCESS_PERFORMANCE).unwrap();

        let performance = decode_as::<UserExperienceAnalyticsDeviceStartupProcessPerformance>(STARTUP_PROCESS_PERFORMANCE).unwrap();

        assert_eq!(encode(&performance).unwrap(), expected);
    }

    #[test]
    fn rejects_a_64_bit_value_in_the_32_bit_field() {
        let payload = json!({"medianImpactInMs": 4294967296i64});

        let error = decode_as::<UserExperienceAnalyticsDeviceStartupProcessPerformance>(&payload.to_string()).unwrap_err();

        assert!(matches!(error, DecodeError::InvalidValue { expected: "int32", .. }));
        assert_eq!(error.to_string(), "field 'medianImpactInMs': invalid int32 value '4294967296'");
    }

    #[test]
    fn rejects_a_value_beyond_the_64_bit_range() {
        let json = r#"{"totalImpactInMs2": 9223372036854775808}"#;

        let error = decode_as::<UserExperienceAnalyticsDeviceStartupProcessPerformance>(json).unwrap_err();

        assert_eq!(error.to_string(), "field 'totalImpactInMs2': invalid int64 value '9223372036854775808'");
    }
}
