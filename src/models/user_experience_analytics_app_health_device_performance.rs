use crate::models::{Entity, delegate_parsable_base, register_model};
use crate::serialization::{
    DecodeError, EncodeError, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt, assign_present, impl_wire_enum,
};
use chrono::{DateTime, FixedOffset};
use model_macros::register_model;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum UserExperienceAnalyticsHealthState {
    Unknown,
    InsufficientData,
    NeedsAttention,
    MeetingGoals,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(UserExperienceAnalyticsHealthState);

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-devices-userexperienceanalyticsapphealthdeviceperformance
/// App reliability of a single device over the reporting period.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.userExperienceAnalyticsAppHealthDevicePerformance")]
pub struct UserExperienceAnalyticsAppHealthDevicePerformance {
    entity: Entity,
    app_crash_count: Option<i32>,
    app_hang_count: Option<i32>,
    crashed_app_count: Option<i32>,
    device_app_health_score: Option<f64>,
    device_app_health_status: Option<String>,
    device_display_name: Option<String>,
    device_id: Option<String>,
    device_manufacturer: Option<String>,
    device_model: Option<String>,
    health_status: Option<UserExperienceAnalyticsHealthState>,
    mean_time_to_failure_in_minutes: Option<i32>,
    processed_date_time: Option<DateTime<FixedOffset>>,
}

impl UserExperienceAnalyticsAppHealthDevicePerformance {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn app_crash_count(&self) -> Option<i32> {
        self.app_crash_count
    }

    pub fn set_app_crash_count(&mut self, value: Option<i32>) {
        self.app_crash_count = value;
    }

    pub fn app_hang_count(&self) -> Option<i32> {
        self.app_hang_count
    }

    pub fn set_app_hang_count(&mut self, value: Option<i32>) {
        self.app_hang_count = value;
    }

    pub fn crashed_app_count(&self) -> Option<i32> {
        self.crashed_app_count
    }

    pub fn set_crashed_app_count(&mut self, value: Option<i32>) {
        self.crashed_app_count = value;
    }

    pub fn device_app_health_score(&self) -> Option<f64> {
        self.device_app_health_score
    }

    pub fn set_device_app_health_score(&mut self, value: Option<f64>) {
        self.device_app_health_score = value;
    }

    pub fn device_app_health_status(&self) -> Option<&str> {
        self.device_app_health_status.as_deref()
    }

    pub fn set_device_app_health_status(&mut self, value: Option<String>) {
        self.device_app_health_status = value;
    }

    pub fn device_display_name(&self) -> Option<&str> {
        self.device_display_name.as_deref()
    }

    pub fn set_device_display_name(&mut self, value: Option<String>) {
        self.device_display_name = value;
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn set_device_id(&mut self, value: Option<String>) {
        self.device_id = value;
    }

    pub fn device_manufacturer(&self) -> Option<&str> {
        self.device_manufacturer.as_deref()
    }

    pub fn set_device_manufacturer(&mut self, value: Option<String>) {
        self.device_manufacturer = value;
    }

    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    pub fn set_device_model(&mut self, value: Option<String>) {
        self.device_model = value;
    }

    pub fn health_status(&self) -> Option<&UserExperienceAnalyticsHealthState> {
        self.health_status.as_ref()
    }

    pub fn set_health_status(&mut self, value: Option<UserExperienceAnalyticsHealthState>) {
        self.health_status = value;
    }

    pub fn mean_time_to_failure_in_minutes(&self) -> Option<i32> {
        self.mean_time_to_failure_in_minutes
    }

    pub fn set_mean_time_to_failure_in_minutes(&mut self, value: Option<i32>) {
        self.mean_time_to_failure_in_minutes = value;
    }

    pub fn processed_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.processed_date_time
    }

    pub fn set_processed_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.processed_date_time = value;
    }
}

impl Parsable for UserExperienceAnalyticsAppHealthDevicePerformance {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "appCrashCount" => assign_present(&mut self.app_crash_count, node.get_i32_value()?),
            "appHangCount" => assign_present(&mut self.app_hang_count, node.get_i32_value()?),
            "crashedAppCount" => assign_present(&mut self.crashed_app_count, node.get_i32_value()?),
            "deviceAppHealthScore" => assign_present(&mut self.device_app_health_score, node.get_f64_value()?),
            "deviceAppHealthStatus" => assign_present(&mut self.device_app_health_status, node.get_string_value()?),
            "deviceDisplayName" => assign_present(&mut self.device_display_name, node.get_string_value()?),
            "deviceId" => assign_present(&mut self.device_id, node.get_string_value()?),
            "deviceManufacturer" => assign_present(&mut self.device_manufacturer, node.get_string_value()?),
            "deviceModel" => assign_present(&mut self.device_model, node.get_string_value()?),
            "healthStatus" => assign_present(&mut self.health_status, node.get_enum_value()?),
            "meanTimeToFailureInMinutes" => assign_present(&mut self.mean_time_to_failure_in_minutes, node.get_i32_value()?),
            "processedDateTime" => assign_present(&mut self.processed_date_time, node.get_date_time_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_i32_value("appCrashCount", self.app_crash_count)?;
        writer.write_i32_value("appHangCount", self.app_hang_count)?;
        writer.write_i32_value("crashedAppCount", self.crashed_app_count)?;
        writer.write_f64_value("deviceAppHealthScore", self.device_app_health_score)?;
        writer.write_string_value("deviceAppHealthStatus", self.device_app_health_status())?;
        writer.write_string_value("deviceDisplayName", self.device_display_name())?;
        writer.write_string_value("deviceId", self.device_id())?;
        writer.write_string_value("deviceManufacturer", self.device_manufacturer())?;
        writer.write_string_value("deviceModel", self.device_model())?;
        writer.write_enum_value("healthStatus", self.health_status())?;
        writer.write_i32_value("meanTimeToFailureInMinutes", self.mean_time_to_failure_in_minutes)?;
        writer.write_date_time_value("processedDateTime", self.processed_date_time.as_ref())?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{WireEnum, decode_as, encode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("unknown", UserExperienceAnalyticsHealthState::Unknown)]
    #[case("insufficientData", UserExperienceAnalyticsHealthState::InsufficientData)]
    #[case("needsAttention", UserExperienceAnalyticsHealthState::NeedsAttention)]
    #[case("meetingGoals", UserExperienceAnalyticsHealthState::MeetingGoals)]
    #[case("unknownFutureValue", UserExperienceAnalyticsHealthState::UnknownFutureValue)]
    #[case("MeetingGoals", UserExperienceAnalyticsHealthState::Unrecognized("MeetingGoals".to_string()))]
    fn decodes_the_health_state_by_its_exact_name(#[case] wire: &str, #[case] expected: UserExperienceAnalyticsHealthState) {
        let payload = json!({"healthStatus": wire});

        let performance = decode_as::<UserExperienceAnalyticsAppHealthDevicePerformance>(&payload.to_string()).unwrap();

        assert_eq!(performance.health_status(), Some(&expected));
        assert_eq!(expected.wire_value(), wire);
        assert_eq!(encode(&performance).unwrap(), payload);
    }

    #[test]
    fn decodes_counters_and_scores() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.userExperienceAnalyticsAppHealthDevicePerformance",
            "id": "a1b2",
            "deviceModel": "Surface Laptop 4",
            "deviceManufacturer": "Microsoft Corporation",
            "appCrashCount": 4,
            "crashedAppCount": 2,
            "appHangCount": 0,
            "meanTimeToFailureInMinutes": 1440,
            "deviceAppHealthScore": 86.5,
            "deviceAppHealthStatus": "Good",
            "processedDateTime": "2024-02-11T23:00:00Z"
        });

        let performance = decode_as::<UserExperienceAnalyticsAppHealthDevicePerformance>(&payload.to_string()).unwrap();

        assert_eq!(performance.app_crash_count(), Some(4));
        assert_eq!(performance.device_app_health_score(), Some(86.5));
        assert_eq!(performance.health_status(), None);
        assert_eq!(encode(&performance).unwrap(), payload);
    }
}
