use crate::models::{own_parsable_base, register_model};
use crate::serialization::{
    AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt,
    assign_present, impl_wire_enum,
};
use chrono::{DateTime, FixedOffset, NaiveTime};
use model_macros::register_model;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ZebraFotaNetworkType {
    Any,
    Wifi,
    Cellular,
    WifiAndCellular,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(ZebraFotaNetworkType);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ZebraFotaScheduleMode {
    InstallNow,
    Scheduled,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(ZebraFotaScheduleMode);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ZebraFotaUpdateType {
    Custom,
    Latest,
    AutoUpdate,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(ZebraFotaUpdateType);

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-androidfotaservice-zebrafotadeploymentsettings
/// When and how a firmware over-the-air update is rolled out to Zebra devices.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.zebraFotaDeploymentSettings")]
pub struct ZebraFotaDeploymentSettings {
    additional_data: AdditionalData,
    battery_rule_minimum_battery_level_percentage: Option<i32>,
    battery_rule_require_charger: Option<bool>,
    device_model: Option<String>,
    download_rule_network_type: Option<ZebraFotaNetworkType>,
    download_rule_start_date_time: Option<DateTime<FixedOffset>>,
    firmware_target_artifact_description: Option<String>,
    firmware_target_board_support_package_version: Option<String>,
    firmware_target_os_version: Option<String>,
    firmware_target_patch: Option<String>,
    install_rule_start_date_time: Option<DateTime<FixedOffset>>,
    install_rule_window_end_time: Option<NaiveTime>,
    install_rule_window_start_time: Option<NaiveTime>,
    odata_type: Option<String>,
    schedule_duration_in_days: Option<i32>,
    schedule_mode: Option<ZebraFotaScheduleMode>,
    time_zone_offset_in_minutes: Option<i32>,
    update_type: Option<ZebraFotaUpdateType>,
}

impl ZebraFotaDeploymentSettings {
    pub fn battery_rule_minimum_battery_level_percentage(&self) -> Option<i32> {
        self.battery_rule_minimum_battery_level_percentage
    }

    pub fn set_battery_rule_minimum_battery_level_percentage(&mut self, value: Option<i32>) {
        self.battery_rule_minimum_battery_level_percentage = value;
    }

    pub fn battery_rule_require_charger(&self) -> Option<bool> {
        self.battery_rule_require_charger
    }

    pub fn set_battery_rule_require_charger(&mut self, value: Option<bool>) {
        self.battery_rule_require_charger = value;
    }

    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    pub fn set_device_model(&mut self, value: Option<String>) {
        self.device_model = value;
    }

    pub fn download_rule_network_type(&self) -> Option<&ZebraFotaNetworkType> {
        self.download_rule_network_type.as_ref()
    }

    pub fn set_download_rule_network_type(&mut self, value: Option<ZebraFotaNetworkType>) {
        self.download_rule_network_type = value;
    }

    pub fn download_rule_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.download_rule_start_date_time
    }

    pub fn set_download_rule_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.download_rule_start_date_time = value;
    }

    pub fn firmware_target_artifact_description(&self) -> Option<&str> {
        self.firmware_target_artifact_description.as_deref()
    }

    pub fn set_firmware_target_artifact_description(&mut self, value: Option<String>) {
        self.firmware_target_artifact_description = value;
    }

    pub fn firmware_target_board_support_package_version(&self) -> Option<&str> {
        self.firmware_target_board_support_package_version.as_deref()
    }

    pub fn set_firmware_target_board_support_package_version(&mut self, value: Option<String>) {
        self.firmware_target_board_support_package_version = value;
    }

    pub fn firmware_target_os_version(&self) -> Option<&str> {
        self.firmware_target_os_version.as_deref()
    }

    pub fn set_firmware_target_os_version(&mut self, value: Option<String>) {
        self.firmware_target_os_version = value;
    }

    pub fn firmware_target_patch(&self) -> Option<&str> {
        self.firmware_target_patch.as_deref()
    }

    pub fn set_firmware_target_patch(&mut self, value: Option<String>) {
        self.firmware_target_patch = value;
    }

    pub fn install_rule_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.install_rule_start_date_time
    }

    pub fn set_install_rule_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.install_rule_start_date_time = value;
    }

    pub fn install_rule_window_end_time(&self) -> Option<NaiveTime> {
        self.install_rule_window_end_time
    }

    pub fn set_install_rule_window_end_time(&mut self, value: Option<NaiveTime>) {
        self.install_rule_window_end_time = value;
    }

    pub fn install_rule_window_start_time(&self) -> Option<NaiveTime> {
        self.install_rule_window_start_time
    }

    pub fn set_install_rule_window_start_time(&mut self, value: Option<NaiveTime>) {
        self.install_rule_window_start_time = value;
    }

    pub fn schedule_duration_in_days(&self) -> Option<i32> {
        self.schedule_duration_in_days
    }

    pub fn set_schedule_duration_in_days(&mut self, value: Option<i32>) {
        self.schedule_duration_in_days = value;
    }

    pub fn schedule_mode(&self) -> Option<&ZebraFotaScheduleMode> {
        self.schedule_mode.as_ref()
    }

    pub fn set_schedule_mode(&mut self, value: Option<ZebraFotaScheduleMode>) {
        self.schedule_mode = value;
    }

    pub fn time_zone_offset_in_minutes(&self) -> Option<i32> {
        self.time_zone_offset_in_minutes
    }

    pub fn set_time_zone_offset_in_minutes(&mut self, value: Option<i32>) {
        self.time_zone_offset_in_minutes = value;
    }

    pub fn update_type(&self) -> Option<&ZebraFotaUpdateType> {
        self.update_type.as_ref()
    }

    pub fn set_update_type(&mut self, value: Option<ZebraFotaUpdateType>) {
        self.update_type = value;
    }
}

impl Parsable for ZebraFotaDeploymentSettings {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "batteryRuleMinimumBatteryLevelPercentage" => assign_present(&mut self.battery_rule_minimum_battery_level_percentage, node.get_i32_value()?),
            "batteryRuleRequireCharger" => assign_present(&mut self.battery_rule_require_charger, node.get_bool_value()?),
            "deviceModel" => assign_present(&mut self.device_model, node.get_string_value()?),
            "downloadRuleNetworkType" => assign_present(&mut self.download_rule_network_type, node.get_enum_value()?),
            "downloadRuleStartDateTime" => assign_present(&mut self.download_rule_start_date_time, node.get_date_time_value()?),
            "firmwareTargetArtifactDescription" => assign_present(&mut self.firmware_target_artifact_description, node.get_string_value()?),
            "firmwareTargetBoardSupportPackageVersion" => {
                assign_present(&mut self.firmware_target_board_support_package_version, node.get_string_value()?)
            }
            "firmwareTargetOsVersion" => assign_present(&mut self.firmware_target_os_version, node.get_string_value()?),
            "firmwareTargetPatch" => assign_present(&mut self.firmware_target_patch, node.get_string_value()?),
            "installRuleStartDateTime" => assign_present(&mut self.install_rule_start_date_time, node.get_date_time_value()?),
            "installRuleWindowEndTime" => assign_present(&mut self.install_rule_window_end_time, node.get_time_only_value()?),
            "installRuleWindowStartTime" => assign_present(&mut self.install_rule_window_start_time, node.get_time_only_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "scheduleDurationInDays" => assign_present(&mut self.schedule_duration_in_days, node.get_i32_value()?),
            "scheduleMode" => assign_present(&mut self.schedule_mode, node.get_enum_value()?),
            "timeZoneOffsetInMinutes" => assign_present(&mut self.time_zone_offset_in_minutes, node.get_i32_value()?),
            "updateType" => assign_present(&mut self.update_type, node.get_enum_value()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_i32_value("batteryRuleMinimumBatteryLevelPercentage", self.battery_rule_minimum_battery_level_percentage)?;
        writer.write_bool_value("batteryRuleRequireCharger", self.battery_rule_require_charger)?;
        writer.write_string_value("deviceModel", self.device_model())?;
        writer.write_enum_value("downloadRuleNetworkType", self.download_rule_network_type())?;
        writer.write_date_time_value("downloadRuleStartDateTime", self.download_rule_start_date_time.as_ref())?;
        writer.write_string_value("firmwareTargetArtifactDescription", self.firmware_target_artifact_description())?;
        writer.write_string_value("firmwareTargetBoardSupportPackageVersion", self.firmware_target_board_support_package_version())?;
        writer.write_string_value("firmwareTargetOsVersion", self.firmware_target_os_version())?;
        writer.write_string_value("firmwareTargetPatch", self.firmware_target_patch())?;
        writer.write_date_time_value("installRuleStartDateTime", self.install_rule_start_date_time.as_ref())?;
        writer.write_time_only_value("installRuleWindowEndTime", self.install_rule_window_end_time)?;
        writer.write_time_only_value("installRuleWindowStartTime", self.install_rule_window_start_time)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("scheduleDurationInDays", self.schedule_duration_in_days)?;
        writer.write_enum_value("scheduleMode", self.schedule_mode())?;
        writer.write_i32_value("timeZoneOffsetInMinutes", self.time_zone_offset_in_minutes)?;
        writer.write_enum_value("updateType", self.update_type())?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{decode_as, encode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn decodes_a_maintenance_window() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.zebraFotaDeploymentSettings",
            "deviceModel": "TC57",
            "updateType": "latest",
            "timeZoneOffsetInMinutes": -420,
            "scheduleMode": "scheduled",
            "scheduleDurationInDays": 28,
            "installRuleStartDateTime": "2024-03-01T02:00:00Z",
            "installRuleWindowStartTime": "02:00:00",
            "installRuleWindowEndTime": "04:30:00",
            "downloadRuleNetworkType": "wifiAndCellular",
            "batteryRuleMinimumBatteryLevelPercentage": 30,
            "batteryRuleRequireCharger": true
        });

        let settings = decode_as::<ZebraFotaDeploymentSettings>(&payload.to_string()).unwrap();

        assert_eq!(settings.install_rule_window_start_time(), NaiveTime::from_hms_opt(2, 0, 0));
        assert_eq!(settings.install_rule_window_end_time(), NaiveTime::from_hms_opt(4, 30, 0));
        assert_eq!(settings.download_rule_network_type(), Some(&ZebraFotaNetworkType::WifiAndCellular));
        assert_eq!(settings.time_zone_offset_in_minutes(), Some(-420));
        assert_eq!(settings.battery_rule_require_charger(), Some(true));
        assert_eq!(settings.firmware_target_patch(), None);
        assert_eq!(encode(&settings).unwrap(), payload);
    }

    #[rstest]
    #[case("2:00")]
    #[case("25:00:00")]
    #[case("02:00:00Z")]
    fn rejects_a_malformed_time(#[case] time: &str) {
        let payload = json!({"installRuleWindowStartTime": time});

        let error = decode_as::<ZebraFotaDeploymentSettings>(&payload.to_string()).unwrap_err();

        assert_eq!(error.to_string(), format!("field 'installRuleWindowStartTime': invalid time value '{}'", time));
    }
}
