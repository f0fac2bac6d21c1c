use crate::models::{Entity, delegate_parsable_base, register_model};
use crate::serialization::{
    DecodeError, EncodeError, IsoDuration, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt, assign_present,
    impl_wire_enum,
};
use chrono::{DateTime, FixedOffset};
use model_macros::register_model;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RunAsAccountType {
    System,
    User,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RunAsAccountType);

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-devices-deviceshellscript
/// A shell script pushed to managed macOS devices.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.deviceShellScript")]
pub struct DeviceShellScript {
    entity: Entity,
    block_execution_notifications: Option<bool>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    display_name: Option<String>,
    execution_frequency: Option<IsoDuration>,
    file_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    retry_count: Option<i32>,
    role_scope_tag_ids: Option<Vec<String>>,
    run_as_account: Option<RunAsAccountType>,
    script_content: Option<Vec<u8>>,
}

impl DeviceShellScript {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn block_execution_notifications(&self) -> Option<bool> {
        self.block_execution_notifications
    }

    pub fn set_block_execution_notifications(&mut self, value: Option<bool>) {
        self.block_execution_notifications = value;
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    /// How often the script runs. Unset means it runs once.
    pub fn execution_frequency(&self) -> Option<IsoDuration> {
        self.execution_frequency
    }

    pub fn set_execution_frequency(&mut self, value: Option<IsoDuration>) {
        self.execution_frequency = value;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, value: Option<String>) {
        self.file_name = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn retry_count(&self) -> Option<i32> {
        self.retry_count
    }

    pub fn set_retry_count(&mut self, value: Option<i32>) {
        self.retry_count = value;
    }

    pub fn role_scope_tag_ids(&self) -> Option<&[String]> {
        self.role_scope_tag_ids.as_deref()
    }

    pub fn set_role_scope_tag_ids(&mut self, value: Option<Vec<String>>) {
        self.role_scope_tag_ids = value;
    }

    pub fn run_as_account(&self) -> Option<&RunAsAccountType> {
        self.run_as_account.as_ref()
    }

    pub fn set_run_as_account(&mut self, value: Option<RunAsAccountType>) {
        self.run_as_account = value;
    }

    /// The raw script, base64 encoded on the wire.
    pub fn script_content(&self) -> Option<&[u8]> {
        self.script_content.as_deref()
    }

    pub fn set_script_content(&mut self, value: Option<Vec<u8>>) {
        self.script_content = value;
    }
}

impl Parsable for DeviceShellScript {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "blockExecutionNotifications" => assign_present(&mut self.block_execution_notifications, node.get_bool_value()?),
            "createdDateTime" => assign_present(&mut self.created_date_time, node.get_date_time_value()?),
            "description" => assign_present(&mut self.description, node.get_string_value()?),
            "displayName" => assign_present(&mut self.display_name, node.get_string_value()?),
            "executionFrequency" => assign_present(&mut self.execution_frequency, node.get_duration_value()?),
            "fileName" => assign_present(&mut self.file_name, node.get_string_value()?),
            "lastModifiedDateTime" => assign_present(&mut self.last_modified_date_time, node.get_date_time_value()?),
            "retryCount" => assign_present(&mut self.retry_count, node.get_i32_value()?),
            "roleScopeTagIds" => assign_present(&mut self.role_scope_tag_ids, node.get_collection_of_string_values()?),
            "runAsAccount" => assign_present(&mut self.run_as_account, node.get_enum_value()?),
            "scriptContent" => assign_present(&mut self.script_content, node.get_byte_array_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_bool_value("blockExecutionNotifications", self.block_execution_notifications)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_duration_value("executionFrequency", self.execution_frequency)?;
        writer.write_string_value("fileName", self.file_name())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_i32_value("retryCount", self.retry_count)?;
        writer.write_collection_of_string_values("roleScopeTagIds", self.role_scope_tag_ids())?;
        writer.write_enum_value("runAsAccount", self.run_as_account())?;
        writer.write_byte_array_value("scriptContent", self.script_content())?;
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

    const DEVICE_SHELL_SCRIPT: &str = include_str!("../../tests/resources/payloads/deviceShellScript.json");

    #[test]
    fn decodes_the_script_content_and_frequency() {
        let script = decode_as::<DeviceShellScript>(DEVICE_SHELL_SCRIPT).unwrap();

        assert_eq!(script.script_content(), Some(&b"#!/bin/bash\necho hello\n"[..]));
        assert_eq!(script.execution_frequency(), Some(IsoDuration::from_days(1)));
        assert_eq!(script.run_as_account(), Some(&RunAsAccountType::User));
        assert_eq!(script.role_scope_tag_ids(), Some(&["0".to_string(), "12".to_string()][..]));
        assert_eq!(script.entity().id(), Some("8f3c1c8a-1e2b-4c6d-9f0a-3b5e7d9c1a2b"));
    }

    #[test]
    fn reproduces_the_payload() {
        let expected: Value = serde_json::from_str(DEVICE_SHELL_SCRIPT).unwrap();

        let script = decode_as::<DeviceShellScript>(DEVICE_SHELL_SCRIPT).unwrap();

        assert_eq!(encode(&script).unwrap(), expected);
    }

    #[test]
    fn keeps_true_and_leaves_an_unset_string_out() {
        let mut script = DeviceShellScript::default();
        script.set_block_execution_notifications(Some(true));

        let encoded = encode(&script).unwrap();
        assert_eq!(encoded, json!({"blockExecutionNotifications": true}));

        let decoded = decode_as::<DeviceShellScript>(&encoded.to_string()).unwrap();
        assert_eq!(decoded.block_execution_notifications(), Some(true));
        assert_eq!(decoded.file_name(), None);
        assert_eq!(decoded, script);
    }

    #[test]
    fn rejects_invalid_base64() {
        let error = decode_as::<DeviceShellScript>(r#"{"scriptContent": "not base64!"}"#).unwrap_err();

        assert_eq!(error.to_string(), "field 'scriptContent': invalid base64 value 'not base64!'");
    }

    #[test]
    fn rejects_an_invalid_duration() {
        let error = decode_as::<DeviceShellScript>(r#"{"executionFrequency": "1 day"}"#).unwrap_err();

        assert_eq!(error.field(), Some("executionFrequency"));
    }

    #[test]
    fn rejects_a_frequency_with_a_repeated_unit() {
        let error = decode_as::<DeviceShellScript>(r#"{"executionFrequency": "PT1H2H"}"#).unwrap_err();

        assert_eq!(error.to_string(), "field 'executionFrequency': invalid duration value 'PT1H2H'");
    }
}
