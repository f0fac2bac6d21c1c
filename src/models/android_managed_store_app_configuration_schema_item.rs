use crate::models::{KeyValuePair, own_parsable_base, register_model};
use crate::serialization::{
    AdditionalData, DecodeError, EncodeError, ODATA_TYPE_KEY, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt,
    assign_present, impl_wire_enum, object_refs,
};
use model_macros::register_model;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum AndroidManagedStoreAppConfigurationSchemaItemDataType {
    Bool,
    Integer,
    String,
    Choice,
    Multiselect,
    Bundle,
    BundleArray,
    Hidden,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(AndroidManagedStoreAppConfigurationSchemaItemDataType);

// API: https://learn.microsoft.com/en-us/graph/api/resources/intune-apps-androidmanagedstoreappconfigurationschemaitem
/// A single setting an app exposes through its managed configuration schema.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.androidManagedStoreAppConfigurationSchemaItem")]
pub struct AndroidManagedStoreAppConfigurationSchemaItem {
    additional_data: AdditionalData,
    data_type: Option<AndroidManagedStoreAppConfigurationSchemaItemDataType>,
    default_bool_value: Option<bool>,
    default_int_value: Option<i32>,
    default_string_array_value: Option<Vec<String>>,
    default_string_value: Option<String>,
    description: Option<String>,
    display_name: Option<String>,
    index: Option<i32>,
    odata_type: Option<String>,
    parent_index: Option<i32>,
    schema_item_key: Option<String>,
    selections: Option<Vec<KeyValuePair>>,
}

impl AndroidManagedStoreAppConfigurationSchemaItem {
    pub fn data_type(&self) -> Option<&AndroidManagedStoreAppConfigurationSchemaItemDataType> {
        self.data_type.as_ref()
    }

    pub fn set_data_type(&mut self, value: Option<AndroidManagedStoreAppConfigurationSchemaItemDataType>) {
        self.data_type = value;
    }

    pub fn default_bool_value(&self) -> Option<bool> {
        self.default_bool_value
    }

    pub fn set_default_bool_value(&mut self, value: Option<bool>) {
        self.default_bool_value = value;
    }

    pub fn default_int_value(&self) -> Option<i32> {
        self.default_int_value
    }

    pub fn set_default_int_value(&mut self, value: Option<i32>) {
        self.default_int_value = value;
    }

    pub fn default_string_array_value(&self) -> Option<&[String]> {
        self.default_string_array_value.as_deref()
    }

    pub fn set_default_string_array_value(&mut self, value: Option<Vec<String>>) {
        self.default_string_array_value = value;
    }

    pub fn default_string_value(&self) -> Option<&str> {
        self.default_string_value.as_deref()
    }

    pub fn set_default_string_value(&mut self, value: Option<String>) {
        self.default_string_value = value;
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

    /// Position of the item within the schema, used by `parent_index` to nest bundles.
    pub fn index(&self) -> Option<i32> {
        self.index
    }

    pub fn set_index(&mut self, value: Option<i32>) {
        self.index = value;
    }

    pub fn parent_index(&self) -> Option<i32> {
        self.parent_index
    }

    pub fn set_parent_index(&mut self, value: Option<i32>) {
        self.parent_index = value;
    }

    pub fn schema_item_key(&self) -> Option<&str> {
        self.schema_item_key.as_deref()
    }

    pub fn set_schema_item_key(&mut self, value: Option<String>) {
        self.schema_item_key = value;
    }

    pub fn selections(&self) -> Option<&[KeyValuePair]> {
        self.selections.as_deref()
    }

    pub fn set_selections(&mut self, value: Option<Vec<KeyValuePair>>) {
        self.selections = value;
    }
}

impl Parsable for AndroidManagedStoreAppConfigurationSchemaItem {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "dataType" => assign_present(&mut self.data_type, node.get_enum_value()?),
            "defaultBoolValue" => assign_present(&mut self.default_bool_value, node.get_bool_value()?),
            "defaultIntValue" => assign_present(&mut self.default_int_value, node.get_i32_value()?),
            "defaultStringArrayValue" => assign_present(&mut self.default_string_array_value, node.get_collection_of_string_values()?),
            "defaultStringValue" => assign_present(&mut self.default_string_value, node.get_string_value()?),
            "description" => assign_present(&mut self.description, node.get_string_value()?),
            "displayName" => assign_present(&mut self.display_name, node.get_string_value()?),
            "index" => assign_present(&mut self.index, node.get_i32_value()?),
            ODATA_TYPE_KEY => assign_present(&mut self.odata_type, node.get_string_value()?),
            "parentIndex" => assign_present(&mut self.parent_index, node.get_i32_value()?),
            "schemaItemKey" => assign_present(&mut self.schema_item_key, node.get_string_value()?),
            "selections" => assign_present(&mut self.selections, node.get_collection_of_object_values_as()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        writer.write_enum_value("dataType", self.data_type())?;
        writer.write_bool_value("defaultBoolValue", self.default_bool_value)?;
        writer.write_i32_value("defaultIntValue", self.default_int_value)?;
        writer.write_collection_of_string_values("defaultStringArrayValue", self.default_string_array_value())?;
        writer.write_string_value("defaultStringValue", self.default_string_value())?;
        writer.write_string_value("description", self.description())?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_i32_value("index", self.index)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_i32_value("parentIndex", self.parent_index)?;
        writer.write_string_value("schemaItemKey", self.schema_item_key())?;
        writer.write_collection_of_object_values("selections", object_refs(self.selections.as_ref()).as_deref())?;
        writer.write_additional_data(Some(&self.additional_data))
    }

    own_parsable_base!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{decode_as, encode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_string_arrays_and_selections() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.androidManagedStoreAppConfigurationSchemaItem",
            "schemaItemKey": "allowed_domains",
            "index": 3,
            "parentIndex": 1,
            "dataType": "multiselect",
            "defaultStringArrayValue": ["contoso.com", "fabrikam.com"],
            "selections": [
                {"@odata.type": "microsoft.graph.keyValuePair", "name": "Contoso", "value": "contoso.com"},
                {"@odata.type": "microsoft.graph.keyValuePair", "name": "Fabrikam", "value": "fabrikam.com"}
            ]
        });

        let item = decode_as::<AndroidManagedStoreAppConfigurationSchemaItem>(&payload.to_string()).unwrap();

        assert_eq!(item.data_type(), Some(&AndroidManagedStoreAppConfigurationSchemaItemDataType::Multiselect));
        assert_eq!(
            item.default_string_array_value(),
            Some(&["contoso.com".to_string(), "fabrikam.com".to_string()][..])
        );
        assert_eq!(item.selections().unwrap()[1].value(), Some("fabrikam.com"));
        assert_eq!(item.default_string_value(), None);
        assert_eq!(encode(&item).unwrap(), payload);
    }

    #[test]
    fn writes_an_empty_string_array() {
        let mut item = AndroidManagedStoreAppConfigurationSchemaItem::default();
        item.set_data_type(Some(AndroidManagedStoreAppConfigurationSchemaItemDataType::BundleArray));
        item.set_default_string_array_value(Some(vec![]));

        assert_eq!(
            encode(&item).unwrap(),
            json!({"dataType": "bundleArray", "defaultStringArrayValue": []})
        );
    }
}
