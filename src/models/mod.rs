mod action_step;
mod action_url;
mod android_managed_store_app_configuration_schema_item;
mod device_shell_script;
mod entity;
mod ip_named_location;
mod ip_range;
mod ipv4_cidr_range;
mod ipv4_range;
mod ipv6_cidr_range;
mod ipv6_range;
mod key_value_pair;
mod number_range;
mod recommendation;
mod recommendation_base;
mod sales_order_line;
mod user_experience_analytics_app_health_device_performance;
mod user_experience_analytics_device_startup_process_performance;
mod vpn_traffic_rule;
mod zebra_fota_deployment_settings;

pub use action_step::ActionStep;
pub use action_url::ActionUrl;
pub use android_managed_store_app_configuration_schema_item::{AndroidManagedStoreAppConfigurationSchemaItem, AndroidManagedStoreAppConfigurationSchemaItemDataType};
pub use device_shell_script::{DeviceShellScript, RunAsAccountType};
pub use entity::Entity;
pub use ip_named_location::IpNamedLocation;
pub use ip_range::{IP_RANGES, IpRange, IpRangeable};
pub use ipv4_cidr_range::Ipv4CidrRange;
pub use ipv4_range::Ipv4Range;
pub use ipv6_cidr_range::Ipv6CidrRange;
pub use ipv6_range::Ipv6Range;
pub use key_value_pair::KeyValuePair;
pub use number_range::NumberRange;
pub use recommendation::Recommendation;
pub use recommendation_base::{
    RECOMMENDATIONS, RecommendationBase, RecommendationBaseable, RecommendationCategory, RecommendationFeatureAreas, RecommendationPriority,
    RecommendationStatus, RecommendationType,
};
pub use sales_order_line::SalesOrderLine;
pub use user_experience_analytics_app_health_device_performance::{UserExperienceAnalyticsAppHealthDevicePerformance, UserExperienceAnalyticsHealthState};
pub use user_experience_analytics_device_startup_process_performance::UserExperienceAnalyticsDeviceStartupProcessPerformance;
pub use vpn_traffic_rule::{VpnTrafficRule, VpnTrafficRuleAppType, VpnTrafficRuleRoutingPolicyType};
pub use zebra_fota_deployment_settings::{ZebraFotaDeploymentSettings, ZebraFotaNetworkType, ZebraFotaScheduleMode, ZebraFotaUpdateType};

use crate::serialization::{Discriminated, DiscriminatorRegistry, Parsable, new_discriminated};
use std::sync::LazyLock;

/// Every concrete model, keyed by its `@odata.type`. Payloads naming an unknown type decode as an [`Entity`].
pub static MODELS: LazyLock<DiscriminatorRegistry<dyn Parsable>> = LazyLock::new(|| DiscriminatorRegistry::new("model", construct_entity));

fn construct_entity() -> Box<dyn Parsable> {
    Box::new(Entity::default())
}

fn construct_model<T: Parsable + Default + Discriminated>() -> Box<dyn Parsable> {
    Box::new(new_discriminated::<T>())
}

pub(crate) fn register_model<T: Parsable + Default + Discriminated>() {
    MODELS.register(T::ODATA_TYPE, construct_model::<T>);
}

/// Implements the discriminator and additional data accessors of [`Parsable`] for a record storing them in its own
/// `odata_type` and `additional_data` fields.
macro_rules! own_parsable_base {
    () => {
        fn odata_type(&self) -> Option<&str> {
            self.odata_type.as_deref()
        }

        fn set_odata_type(&mut self, value: Option<String>) {
            self.odata_type = value;
        }

        fn additional_data(&self) -> Option<&crate::serialization::AdditionalData> {
            Some(&self.additional_data)
        }

        fn additional_data_mut(&mut self) -> Option<&mut crate::serialization::AdditionalData> {
            Some(&mut self.additional_data)
        }
    };
}

/// Implements the discriminator and additional data accessors of [`Parsable`] by delegating to an embedded base record.
macro_rules! delegate_parsable_base {
    ($base:ident) => {
        fn odata_type(&self) -> Option<&str> {
            crate::serialization::Parsable::odata_type(&self.$base)
        }

        fn set_odata_type(&mut self, value: Option<String>) {
            crate::serialization::Parsable::set_odata_type(&mut self.$base, value)
        }

        fn additional_data(&self) -> Option<&crate::serialization::AdditionalData> {
            crate::serialization::Parsable::additional_data(&self.$base)
        }

        fn additional_data_mut(&mut self) -> Option<&mut crate::serialization::AdditionalData> {
            crate::serialization::Parsable::additional_data_mut(&mut self.$base)
        }
    };
}

pub(crate) use delegate_parsable_base;
pub(crate) use own_parsable_base;
