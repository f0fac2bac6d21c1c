use crate::models::{ActionStep, Entity, delegate_parsable_base};
use crate::serialization::{
    DecodeError, Discriminated, DiscriminatorRegistry, EncodeError, Parsable, ParseNode, ParseNodeExt, SerializationWriter, SerializationWriterExt,
    assign_present, impl_wire_enum, new_discriminated, object_refs,
};
use chrono::{DateTime, FixedOffset};
use model_macros::register_model;
use std::sync::LazyLock;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecommendationCategory {
    IdentityBestPractice,
    IdentitySecurity,
    Application,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RecommendationCategory);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecommendationFeatureAreas {
    Users,
    Groups,
    Devices,
    Applications,
    AccessReviews,
    ConditionalAccess,
    Governance,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RecommendationFeatureAreas);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RecommendationPriority);

#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecommendationStatus {
    Active,
    CompletedBySystem,
    CompletedByUser,
    Dismissed,
    Postponed,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RecommendationStatus);

// Names carrying acronyms do not follow camel case and are spelled out.
#[derive(Debug, Clone, PartialEq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecommendationType {
    AdfsAppsMigration,
    #[strum(serialize = "enableDesktopSSO")]
    EnableDesktopSso,
    #[strum(serialize = "enablePHS")]
    EnablePhs,
    EnableProvisioning,
    #[strum(serialize = "switchFromPerUserMFA")]
    SwitchFromPerUserMfa,
    #[strum(serialize = "tenantMFA")]
    TenantMfa,
    ThirdPartyApps,
    #[strum(serialize = "turnOffPerUserMFA")]
    TurnOffPerUserMfa,
    UseAuthenticatorApp,
    UseMyApps,
    StaleApps,
    StaleAppCreds,
    ApplicationCredentialExpiry,
    ServicePrincipalKeyExpiry,
    #[strum(serialize = "adminMFAV2")]
    AdminMfaV2,
    BlockLegacyAuthentication,
    IntegratedApps,
    #[strum(serialize = "mfaRegistrationV2")]
    MfaRegistrationV2,
    PasswordHashSync,
    OneAdmin,
    RoleOverlap,
    SelfServicePasswordReset,
    SigninRiskPolicy,
    UserRiskPolicy,
    VerifyAppPublisher,
    #[strum(serialize = "privateLinkForAAD")]
    PrivateLinkForAad,
    AppRoleAssignmentsGroups,
    AppRoleAssignmentsUsers,
    ManagedIdentity,
    OverprivilegedApps,
    UnknownFutureValue,
    #[strum(default)]
    Unrecognized(String),
}

impl_wire_enum!(RecommendationType);

/// A recommendation in any of the forms published under `#microsoft.graph.recommendationBase`.
pub trait RecommendationBaseable: Parsable {
    fn recommendation_base(&self) -> &RecommendationBase;

    fn recommendation_base_mut(&mut self) -> &mut RecommendationBase;
}

impl PartialEq for dyn RecommendationBaseable {
    fn eq(&self, other: &Self) -> bool {
        (self as &dyn Parsable) == (other as &dyn Parsable)
    }
}

pub static RECOMMENDATIONS: LazyLock<DiscriminatorRegistry<dyn RecommendationBaseable>> =
    LazyLock::new(|| DiscriminatorRegistry::new("recommendationBase", construct_recommendation_base));

fn construct_recommendation_base() -> Box<dyn RecommendationBaseable> {
    Box::new(RecommendationBase::default())
}

fn construct<T: RecommendationBaseable + Default + Discriminated>() -> Box<dyn RecommendationBaseable> {
    Box::new(new_discriminated::<T>())
}

/// Registers a recommendation variant with the family and with the global model registry.
pub(crate) fn register_model<T: RecommendationBaseable + Default + Discriminated>() {
    RECOMMENDATIONS.register(T::ODATA_TYPE, construct::<T>);
    crate::models::register_model::<T>();
}

// API: https://learn.microsoft.com/en-us/graph/api/resources/recommendationbase
/// An improvement suggested for the tenant, scored by how much of it has been carried out.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.recommendationBase")]
pub struct RecommendationBase {
    entity: Entity,
    action_steps: Option<Vec<ActionStep>>,
    benefits: Option<String>,
    category: Option<RecommendationCategory>,
    created_date_time: Option<DateTime<FixedOffset>>,
    current_score: Option<f64>,
    display_name: Option<String>,
    feature_areas: Option<Vec<RecommendationFeatureAreas>>,
    impact_start_date_time: Option<DateTime<FixedOffset>>,
    impact_type: Option<String>,
    insights: Option<String>,
    last_checked_date_time: Option<DateTime<FixedOffset>>,
    last_modified_by: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    max_score: Option<f64>,
    postpone_until_date_time: Option<DateTime<FixedOffset>>,
    priority: Option<RecommendationPriority>,
    recommendation_type: Option<RecommendationType>,
    remediation_impact: Option<String>,
    status: Option<RecommendationStatus>,
}

impl RecommendationBase {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn RecommendationBaseable>, DecodeError> {
        RECOMMENDATIONS.create(node)
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn action_steps(&self) -> Option<&[ActionStep]> {
        self.action_steps.as_deref()
    }

    pub fn set_action_steps(&mut self, value: Option<Vec<ActionStep>>) {
        self.action_steps = value;
    }

    pub fn benefits(&self) -> Option<&str> {
        self.benefits.as_deref()
    }

    pub fn set_benefits(&mut self, value: Option<String>) {
        self.benefits = value;
    }

    pub fn category(&self) -> Option<&RecommendationCategory> {
        self.category.as_ref()
    }

    pub fn set_category(&mut self, value: Option<RecommendationCategory>) {
        self.category = value;
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.created_date_time = value;
    }

    /// Points earned so far, out of `max_score`.
    pub fn current_score(&self) -> Option<f64> {
        self.current_score
    }

    pub fn set_current_score(&mut self, value: Option<f64>) {
        self.current_score = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn feature_areas(&self) -> Option<&[RecommendationFeatureAreas]> {
        self.feature_areas.as_deref()
    }

    pub fn set_feature_areas(&mut self, value: Option<Vec<RecommendationFeatureAreas>>) {
        self.feature_areas = value;
    }

    pub fn impact_start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.impact_start_date_time
    }

    pub fn set_impact_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.impact_start_date_time = value;
    }

    pub fn impact_type(&self) -> Option<&str> {
        self.impact_type.as_deref()
    }

    pub fn set_impact_type(&mut self, value: Option<String>) {
        self.impact_type = value;
    }

    pub fn insights(&self) -> Option<&str> {
        self.insights.as_deref()
    }

    pub fn set_insights(&mut self, value: Option<String>) {
        self.insights = value;
    }

    pub fn last_checked_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_checked_date_time
    }

    pub fn set_last_checked_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_checked_date_time = value;
    }

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    pub fn set_last_modified_by(&mut self, value: Option<String>) {
        self.last_modified_by = value;
    }

    pub fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.last_modified_date_time = value;
    }

    pub fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    pub fn set_max_score(&mut self, value: Option<f64>) {
        self.max_score = value;
    }

    /// Only meaningful while the status is `postponed`.
    pub fn postpone_until_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.postpone_until_date_time
    }

    pub fn set_postpone_until_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.postpone_until_date_time = value;
    }

    pub fn priority(&self) -> Option<&RecommendationPriority> {
        self.priority.as_ref()
    }

    pub fn set_priority(&mut self, value: Option<RecommendationPriority>) {
        self.priority = value;
    }

    pub fn recommendation_type(&self) -> Option<&RecommendationType> {
        self.recommendation_type.as_ref()
    }

    pub fn set_recommendation_type(&mut self, value: Option<RecommendationType>) {
        self.recommendation_type = value;
    }

    pub fn remediation_impact(&self) -> Option<&str> {
        self.remediation_impact.as_deref()
    }

    pub fn set_remediation_impact(&mut self, value: Option<String>) {
        self.remediation_impact = value;
    }

    pub fn status(&self) -> Option<&RecommendationStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, value: Option<RecommendationStatus>) {
        self.status = value;
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.entity.serialize_fields(writer)?;
        writer.write_collection_of_object_values("actionSteps", object_refs(self.action_steps.as_ref()).as_deref())?;
        writer.write_string_value("benefits", self.benefits())?;
        writer.write_enum_value("category", self.category())?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_f64_value("currentScore", self.current_score)?;
        writer.write_string_value("displayName", self.display_name())?;
        writer.write_collection_of_enum_values("featureAreas", self.feature_areas())?;
        writer.write_date_time_value("impactStartDateTime", self.impact_start_date_time.as_ref())?;
        writer.write_string_value("impactType", self.impact_type())?;
        writer.write_string_value("insights", self.insights())?;
        writer.write_date_time_value("lastCheckedDateTime", self.last_checked_date_time.as_ref())?;
        writer.write_string_value("lastModifiedBy", self.last_modified_by())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_f64_value("maxScore", self.max_score)?;
        writer.write_date_time_value("postponeUntilDateTime", self.postpone_until_date_time.as_ref())?;
        writer.write_enum_value("priority", self.priority())?;
        writer.write_enum_value("recommendationType", self.recommendation_type())?;
        writer.write_string_value("remediationImpact", self.remediation_impact())?;
        writer.write_enum_value("status", self.status())?;
        Ok(())
    }
}

impl Parsable for RecommendationBase {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        match name {
            "actionSteps" => assign_present(&mut self.action_steps, node.get_collection_of_object_values_as()?),
            "benefits" => assign_present(&mut self.benefits, node.get_string_value()?),
            "category" => assign_present(&mut self.category, node.get_enum_value()?),
            "createdDateTime" => assign_present(&mut self.created_date_time, node.get_date_time_value()?),
            "currentScore" => assign_present(&mut self.current_score, node.get_f64_value()?),
            "displayName" => assign_present(&mut self.display_name, node.get_string_value()?),
            "featureAreas" => assign_present(&mut self.feature_areas, node.get_collection_of_enum_values()?),
            "impactStartDateTime" => assign_present(&mut self.impact_start_date_time, node.get_date_time_value()?),
            "impactType" => assign_present(&mut self.impact_type, node.get_string_value()?),
            "insights" => assign_present(&mut self.insights, node.get_string_value()?),
            "lastCheckedDateTime" => assign_present(&mut self.last_checked_date_time, node.get_date_time_value()?),
            "lastModifiedBy" => assign_present(&mut self.last_modified_by, node.get_string_value()?),
            "lastModifiedDateTime" => assign_present(&mut self.last_modified_date_time, node.get_date_time_value()?),
            "maxScore" => assign_present(&mut self.max_score, node.get_f64_value()?),
            "postponeUntilDateTime" => assign_present(&mut self.postpone_until_date_time, node.get_date_time_value()?),
            "priority" => assign_present(&mut self.priority, node.get_enum_value()?),
            "recommendationType" => assign_present(&mut self.recommendation_type, node.get_enum_value()?),
            "remediationImpact" => assign_present(&mut self.remediation_impact, node.get_string_value()?),
            "status" => assign_present(&mut self.status, node.get_enum_value()?),
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.serialize_fields(writer)?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(entity);
}

impl RecommendationBaseable for RecommendationBase {
    fn recommendation_base(&self) -> &RecommendationBase {
        self
    }

    fn recommendation_base_mut(&mut self) -> &mut RecommendationBase {
        self
    }
}
