use crate::models::delegate_parsable_base;
use crate::models::recommendation_base::{RecommendationBase, RecommendationBaseable, register_model};
use crate::serialization::{DecodeError, EncodeError, Parsable, ParseNode, SerializationWriter};
use model_macros::register_model;

// API: https://learn.microsoft.com/en-us/graph/api/resources/recommendation
/// A recommendation issued by Azure AD. It adds nothing on the wire to its base.
#[derive(Debug, Clone, Default, PartialEq)]
#[register_model("#microsoft.graph.recommendation")]
pub struct Recommendation {
    base: RecommendationBase,
}

impl Parsable for Recommendation {
    fn deserialize_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, DecodeError> {
        self.base.deserialize_field(name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), EncodeError> {
        self.base.serialize_fields(writer)?;
        writer.write_additional_data(self.additional_data())
    }

    delegate_parsable_base!(base);
}

impl RecommendationBaseable for Recommendation {
    fn recommendation_base(&self) -> &RecommendationBase {
        &self.base
    }

    fn recommendation_base_mut(&mut self) -> &mut RecommendationBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MODELS, RecommendationFeatureAreas, RecommendationPriority, RecommendationStatus, RecommendationType};
    use crate::serialization::{decode_payload, encode};
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const RECOMMENDATION: &str = include_str!("../../tests/resources/payloads/recommendation.json");

    fn decode() -> Box<dyn Parsable> {
        decode_payload(RECOMMENDATION, &MODELS).unwrap()
    }

    #[test]
    fn decodes_a_recommendation_with_its_steps() {
        let record = decode();
        let recommendation = record.downcast_ref::<Recommendation>().unwrap().recommendation_base();

        assert_eq!(recommendation.entity().id(), Some("contoso_mfaRegistrationV2"));
        assert_eq!(recommendation.recommendation_type(), Some(&RecommendationType::MfaRegistrationV2));
        assert_eq!(recommendation.priority(), Some(&RecommendationPriority::High));
        assert_eq!(recommendation.status(), Some(&RecommendationStatus::Postponed));
        assert_eq!(recommendation.current_score(), Some(3.0));
        assert_eq!(recommendation.max_score(), Some(5.0));
        assert_eq!(
            recommendation.feature_areas(),
            Some(&[RecommendationFeatureAreas::Users, RecommendationFeatureAreas::ConditionalAccess][..])
        );
        assert_eq!(
            recommendation.postpone_until_date_time(),
            Some(DateTime::parse_from_rfc3339("2023-03-01T00:00:00Z").unwrap())
        );

        let steps = recommendation.action_steps().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].step_number(), Some(2));
        assert_eq!(
            steps[0].action_url().and_then(|url| url.url()),
            Some("https://portal.azure.com/#blade/Microsoft_AAD_IAM/AuthenticationMethodsMenuBlade")
        );
    }

    #[test]
    fn reproduces_the_payload() {
        let expected: Value = serde_json::from_str(RECOMMENDATION).unwrap();

        let record = decode();

        assert_eq!(encode(record.as_ref()).unwrap(), expected);
    }

    #[test]
    fn edits_through_the_base() {
        let mut recommendation = Recommendation::default();
        recommendation.recommendation_base_mut().set_status(Some(RecommendationStatus::Dismissed));

        assert_eq!(encode(&recommendation).unwrap(), serde_json::json!({"status": "dismissed"}));
    }
}
