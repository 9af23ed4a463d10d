use salus_core::domain::plan::value_objects::GeneratePlanInput;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, IntoParams)]
pub struct PlanQuery {
    /// Free-text request appended to the base prompt.
    #[validate(length(max = 5000, message = "prompt must be at most 5000 characters"))]
    pub prompt: Option<String>,
}

impl From<PlanQuery> for GeneratePlanInput {
    fn from(query: PlanQuery) -> Self {
        GeneratePlanInput {
            user_input: query.prompt.filter(|p| !p.trim().is_empty()),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PlanRequestValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "prompt must be at most 5000 characters"))]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 20, message = "at most 20 goals"))]
    pub goals: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 20, message = "at most 20 restrictions"))]
    pub restrictions: Vec<String>,
}

impl PlanRequestValidator {
    /// A bare prompt is forwarded as-is; structured bodies are forwarded as
    /// compact JSON so the generator sees every field.
    pub fn user_input(&self) -> Option<String> {
        let prompt = self.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty());

        if self.goals.is_empty() && self.restrictions.is_empty() {
            return prompt.map(str::to_string);
        }

        serde_json::to_string(self).ok()
    }
}

impl From<PlanRequestValidator> for GeneratePlanInput {
    fn from(payload: PlanRequestValidator) -> Self {
        GeneratePlanInput {
            user_input: payload.user_input(),
        }
    }
}
