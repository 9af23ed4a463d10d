use crate::domain::{common::GenerationConfig, generation::value_objects::DEFAULT_FRAMING};

/// The structured document types this service can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    Meal,
    Workout,
}

impl PlanKind {
    pub fn schema_name(&self) -> &'static str {
        match self {
            PlanKind::Meal => "meal",
            PlanKind::Workout => "workout",
        }
    }

    pub fn template_name(&self) -> &'static str {
        self.schema_name()
    }

    pub fn framing(&self) -> &'static str {
        match self {
            PlanKind::Meal => DEFAULT_FRAMING,
            PlanKind::Workout => "Consider the following request MAKE SURE YOU ADD A DESCRIPTION",
        }
    }

    pub fn max_attempts(&self, config: &GenerationConfig) -> u32 {
        match self {
            PlanKind::Meal => config.meal_max_attempts,
            PlanKind::Workout => config.workout_max_attempts,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::Meal => "meal plan",
            PlanKind::Workout => "workout plan",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GeneratePlanInput {
    pub user_input: Option<String>,
}
