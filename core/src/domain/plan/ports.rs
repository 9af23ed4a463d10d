use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    plan::{
        entities::{MealPlan, WorkoutPlan},
        value_objects::GeneratePlanInput,
    },
};

/// Service trait for schema-validated plan generation
#[cfg_attr(test, mockall::automock)]
pub trait PlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn generate_workout_plan(
        &self,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<WorkoutPlan, CoreError>> + Send;
}
