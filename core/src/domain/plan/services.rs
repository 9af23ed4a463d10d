use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::{
        entities::GenerationOutcome,
        ports::{LLMClient, SchemaValidator},
        services::run_structured_generation,
        value_objects::GenerationRequest,
    },
    nutrition::ports::NutritionClient,
    plan::{
        entities::{MealPlan, WorkoutPlan},
        ports::PlanService,
        value_objects::{GeneratePlanInput, PlanKind},
    },
    schema::ports::SchemaStore,
};

impl<SS, LLM, SV, NC> Service<SS, LLM, SV, NC>
where
    SS: SchemaStore,
    LLM: LLMClient,
    SV: SchemaValidator,
    NC: NutritionClient,
{
    /// Loads the kind's schema and template, then runs the retry loop.
    #[instrument(skip(self, input))]
    async fn generate_plan<T>(&self, kind: PlanKind, input: GeneratePlanInput) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Send,
    {
        let schema = self.schema_store.load_schema(kind.schema_name()).await?;
        let template = self
            .schema_store
            .load_prompt_template(kind.template_name())
            .await?;

        let max_attempts = kind.max_attempts(&self.generation);

        let outcome = run_structured_generation::<T, _, _>(
            &self.llm_client,
            &self.schema_validator,
            GenerationRequest {
                base_prompt: &template.text,
                user_input: input.user_input.as_deref(),
                framing: kind.framing(),
                schema: &schema,
                max_attempts,
            },
        )
        .await?;

        match outcome {
            GenerationOutcome::Success(generated) => Ok(generated.value),
            GenerationOutcome::Exhausted(exhausted) => {
                let summary = exhausted.summary();
                error!(
                    attempts = exhausted.attempts.len(),
                    "Failed to generate valid {}: {}",
                    kind.label(),
                    summary
                );
                Err(CoreError::GenerationExhausted {
                    kind: kind.label().to_string(),
                    attempts: exhausted.max_attempts,
                    summary,
                })
            }
        }
    }
}

impl<SS, LLM, SV, NC> PlanService for Service<SS, LLM, SV, NC>
where
    SS: SchemaStore,
    LLM: LLMClient,
    SV: SchemaValidator,
    NC: NutritionClient,
{
    async fn generate_meal_plan(&self, input: GeneratePlanInput) -> Result<MealPlan, CoreError> {
        self.generate_plan(PlanKind::Meal, input).await
    }

    async fn generate_workout_plan(
        &self,
        input: GeneratePlanInput,
    ) -> Result<WorkoutPlan, CoreError> {
        self.generate_plan(PlanKind::Workout, input).await
    }
}
