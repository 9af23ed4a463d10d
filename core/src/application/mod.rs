use crate::{
    domain::common::{SalusConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::GeminiLLMClient, nutrition::FatSecretClient, schema::FsSchemaStore,
        validation::JsonSchemaValidator,
    },
};

pub type SalusService =
    Service<FsSchemaStore, GeminiLLMClient, JsonSchemaValidator, FatSecretClient>;

pub async fn create_service(config: SalusConfig) -> Result<SalusService, CoreError> {
    let schema_store = FsSchemaStore::new(&config.storage);
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let nutrition_client = FatSecretClient::new(&config.nutrition)?;

    tracing::info!(
        model = %config.llm.gemini_model,
        schemas_dir = %config.storage.schemas_dir.display(),
        prompts_dir = %config.storage.prompts_dir.display(),
        meal_max_attempts = config.generation.meal_max_attempts,
        workout_max_attempts = config.generation.workout_max_attempts,
        "Initializing Salus service"
    );

    Ok(Service::new(
        schema_store,
        llm_client,
        JsonSchemaValidator::new(),
        nutrition_client,
        config.generation,
    ))
}
