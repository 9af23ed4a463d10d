use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::{LLMClient, SchemaValidator},
    nutrition::ports::{NutritionClient, NutritionService},
    schema::ports::SchemaStore,
};

impl<SS, LLM, SV, NC> NutritionService for Service<SS, LLM, SV, NC>
where
    SS: SchemaStore,
    LLM: LLMClient,
    SV: SchemaValidator,
    NC: NutritionClient,
{
    #[instrument(skip(self))]
    async fn search_foods(&self, query: String) -> Result<Value, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::Invalid("Missing 'query' parameter".to_string()));
        }

        self.nutrition_client.search_foods(query).await
    }
}
