use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct SalusConfig {
    pub llm: LLMConfig,
    pub nutrition: NutritionConfig,
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub schemas_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub cache_documents: bool,
}

/// Attempt budgets per document kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub meal_max_attempts: u32,
    pub workout_max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            meal_max_attempts: 3,
            workout_max_attempts: 10,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
