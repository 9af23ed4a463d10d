//! In-memory doubles for the outbound ports.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::ports::LLMClient,
    nutrition::ports::NutritionClient,
    schema::{
        entities::{PromptTemplate, SchemaDocument},
        ports::SchemaStore,
    },
};

/// Replays scripted responses and counts every call.
pub struct ScriptedLLMClient {
    responses: Mutex<VecDeque<Result<String, CoreError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLLMClient {
    pub fn new(responses: Vec<Result<String, CoreError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn repeating(text: &str, times: usize) -> Self {
        Self::new((0..times).map(|_| Ok(text.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::GenerationUnavailable("script ended".into())))
    }
}

#[derive(Default)]
pub struct InMemorySchemaStore {
    schemas: HashMap<String, String>,
    templates: HashMap<String, String>,
}

impl InMemorySchemaStore {
    pub fn with_schema(mut self, name: &str, text: &str) -> Self {
        self.schemas.insert(name.to_string(), text.to_string());
        self
    }

    pub fn with_template(mut self, name: &str, text: &str) -> Self {
        self.templates.insert(name.to_string(), text.to_string());
        self
    }
}

impl SchemaStore for InMemorySchemaStore {
    async fn load_schema(&self, name: &str) -> Result<SchemaDocument, CoreError> {
        let text = self
            .schemas
            .get(name)
            .ok_or_else(|| CoreError::SchemaNotFound(name.to_string()))?;
        SchemaDocument::parse(name, text.clone())
    }

    async fn load_prompt_template(&self, name: &str) -> Result<PromptTemplate, CoreError> {
        let text = self
            .templates
            .get(name)
            .ok_or_else(|| CoreError::SchemaNotFound(name.to_string()))?;
        Ok(PromptTemplate {
            name: name.to_string(),
            text: text.clone(),
        })
    }
}

/// Returns a canned body for every search and records the queries.
#[derive(Default)]
pub struct StubNutritionClient {
    pub response: Value,
    pub queries: Mutex<Vec<String>>,
}

impl NutritionClient for StubNutritionClient {
    async fn search_foods(&self, query: &str) -> Result<Value, CoreError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.response.clone())
    }
}

pub const MEAL_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["meals"],
    "properties": {
        "meals": {
            "type": "array",
            "minItems": 1,
            "items": {
                "type": "object",
                "required": ["meal_type", "name", "calories", "macros", "ingredients"],
                "properties": {
                    "meal_type": { "type": "string" },
                    "name": { "type": "string" },
                    "calories": { "type": "integer", "minimum": 0 },
                    "macros": {
                        "type": "object",
                        "required": ["carbs", "protein", "fat"],
                        "properties": {
                            "carbs": { "type": "integer", "minimum": 0 },
                            "protein": { "type": "integer", "minimum": 0 },
                            "fat": { "type": "integer", "minimum": 0 }
                        }
                    },
                    "ingredients": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    }
}"#;

pub const WORKOUT_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["workout_type", "duration_minutes", "description", "exercises"],
    "properties": {
        "workout_type": { "type": "string" },
        "duration_minutes": { "type": "integer", "minimum": 1 },
        "description": { "type": "string", "minLength": 1 },
        "exercises": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["name", "reps", "sets"],
                "properties": {
                    "name": { "type": "string" },
                    "reps": { "type": "integer", "minimum": 1 },
                    "sets": { "type": "integer", "minimum": 1 }
                }
            }
        }
    }
}"#;

pub const VALID_MEAL_PLAN: &str = r#"{"meals": [{"meal_type": "breakfast", "name": "Eggs",
    "description": "Scrambled", "calories": 400,
    "macros": {"carbs": 5, "protein": 30, "fat": 20}, "ingredients": ["eggs", "butter"]}]}"#;

pub const VALID_WORKOUT_PLAN: &str = r#"{"workout_type": "strength", "duration_minutes": 45,
    "description": "Lower body focus", "exercises": [{"name": "Squat", "reps": 8, "sets": 4}]}"#;
