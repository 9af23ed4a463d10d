use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, builder::NonEmptyStringValueParser};
use salus_core::{
    domain::common::{GenerationConfig, LLMConfig, NutritionConfig, SalusConfig, StorageConfig},
    infrastructure::{
        llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
        nutrition::fatsecret_client::{DEFAULT_FATSECRET_BASE_URL, DEFAULT_FATSECRET_TOKEN_URL},
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "salus-api", version, about = "Schema-validated meal and workout plan generation")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub nutrition: NutritionArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub generation: GenerationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated; `*` allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long,
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = 0.9)]
    pub gemini_temperature: f32,

    #[arg(long, env = "GEMINI_TOP_P", default_value_t = 0.95)]
    pub gemini_top_p: f32,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub gemini_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct NutritionArgs {
    #[arg(
        long,
        env = "FATSECRET_CLIENT_ID",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub fatsecret_client_id: String,

    #[arg(
        long,
        env = "FATSECRET_CLIENT_SECRET",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub fatsecret_client_secret: String,

    #[arg(long, env = "FATSECRET_TOKEN_URL", default_value = DEFAULT_FATSECRET_TOKEN_URL)]
    pub fatsecret_token_url: String,

    #[arg(long, env = "FATSECRET_BASE_URL", default_value = DEFAULT_FATSECRET_BASE_URL)]
    pub fatsecret_base_url: String,

    #[arg(long, env = "FATSECRET_TIMEOUT_SECS", default_value_t = 10)]
    pub fatsecret_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "SCHEMAS_DIR", default_value = "schemas")]
    pub schemas_dir: PathBuf,

    #[arg(long, env = "PROMPTS_DIR", default_value = "prompts")]
    pub prompts_dir: PathBuf,

    #[arg(long, env = "CACHE_SCHEMAS", default_value_t = true, action = ArgAction::Set)]
    pub cache_schemas: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerationArgs {
    #[arg(
        long,
        env = "MEAL_MAX_ATTEMPTS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub meal_max_attempts: u32,

    #[arg(
        long,
        env = "WORKOUT_MAX_ATTEMPTS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub workout_max_attempts: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Falls back to this filter when `RUST_LOG` is unset.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SalusConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                temperature: args.llm.gemini_temperature,
                top_p: args.llm.gemini_top_p,
                timeout: Duration::from_secs(args.llm.gemini_timeout_secs),
            },
            nutrition: NutritionConfig {
                client_id: args.nutrition.fatsecret_client_id,
                client_secret: args.nutrition.fatsecret_client_secret,
                token_url: args.nutrition.fatsecret_token_url,
                base_url: args.nutrition.fatsecret_base_url,
                timeout: Duration::from_secs(args.nutrition.fatsecret_timeout_secs),
            },
            storage: StorageConfig {
                schemas_dir: args.storage.schemas_dir,
                prompts_dir: args.storage.prompts_dir,
                cache_documents: args.storage.cache_schemas,
            },
            generation: GenerationConfig {
                meal_max_attempts: args.generation.meal_max_attempts,
                workout_max_attempts: args.generation.workout_max_attempts,
            },
        }
    }
}
