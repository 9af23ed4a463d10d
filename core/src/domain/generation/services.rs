use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    generation::{
        entities::{AttemptFailure, AttemptRecord, Generated, GenerationExhausted, GenerationOutcome},
        extractor::extract_json_candidate,
        ports::{CompiledSchema, LLMClient, SchemaValidator},
        value_objects::{GenerationRequest, compose_prompt},
    },
};

/// Drives the generate → extract → decode → validate loop until one attempt
/// passes both gates or `max_attempts` generation calls have been made.
///
/// Generation-service failures abort immediately with `Err`; decode and
/// validation failures are recorded and retried. The schema is compiled once,
/// before the first generation call, and reused for every attempt.
pub async fn run_structured_generation<T, L, V>(
    llm_client: &L,
    schema_validator: &V,
    request: GenerationRequest<'_>,
) -> Result<GenerationOutcome<T>, CoreError>
where
    T: DeserializeOwned + Send,
    L: LLMClient,
    V: SchemaValidator,
{
    if request.max_attempts == 0 {
        return Err(CoreError::Invalid(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    let compiled = schema_validator
        .compile(&request.schema.value)
        .map_err(|e| {
            error!(schema = %request.schema.name, "Refusing to generate against malformed schema: {}", e);
            CoreError::SchemaMalformed(format!("{}: {}", request.schema.name, e))
        })?;

    let prompt = compose_prompt(request.framing, request.base_prompt, request.user_input);

    let span = info_span!(
        "structured_generation",
        generation_id = %generate_uuid_v7(),
        schema = %request.schema.name,
        max_attempts = request.max_attempts,
    );

    attempt_loop(llm_client, compiled.as_ref(), &request, prompt)
        .instrument(span)
        .await
}

async fn attempt_loop<T, L>(
    llm_client: &L,
    schema: &dyn CompiledSchema,
    request: &GenerationRequest<'_>,
    prompt: String,
) -> Result<GenerationOutcome<T>, CoreError>
where
    T: DeserializeOwned + Send,
    L: LLMClient,
{
    debug!(prompt = %prompt, "Composed generation prompt");

    let mut failed_attempts: Vec<AttemptRecord> = Vec::new();

    for attempt in 1..=request.max_attempts {
        let raw_text = llm_client.generate(prompt.clone()).await.map_err(|e| {
            error!(attempt, "Generation call failed, aborting: {}", e);
            e
        })?;

        let candidate = extract_json_candidate(&raw_text).map(str::to_string);
        let document = candidate.as_deref().unwrap_or(&raw_text);

        match evaluate_candidate::<T>(schema, document) {
            Ok(value) => {
                info!(attempt, "Generated schema-valid document");
                return Ok(GenerationOutcome::Success(Generated {
                    value,
                    attempt,
                    failed_attempts,
                }));
            }
            Err(failure) => {
                warn!(attempt, "Attempt rejected: {}", failure);
                failed_attempts.push(AttemptRecord {
                    attempt,
                    raw_text,
                    candidate,
                    failure,
                });
            }
        }
    }

    warn!(
        attempts = failed_attempts.len(),
        "Exhausted attempt budget without a valid document"
    );

    Ok(GenerationOutcome::Exhausted(GenerationExhausted {
        max_attempts: request.max_attempts,
        attempts: failed_attempts,
    }))
}

/// Decode gate first, schema gate second; either failing rejects the attempt.
fn evaluate_candidate<T>(schema: &dyn CompiledSchema, document: &str) -> Result<T, AttemptFailure>
where
    T: DeserializeOwned,
{
    let value = serde_json::from_str::<T>(document).map_err(|e| AttemptFailure::Decode {
        error: e.to_string(),
    })?;

    match schema.validate(document) {
        Ok(report) if report.valid => Ok(value),
        Ok(report) => Err(AttemptFailure::Validation {
            violations: report.violations,
        }),
        Err(e) => Err(AttemptFailure::Validation {
            violations: vec![e.to_string()],
        }),
    }
}
