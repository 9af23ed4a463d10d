use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::entities::{SchemaValidationError, ValidationReport},
};

/// Client for the external text-generation service.
///
/// One call is one billed generation; implementations must not retry.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the first candidate's text. Fails with `GenerationUnavailable`
    /// on transport errors and `UnexpectedResponseShape` when no text came back.
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// A schema compiled once and checked against many documents.
#[cfg_attr(test, mockall::automock)]
pub trait CompiledSchema: Send + Sync {
    /// Fails with `DocumentMalformed` when `document_text` is not JSON.
    fn validate(&self, document_text: &str) -> Result<ValidationReport, SchemaValidationError>;
}

/// JSON Schema conformance checks.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaValidator: Send + Sync {
    /// Fails with `SchemaMalformed` when `schema` is not a usable JSON Schema.
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, SchemaValidationError>;

    fn validate(
        &self,
        schema_text: &str,
        document_text: &str,
    ) -> Result<ValidationReport, SchemaValidationError> {
        let schema: Value = serde_json::from_str(schema_text)
            .map_err(|e| SchemaValidationError::SchemaMalformed(e.to_string()))?;

        self.compile(&schema)?.validate(document_text)
    }
}
