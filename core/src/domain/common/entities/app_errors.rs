use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Schema or template not found: {0}")]
    SchemaNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Malformed schema: {0}")]
    SchemaMalformed(String),

    #[error("Generation service unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Unexpected response shape from generation service: {0}")]
    UnexpectedResponseShape(String),

    #[error("Failed to generate valid {kind} after {attempts} attempts. Errors: {summary}")]
    GenerationExhausted {
        kind: String,
        attempts: u32,
        summary: String,
    },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Transport failures abort an orchestrator call instead of being retried.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            CoreError::GenerationUnavailable(_) | CoreError::UnexpectedResponseShape(_)
        )
    }
}
