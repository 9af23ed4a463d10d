use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a single attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttemptFailure {
    /// Candidate is not JSON or does not match the target structure.
    Decode { error: String },
    /// Candidate decoded but the schema validator rejected it.
    Validation { violations: Vec<String> },
}

impl AttemptFailure {
    pub fn is_decode(&self) -> bool {
        matches!(self, AttemptFailure::Decode { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AttemptFailure::Validation { .. })
    }
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Decode { error } => write!(f, "decode error: {error}"),
            AttemptFailure::Validation { violations } if violations.is_empty() => {
                write!(f, "failed schema validation")
            }
            AttemptFailure::Validation { violations } => {
                write!(f, "failed schema validation: {}", violations.join(", "))
            }
        }
    }
}

/// One failed generate → extract → decode → validate round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    /// 1-based.
    pub attempt: u32,
    pub raw_text: String,
    /// `None` when the extractor found nothing object-shaped.
    pub candidate: Option<String>,
    pub failure: AttemptFailure,
}

impl fmt::Display for AttemptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempt {}: {}", self.attempt, self.failure)
    }
}

/// A decoded and schema-valid value plus the attempts rejected before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    /// Attempt that produced `value`; also the number of generation calls made.
    pub attempt: u32,
    pub failed_attempts: Vec<AttemptRecord>,
}

/// Terminal state after `max_attempts` rejected attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationExhausted {
    pub max_attempts: u32,
    pub attempts: Vec<AttemptRecord>,
}

impl GenerationExhausted {
    /// Every attempt's diagnostics in attempt order, joined with `"; "`.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn decode_failures(&self) -> usize {
        self.attempts.iter().filter(|a| a.failure.is_decode()).count()
    }

    pub fn validation_failures(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.failure.is_validation())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome<T> {
    Success(Generated<T>),
    Exhausted(GenerationExhausted),
}

impl<T> GenerationOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }
}

/// Result of validating one document against one schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub valid: bool,
    /// One entry per violated constraint, in validator order.
    pub violations: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }

    pub fn invalid(violations: Vec<String>) -> Self {
        Self {
            valid: false,
            violations,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaValidationError {
    #[error("schema is malformed: {0}")]
    SchemaMalformed(String),

    #[error("document is malformed: {0}")]
    DocumentMalformed(String),
}
