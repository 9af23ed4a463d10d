use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::domain::generation::{
    entities::{SchemaValidationError, ValidationReport},
    ports::{CompiledSchema, SchemaValidator},
};

/// [`SchemaValidator`] backed by the `jsonschema` crate, pinned to Draft 7.
#[derive(Debug, Clone)]
pub struct JsonSchemaValidator {
    draft: Draft,
}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self {
            draft: Draft::Draft7,
        }
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, SchemaValidationError> {
        let compiled = JSONSchema::options()
            .with_draft(self.draft)
            .compile(schema)
            .map_err(|e| SchemaValidationError::SchemaMalformed(e.to_string()))?;

        Ok(Box::new(CompiledJsonSchema { schema: compiled }))
    }
}

struct CompiledJsonSchema {
    schema: JSONSchema,
}

impl CompiledSchema for CompiledJsonSchema {
    fn validate(&self, document_text: &str) -> Result<ValidationReport, SchemaValidationError> {
        let document: Value = serde_json::from_str(document_text)
            .map_err(|e| SchemaValidationError::DocumentMalformed(e.to_string()))?;

        let violations: Vec<String> = match self.schema.validate(&document) {
            Ok(()) => return Ok(ValidationReport::valid()),
            Err(errors) => errors
                .map(|error| {
                    let path = error.instance_path.to_string();
                    if path.is_empty() {
                        error.to_string()
                    } else {
                        format!("{path}: {error}")
                    }
                })
                .collect(),
        };

        tracing::debug!("Validation errors: {}", violations.join(", "));

        Ok(ValidationReport::invalid(violations))
    }
}
