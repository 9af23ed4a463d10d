use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// An immutable JSON Schema document identified by a logical name.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub name: String,
    pub text: String,
    pub value: Value,
}

impl SchemaDocument {
    /// Parses `text` as JSON; schema-level validity is checked by the validator.
    pub fn parse(name: impl Into<String>, text: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let text = text.into();

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(schema = %name, "Schema document is not valid JSON: {}", e);
            CoreError::SchemaMalformed(format!("{name}: {e}"))
        })?;

        if !value.is_object() && !value.is_boolean() {
            return Err(CoreError::SchemaMalformed(format!(
                "{name}: schema root must be an object or a boolean"
            )));
        }

        Ok(Self { name, text, value })
    }
}

/// A named base prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: String,
    pub text: String,
}

/// Store names are plain identifiers so they can never escape the store root.
pub fn is_valid_document_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
