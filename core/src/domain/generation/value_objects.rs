use crate::domain::schema::entities::SchemaDocument;

pub const DEFAULT_FRAMING: &str = "Consider the following request";

/// Input of one orchestrator invocation.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub base_prompt: &'a str,
    pub user_input: Option<&'a str>,
    /// Sentence placed before the user input, e.g. [`DEFAULT_FRAMING`].
    pub framing: &'a str,
    pub schema: &'a SchemaDocument,
    pub max_attempts: u32,
}

/// Prepends the framed user input to the base prompt when there is any.
pub fn compose_prompt(framing: &str, base_prompt: &str, user_input: Option<&str>) -> String {
    match user_input.map(str::trim).filter(|input| !input.is_empty()) {
        Some(input) => format!("{framing}: {input}\n\n{base_prompt}"),
        None => base_prompt.to_string(),
    }
}
