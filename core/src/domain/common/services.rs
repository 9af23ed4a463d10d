use crate::domain::common::GenerationConfig;

/// Service aggregating every outbound port used by the domain services.
///
/// Each bounded context implements its service trait on this type, so the
/// HTTP layer only ever holds one cloneable handle.
#[derive(Clone)]
pub struct Service<SS, LLM, SV, NC> {
    pub(crate) schema_store: SS,
    pub(crate) llm_client: LLM,
    pub(crate) schema_validator: SV,
    pub(crate) nutrition_client: NC,
    pub(crate) generation: GenerationConfig,
}

impl<SS, LLM, SV, NC> Service<SS, LLM, SV, NC> {
    pub fn new(
        schema_store: SS,
        llm_client: LLM,
        schema_validator: SV,
        nutrition_client: NC,
        generation: GenerationConfig,
    ) -> Self {
        Self {
            schema_store,
            llm_client,
            schema_validator,
            nutrition_client,
            generation,
        }
    }
}
