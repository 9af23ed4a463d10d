use crate::application::http::plan::validators::PlanRequestValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use salus_core::domain::plan::entities::WorkoutPlan;
use salus_core::domain::plan::ports::PlanService;

#[utoipa::path(
    post,
    path = "",
    tag = "plan",
    summary = "Generate workout plan from a structured request",
    description = "Generates a schema-validated workout plan. The request body is forwarded to the generator as the user's request.",
    request_body = PlanRequestValidator,
    responses(
        (status = 200, body = WorkoutPlan),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn create_workout_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlanRequestValidator>,
) -> Result<Response<WorkoutPlan>, ApiError> {
    let plan = state
        .service
        .generate_workout_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
