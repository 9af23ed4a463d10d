use crate::application::http::plan::validators::PlanQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use salus_core::domain::plan::entities::MealPlan;
use salus_core::domain::plan::ports::PlanService;
use validator::Validate;

#[utoipa::path(
    get,
    path = "",
    tag = "plan",
    summary = "Generate meal plan",
    description = "Generates a schema-validated meal plan, optionally steered by a free-text prompt.",
    params(PlanQuery),
    responses(
        (status = 200, body = MealPlan),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Response<MealPlan>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::BadRequest(format!("Invalid query: {e}")))?;

    let plan = state
        .service
        .generate_meal_plan(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
