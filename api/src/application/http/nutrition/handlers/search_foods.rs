use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use salus_core::domain::nutrition::ports::NutritionService;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchFoodsQuery {
    /// Food search expression, e.g. `chicken breast`.
    pub query: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "nutrition",
    summary = "Search foods",
    description = "Proxies a food search to the nutrition database and returns its response unchanged.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = Value),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchFoodsQuery>,
) -> Result<Response<Value>, ApiError> {
    let results = state
        .service
        .search_foods(query.query.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(results))
}
