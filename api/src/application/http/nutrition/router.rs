use super::handlers::search_foods::{__path_search_foods, search_foods};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_foods))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/search", state.args.server.root_path),
        get(search_foods),
    )
}
