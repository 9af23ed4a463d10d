use super::handlers::create_meal_plan::{__path_create_meal_plan, create_meal_plan};
use super::handlers::create_workout_plan::{__path_create_workout_plan, create_workout_plan};
use super::handlers::get_meal_plan::{__path_get_meal_plan, get_meal_plan};
use super::handlers::get_workout_plan::{__path_get_workout_plan, get_workout_plan};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_meal_plan, create_meal_plan))]
pub struct MealPlanApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_workout_plan, create_workout_plan))]
pub struct WorkoutPlanApiDoc;

pub fn plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plan", state.args.server.root_path),
            get(get_meal_plan).post(create_meal_plan),
        )
        .route(
            &format!("{}/workout-plan", state.args.server.root_path),
            get(get_workout_plan).post(create_workout_plan),
        )
}
