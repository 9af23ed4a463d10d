use crate::application::http::{
    nutrition::router::NutritionApiDoc,
    plan::router::{MealPlanApiDoc, WorkoutPlanApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salus API"
    ),
    nest(
        (path = "/meal-plan", api = MealPlanApiDoc),
        (path = "/workout-plan", api = WorkoutPlanApiDoc),
        (path = "/search", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
