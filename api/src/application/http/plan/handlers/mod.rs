pub mod create_meal_plan;
pub mod create_workout_plan;
pub mod get_meal_plan;
pub mod get_workout_plan;
