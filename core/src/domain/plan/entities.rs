use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub carbs: i32,
    pub protein: i32,
    pub fat: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub meal_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub calories: i32,
    pub macros: Macros,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub name: String,
    pub reps: i32,
    pub sets: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutPlan {
    pub workout_type: String,
    pub duration_minutes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<Exercise>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_plan_ignores_unknown_fields() {
        let plan: MealPlan = serde_json::from_str(
            r#"{"meals": [{"meal_type": "lunch", "name": "Salad", "calories": 350,
                "macros": {"carbs": 20, "protein": 12, "fat": 9},
                "ingredients": ["lettuce"], "emoji": "🥗"}], "notes": "extra"}"#,
        )
        .unwrap();
        assert_eq!(plan.meals[0].name, "Salad");
        assert_eq!(plan.meals[0].description, None);
    }

    #[test]
    fn test_missing_required_field_reports_field_name() {
        let err = serde_json::from_str::<WorkoutPlan>(
            r#"{"workout_type": "cardio", "exercises": []}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duration_minutes"));
    }

    #[test]
    fn test_description_is_omitted_when_absent() {
        let plan = WorkoutPlan {
            workout_type: "strength".to_string(),
            duration_minutes: 45,
            description: None,
            exercises: vec![Exercise {
                name: "Squat".to_string(),
                reps: 8,
                sets: 4,
            }],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["exercises"][0]["sets"], 4);
    }
}
