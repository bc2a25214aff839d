use serde::Deserialize;

use super::repo_types::MealType;

/// Request body for `POST /meals`: values are stored as sent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMealRequest {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: f64,
    pub meal_type: MealType,
}

/// Request body for `POST /meals/log`: values come from the food catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealRequest {
    pub food_id: u32,
    pub quantity: f64,
    pub meal_type: MealType,
}
