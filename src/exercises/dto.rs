use serde::Deserialize;

use crate::catalog::{ExerciseCategory, ExerciseUnit};

/// Request body for `POST /exercises`: values are stored as sent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    pub name: String,
    pub category: ExerciseCategory,
    pub quantity: f64,
    pub unit: ExerciseUnit,
    pub calories_burned: u32,
}

/// Request body for `POST /exercises/log`: calories come from the catalog rate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogExerciseRequest {
    pub exercise_id: u32,
    pub quantity: f64,
}
