//! Built-in food and exercise reference tables.
//!
//! The tables are immutable for the lifetime of the process; logging a meal or
//! an exercise copies the scaled values into the entry.

pub mod handlers;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::{errors::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    handlers::catalog_routes()
}

/// Nutrition facts for one serving.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u32,
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl ExerciseCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Cardio" => Some(Self::Cardio),
            "Strength" => Some(Self::Strength),
            "Flexibility" => Some(Self::Flexibility),
            _ => None,
        }
    }
}

/// What the logged quantity of an exercise counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseUnit {
    Minutes,
    Reps,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseItem {
    pub id: u32,
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub unit: ExerciseUnit,
    /// Calories per minute or per rep, depending on `unit`.
    pub calories_per_unit: f64,
}

const fn food(
    id: u32,
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving: &'static str,
) -> FoodItem {
    FoodItem {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
        serving,
    }
}

const fn exercise(
    id: u32,
    name: &'static str,
    category: ExerciseCategory,
    unit: ExerciseUnit,
    calories_per_unit: f64,
) -> ExerciseItem {
    ExerciseItem {
        id,
        name,
        category,
        unit,
        calories_per_unit,
    }
}

pub static FOODS: &[FoodItem] = &[
    food(1, "Chicken Breast", 165.0, 31.0, 0.0, 3.6, "100g"),
    food(2, "Brown Rice", 112.0, 2.6, 23.5, 0.9, "100g"),
    food(3, "Broccoli", 55.0, 3.7, 11.2, 0.6, "100g"),
    food(4, "Salmon", 208.0, 20.0, 0.0, 13.0, "100g"),
    food(5, "Sweet Potato", 86.0, 1.6, 20.1, 0.1, "100g"),
    food(6, "Avocado", 160.0, 2.0, 8.5, 14.7, "100g"),
    food(7, "Egg", 78.0, 6.3, 0.6, 5.3, "1 large"),
    food(8, "Greek Yogurt", 59.0, 10.0, 3.6, 0.4, "100g"),
    food(9, "Banana", 89.0, 1.1, 22.8, 0.3, "1 medium"),
    food(10, "Oatmeal", 68.0, 2.4, 12.0, 1.4, "100g"),
];

pub static EXERCISES: &[ExerciseItem] = {
    use ExerciseCategory::*;
    use ExerciseUnit::*;
    &[
        exercise(1, "Running", Cardio, Minutes, 10.0),
        exercise(2, "Walking", Cardio, Minutes, 5.0),
        exercise(3, "Cycling", Cardio, Minutes, 8.0),
        exercise(4, "Swimming", Cardio, Minutes, 9.0),
        exercise(5, "Push-ups", Strength, Reps, 0.5),
        exercise(6, "Pull-ups", Strength, Reps, 1.0),
        exercise(7, "Squats", Strength, Reps, 0.5),
        exercise(8, "Bench Press", Strength, Reps, 0.8),
        exercise(9, "Deadlift", Strength, Reps, 1.2),
        exercise(10, "Yoga", Flexibility, Minutes, 4.0),
        exercise(11, "Pilates", Flexibility, Minutes, 5.0),
        exercise(12, "Jumping Jacks", Cardio, Minutes, 8.0),
    ]
};

pub fn find_food(id: u32) -> Result<&'static FoodItem, AppError> {
    FOODS
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AppError::not_found("Food not found"))
}

pub fn find_exercise(id: u32) -> Result<&'static ExerciseItem, AppError> {
    EXERCISES
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::not_found("Exercise not found"))
}

fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Case-insensitive substring search. A blank term yields nothing.
pub fn search_foods(term: &str) -> Vec<&'static FoodItem> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    FOODS.iter().filter(|f| name_matches(f.name, term)).collect()
}

/// Like [`search_foods`], optionally narrowed to one category.
pub fn search_exercises(
    term: &str,
    category: Option<ExerciseCategory>,
) -> Vec<&'static ExerciseItem> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    EXERCISES
        .iter()
        .filter(|e| name_matches(e.name, term))
        .filter(|e| category.map_or(true, |c| e.category == c))
        .collect()
}
