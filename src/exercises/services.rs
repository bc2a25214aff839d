use time::{Date, OffsetDateTime};
use tracing::{debug, info};
use uuid::Uuid;

use super::{dto::AddExerciseRequest, repo_types::ExerciseEntry};
use crate::{
    catalog::ExerciseItem,
    errors::AppError,
    events::FitnessEvent,
    state::AppState,
    validation::{validate_name, validate_quantity},
};

/// Calories for `quantity` minutes or reps, rounded to a whole number.
pub fn calories_burned(exercise: &ExerciseItem, quantity: f64) -> Result<u32, AppError> {
    let quantity = validate_quantity(quantity)?;
    let calories = (exercise.calories_per_unit * quantity).round();
    if calories > f64::from(u32::MAX) {
        return Err(AppError::validation("Quantity is too large"));
    }
    Ok(calories as u32)
}

pub fn exercise_from_catalog(
    exercise: &ExerciseItem,
    quantity: f64,
    now: OffsetDateTime,
) -> Result<ExerciseEntry, AppError> {
    let calories = calories_burned(exercise, quantity)?;
    Ok(ExerciseEntry {
        id: Uuid::new_v4(),
        name: exercise.name.to_string(),
        category: exercise.category,
        quantity,
        unit: exercise.unit,
        calories_burned: calories,
        logged_at: now,
        date: now.date(),
    })
}

pub fn exercise_from_request(
    req: AddExerciseRequest,
    now: OffsetDateTime,
) -> Result<ExerciseEntry, AppError> {
    Ok(ExerciseEntry {
        id: Uuid::new_v4(),
        name: validate_name(&req.name)?,
        category: req.category,
        quantity: validate_quantity(req.quantity)?,
        unit: req.unit,
        calories_burned: req.calories_burned,
        logged_at: now,
        date: now.date(),
    })
}

pub async fn record_exercise(
    st: &AppState,
    exercise: ExerciseEntry,
) -> Result<ExerciseEntry, AppError> {
    let exercise = st.exercises.append(exercise).await?;
    info!(
        exercise_id = %exercise.id,
        name = %exercise.name,
        calories_burned = exercise.calories_burned,
        "exercise logged"
    );
    st.events
        .publish(FitnessEvent::ExerciseAdded(exercise.clone()));
    Ok(exercise)
}

pub async fn exercises_for_day(st: &AppState, date: Date) -> Result<Vec<ExerciseEntry>, AppError> {
    let exercises = st.exercises.list_by_date(date).await?;
    debug!(%date, count = exercises.len(), "exercises listed");
    Ok(exercises)
}

pub async fn delete_exercise(st: &AppState, id: Uuid) -> Result<ExerciseEntry, AppError> {
    let removed = st
        .exercises
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Exercise not found"))?;
    info!(exercise_id = %id, "exercise deleted");
    st.events.publish(FitnessEvent::ExerciseRemoved { id });
    Ok(removed)
}
