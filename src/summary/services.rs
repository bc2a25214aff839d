use time::{Date, Duration};
use tracing::debug;

use super::engine::{self, DailyAggregate, DaySummary};
use crate::{errors::AppError, state::AppState};

pub async fn daily_summary(st: &AppState, date: Date) -> Result<DailyAggregate, AppError> {
    let meals = st.meals.list_by_date(date).await?;
    let exercises = st.exercises.list_by_date(date).await?;
    let summary = engine::aggregate(date, &meals, &exercises, &st.config.goals);
    debug!(
        %date,
        consumed = summary.calories_consumed,
        burned = summary.calories_burned,
        grade = ?summary.grade,
        "daily summary computed"
    );
    Ok(summary)
}

pub async fn weekly_summary(st: &AppState, end: Date) -> Result<Vec<DaySummary>, AppError> {
    let start = end.checked_sub(Duration::days(6)).unwrap_or(Date::MIN);
    let meals = st.meals.list_between(start, end).await?;
    let exercises = st.exercises.list_between(start, end).await?;
    Ok(engine::weekly(end, &meals, &exercises))
}
