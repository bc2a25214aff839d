use tracing::{info, warn};

use super::{
    dto::{ProfileUpdate, SettingsUpdate},
    repo_types::{AppSettings, Profile},
};
use crate::{
    errors::AppError,
    events::FitnessEvent,
    state::AppState,
    validation::{is_valid_email, validate_range},
};

const MAX_NAME_CHARS: usize = 60;
const WEEKLY_GOALS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

pub async fn get_profile(st: &AppState) -> Profile {
    st.profile.get().await
}

pub async fn update_profile(st: &AppState, update: ProfileUpdate) -> Result<Profile, AppError> {
    let profile = st
        .profile
        .update(|p| apply_update(p, update))
        .await
        .map_err(|e| {
            warn!(error = %e, "profile update rejected");
            e
        })?;
    info!("profile updated");
    st.events.publish(FitnessEvent::ProfileUpdated);
    Ok(profile)
}

/// Merges `update` into `profile`, validating every provided field.
/// On error `profile` may be partially written; callers work on a copy.
pub fn apply_update(profile: &mut Profile, update: ProfileUpdate) -> Result<(), AppError> {
    if let Some(name) = update.name {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::validation(format!(
                "Name must be between 1 and {} characters",
                MAX_NAME_CHARS
            )));
        }
        profile.name = name.to_string();
    }
    if let Some(email) = update.email {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::validation("Please enter a valid email address"));
        }
        profile.email = email;
    }
    if let Some(age) = update.age {
        if !(13..=100).contains(&age) {
            return Err(AppError::validation("Age must be between 13 and 100"));
        }
        profile.age = Some(age);
    }
    if let Some(gender) = update.gender {
        profile.gender = Some(gender);
    }
    if let Some(height) = update.height {
        profile.height = Some(validate_range("Height", height, 100.0, 250.0)?);
    }
    if let Some(weight) = update.weight {
        profile.weight = Some(validate_range("Weight", weight, 30.0, 300.0)?);
    }
    if let Some(goal) = update.fitness_goal {
        profile.fitness_goal = goal;
    }
    if let Some(target) = update.target_weight {
        profile.target_weight = Some(validate_range("Target weight", target, 30.0, 300.0)?);
    }
    if let Some(weekly) = update.weekly_goal {
        if !WEEKLY_GOALS.contains(&weekly) {
            return Err(AppError::validation(
                "Weekly goal must be one of 0.25, 0.5, 0.75 or 1 kg",
            ));
        }
        profile.weekly_goal = weekly;
    }
    if let Some(level) = update.activity_level {
        profile.activity_level = level;
    }
    if let Some(diet) = update.diet_type {
        profile.diet_type = diet;
    }
    if let Some(goal) = update.calorie_goal {
        if !(1000..=5000).contains(&goal) {
            return Err(AppError::validation(
                "Calorie goal must be between 1000 and 5000",
            ));
        }
        profile.calorie_goal = goal;
    }

    let macros_touched = update.protein_percentage.is_some()
        || update.carb_percentage.is_some()
        || update.fat_percentage.is_some();
    if let Some(p) = update.protein_percentage {
        profile.protein_percentage = percentage("Protein percentage", p)?;
    }
    if let Some(c) = update.carb_percentage {
        profile.carb_percentage = percentage("Carb percentage", c)?;
    }
    if let Some(f) = update.fat_percentage {
        profile.fat_percentage = percentage("Fat percentage", f)?;
    }
    if macros_touched {
        let total = profile.protein_percentage + profile.carb_percentage + profile.fat_percentage;
        if total != 100 {
            return Err(AppError::validation(format!(
                "Macro percentages must add up to 100 (currently {})",
                total
            )));
        }
    }

    if let Some(settings) = update.settings {
        merge_settings(&mut profile.settings, settings);
    }
    Ok(())
}

fn percentage(field: &str, value: u32) -> Result<u32, AppError> {
    if value > 100 {
        return Err(AppError::validation(format!(
            "{} must be between 0 and 100",
            field
        )));
    }
    Ok(value)
}

fn merge_settings(settings: &mut AppSettings, update: SettingsUpdate) {
    if let Some(v) = update.notifications {
        settings.notifications = v;
    }
    if let Some(v) = update.email_updates {
        settings.email_updates = v;
    }
    if let Some(v) = update.dark_mode {
        settings.dark_mode = v;
    }
    if let Some(v) = update.data_sharing {
        settings.data_sharing = v;
    }
    if let Some(v) = update.units {
        settings.units = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::repo_types::{FitnessGoal, Units};

    fn update_from(json: serde_json::Value) -> ProfileUpdate {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn merges_only_provided_fields() {
        let mut p = Profile::default();
        apply_update(
            &mut p,
            update_from(serde_json::json!({
                "name": "  John Doe ",
                "email": "John@Example.com",
                "age": 32,
                "weight": 82.5,
                "fitnessGoal": "gain-muscle",
                "settings": { "darkMode": true, "units": "imperial" }
            })),
        )
        .unwrap();

        assert_eq!(p.name, "John Doe");
        assert_eq!(p.email, "john@example.com");
        assert_eq!(p.age, Some(32));
        assert_eq!(p.weight, Some(82.5));
        assert_eq!(p.fitness_goal, FitnessGoal::GainMuscle);
        assert!(p.settings.dark_mode);
        assert!(p.settings.notifications);
        assert_eq!(p.settings.units, Units::Imperial);
        assert_eq!(p.calorie_goal, 2000);
    }

    #[test]
    fn range_checks() {
        let cases = [
            serde_json::json!({ "age": 12 }),
            serde_json::json!({ "age": 101 }),
            serde_json::json!({ "height": 99.0 }),
            serde_json::json!({ "weight": 301.0 }),
            serde_json::json!({ "targetWeight": 20.0 }),
            serde_json::json!({ "weeklyGoal": 0.3 }),
            serde_json::json!({ "calorieGoal": 999 }),
            serde_json::json!({ "calorieGoal": 5001 }),
            serde_json::json!({ "name": "" }),
            serde_json::json!({ "name": "x".repeat(61) }),
            serde_json::json!({ "email": "not-an-email" }),
        ];
        for case in cases {
            let mut p = Profile::default();
            let res = apply_update(&mut p, update_from(case.clone()));
            assert!(
                matches!(res, Err(AppError::Validation(_))),
                "expected rejection for {case}"
            );
        }
    }

    #[test]
    fn macro_percentages_must_sum_to_hundred() {
        let mut p = Profile::default();
        let res = apply_update(&mut p, update_from(serde_json::json!({ "proteinPercentage": 35 })));
        assert!(matches!(res, Err(AppError::Validation(_))));

        let mut p = Profile::default();
        apply_update(
            &mut p,
            update_from(serde_json::json!({
                "proteinPercentage": 35,
                "carbPercentage": 35,
                "fatPercentage": 30
            })),
        )
        .unwrap();
        assert_eq!(
            (p.protein_percentage, p.carb_percentage, p.fat_percentage),
            (35, 35, 30)
        );
    }

    #[test]
    fn unknown_enum_value_fails_to_parse() {
        let res: Result<ProfileUpdate, _> =
            serde_json::from_value(serde_json::json!({ "activityLevel": "couch" }));
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn rejected_update_leaves_stored_profile_alone() {
        let st = AppState::fake();
        let before = get_profile(&st).await;
        let res = update_profile(
            &st,
            update_from(serde_json::json!({ "name": "Jane", "age": 5 })),
        )
        .await;
        assert!(matches!(res, Err(AppError::Validation(_))));
        assert_eq!(get_profile(&st).await, before);
    }

    #[tokio::test]
    async fn accepted_update_publishes_event() {
        let st = AppState::fake();
        let mut rx = st.events.subscribe();
        let p = update_profile(&st, update_from(serde_json::json!({ "calorieGoal": 1800 })))
            .await
            .unwrap();
        assert_eq!(p.calorie_goal, 1800);
        assert_eq!(rx.recv().await.unwrap().name(), "profile_updated");
    }
}
