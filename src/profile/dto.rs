use serde::Deserialize;

use super::repo_types::{ActivityLevel, DietType, FitnessGoal, Gender, Units};

/// Partial update; absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_goal: Option<FitnessGoal>,
    pub target_weight: Option<f64>,
    pub weekly_goal: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub diet_type: Option<DietType>,
    pub calorie_goal: Option<u32>,
    pub protein_percentage: Option<u32>,
    pub carb_percentage: Option<u32>,
    pub fat_percentage: Option<u32>,
    pub settings: Option<SettingsUpdate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsUpdate {
    pub notifications: Option<bool>,
    pub email_updates: Option<bool>,
    pub dark_mode: Option<bool>,
    pub data_sharing: Option<bool>,
    pub units: Option<Units>,
}
