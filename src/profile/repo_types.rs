use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    LoseWeight,
    GainMuscle,
    ImproveEndurance,
    MaintainHealth,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Balanced,
    LowCarb,
    HighProtein,
    Keto,
    Vegetarian,
    Vegan,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub notifications: bool,
    pub email_updates: bool,
    pub dark_mode: bool,
    pub data_sharing: bool,
    pub units: Units,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            email_updates: false,
            dark_mode: false,
            data_sharing: true,
            units: Units::Metric,
        }
    }
}

/// The single user's profile. Height is in cm and weights in kg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_goal: FitnessGoal,
    pub target_weight: Option<f64>,
    pub weekly_goal: f64, // kg per week
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    pub calorie_goal: u32,
    pub protein_percentage: u32,
    pub carb_percentage: u32,
    pub fat_percentage: u32,
    pub settings: AppSettings,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: None,
            gender: None,
            height: None,
            weight: None,
            fitness_goal: FitnessGoal::LoseWeight,
            target_weight: None,
            weekly_goal: 0.5,
            activity_level: ActivityLevel::Moderate,
            diet_type: DietType::Balanced,
            calorie_goal: 2000,
            protein_percentage: 30,
            carb_percentage: 40,
            fat_percentage: 30,
            settings: AppSettings::default(),
        }
    }
}
