//! Daily nutrition and activity rollup.
//!
//! Everything here is a pure function of one day's entries and the goal
//! constants: the same inputs always produce the same [`DailyAggregate`].
//! Macro sums stay unrounded for percentages and scoring; only the displayed
//! gram totals are rounded.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Weekday};

use crate::{day::day_key, exercises::ExerciseEntry, meals::MealEntry};

pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

const PROTEIN_WEIGHT: f64 = 0.3;
const BURN_WEIGHT: f64 = 0.3;
const BALANCE_WEIGHT: f64 = 0.4;
/// A surplus of this many kcal earns the full balance term.
const SURPLUS_SCALE_KCAL: f64 = 500.0;

const LOW_PROTEIN_G: i64 = 100;
const LOW_BURN_KCAL: i64 = 300;

const ONBOARDING_SUGGESTIONS: [&str; 3] = [
    "Start by logging your meals to track your calorie and nutrient intake.",
    "Add your exercises to monitor your activity level and calories burned.",
    "Complete your profile in settings to get personalized recommendations.",
];
const PROTEIN_SUGGESTION: &str =
    "Try to increase your protein intake. Consider adding lean meats, eggs, or protein shakes to your diet.";
const ACTIVITY_SUGGESTION: &str =
    "Your activity level is a bit low today. Try to incorporate more movement or a short workout tomorrow.";
const PORTIONS_SUGGESTION: &str =
    "You've exceeded your calorie goal. Consider adjusting your portions or choosing lower-calorie options tomorrow.";
const ON_TRACK_SUGGESTION: &str =
    "You're doing great! Keep maintaining your current habits for continued success.";

/// Daily targets the aggregate is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub calorie_goal: i64,
    pub protein_goal_g: f64,
    pub burn_goal_kcal: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calorie_goal: 2000,
            protein_goal_g: 140.0,
            burn_goal_kcal: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    /// Nothing consumed and nothing burned.
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Grade::A => "Excellent! You're crushing your goals.",
            Grade::B => "Great job! Keep up the good work.",
            Grade::C => "Good effort. Room for improvement.",
            Grade::D => "You're making progress, but try harder tomorrow.",
            Grade::F => "You're far from your goals. Let's refocus.",
            Grade::NotAvailable => "No data available yet. Start logging your meals and exercises!",
        }
    }
}

/// Sign of the calorie balance. The labels do not look at the profile's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceKind {
    Deficit,
    Surplus,
}

impl BalanceKind {
    pub fn of(balance: i64) -> Self {
        if balance > 0 {
            BalanceKind::Deficit
        } else {
            BalanceKind::Surplus
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BalanceKind::Deficit => "Calorie deficit (good for weight loss)",
            BalanceKind::Surplus => "Calorie surplus (good for muscle gain)",
        }
    }
}

/// Macro totals in whole grams, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTotals {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Share of macro calories per nutrient, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroPercentages {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    #[serde(with = "day_key")]
    pub date: Date,
    pub calories_consumed: i64,
    pub calories_burned: i64,
    pub calorie_goal: i64,
    pub macros: MacroTotals,
    pub calorie_balance: i64,
    pub balance_kind: BalanceKind,
    pub balance_label: &'static str,
    pub macro_percentages: MacroPercentages,
    pub score: Option<f64>,
    pub grade: Grade,
    pub grade_description: &'static str,
    pub suggestions: Vec<&'static str>,
    pub meal_count: usize,
    pub exercise_count: usize,
}

/// One row of the weekly trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    #[serde(with = "day_key")]
    pub date: Date,
    pub day: &'static str,
    pub calories_consumed: i64,
    pub calories_burned: i64,
    pub protein: i64,
}

/// Unrounded sums of one day's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    consumed: i64,
    burned: i64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl Totals {
    fn of<'a>(
        meals: impl IntoIterator<Item = &'a MealEntry>,
        exercises: impl IntoIterator<Item = &'a ExerciseEntry>,
    ) -> Self {
        let mut t = meals.into_iter().fold(Totals::default(), |mut t, m| {
            t.consumed += i64::from(m.calories);
            t.protein += m.protein;
            t.carbs += m.carbs;
            t.fat += m.fat;
            t
        });
        t.burned = exercises
            .into_iter()
            .map(|e| i64::from(e.calories_burned))
            .sum();
        t
    }

    fn has_data(&self) -> bool {
        self.consumed != 0 || self.burned != 0
    }
}

fn round_grams(grams: f64) -> i64 {
    grams.round() as i64
}

fn macro_percentages(t: &Totals) -> MacroPercentages {
    let protein_kcal = t.protein * PROTEIN_KCAL_PER_G;
    let carbs_kcal = t.carbs * CARB_KCAL_PER_G;
    let fat_kcal = t.fat * FAT_KCAL_PER_G;
    let mut total = protein_kcal + carbs_kcal + fat_kcal;
    if total == 0.0 {
        total = 1.0;
    }
    let pct = |kcal: f64| (kcal / total * 100.0).round() as u32;
    MacroPercentages {
        protein: pct(protein_kcal),
        carbs: pct(carbs_kcal),
        fat: pct(fat_kcal),
    }
}

/// Weighted score where meeting every goal exactly gives 100. The protein and
/// burn terms are not capped, so overshooting either sub-goal raises the score
/// past its 30% share.
fn weighted_score(t: &Totals, balance: i64, goals: &Goals) -> f64 {
    let protein_term = t.protein / goals.protein_goal_g;
    let burn_term = t.burned as f64 / goals.burn_goal_kcal;
    let balance_term = if balance > 0 {
        1.0
    } else {
        balance as f64 / -SURPLUS_SCALE_KCAL
    };
    (PROTEIN_WEIGHT * protein_term + BURN_WEIGHT * burn_term + BALANCE_WEIGHT * balance_term)
        * 100.0
}

fn suggestions(t: &Totals, macros: &MacroTotals, goals: &Goals) -> Vec<&'static str> {
    if !t.has_data() {
        return ONBOARDING_SUGGESTIONS.to_vec();
    }
    let mut out = Vec::new();
    if macros.protein < LOW_PROTEIN_G {
        out.push(PROTEIN_SUGGESTION);
    }
    if t.burned < LOW_BURN_KCAL {
        out.push(ACTIVITY_SUGGESTION);
    }
    if t.consumed > goals.calorie_goal {
        out.push(PORTIONS_SUGGESTION);
    }
    if out.is_empty() {
        out.push(ON_TRACK_SUGGESTION);
    }
    out
}

/// Rolls one day's entries up into totals, balance, grade and suggestions.
/// Callers pass only entries dated `date`.
pub fn aggregate(
    date: Date,
    meals: &[MealEntry],
    exercises: &[ExerciseEntry],
    goals: &Goals,
) -> DailyAggregate {
    let t = Totals::of(meals, exercises);
    let macros = MacroTotals {
        protein: round_grams(t.protein),
        carbs: round_grams(t.carbs),
        fat: round_grams(t.fat),
    };
    let calorie_balance = goals.calorie_goal - t.consumed + t.burned;
    let balance_kind = BalanceKind::of(calorie_balance);

    let (score, grade) = if t.has_data() {
        let s = weighted_score(&t, calorie_balance, goals);
        (Some(s), Grade::from_score(s))
    } else {
        (None, Grade::NotAvailable)
    };

    DailyAggregate {
        date,
        calories_consumed: t.consumed,
        calories_burned: t.burned,
        calorie_goal: goals.calorie_goal,
        macros,
        calorie_balance,
        balance_kind,
        balance_label: balance_kind.label(),
        macro_percentages: macro_percentages(&t),
        score,
        grade,
        grade_description: grade.description(),
        suggestions: suggestions(&t, &macros, goals),
        meal_count: meals.len(),
        exercise_count: exercises.len(),
    }
}

fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Seven rows ending at `end`, oldest first; empty days are zero rows.
pub fn weekly(end: Date, meals: &[MealEntry], exercises: &[ExerciseEntry]) -> Vec<DaySummary> {
    (0..7i64)
        .rev()
        .filter_map(|back| end.checked_sub(Duration::days(back)))
        .map(|date| {
            let t = Totals::of(
                meals.iter().filter(|m| m.date == date),
                exercises.iter().filter(|e| e.date == date),
            );
            DaySummary {
                date,
                day: short_weekday(date.weekday()),
                calories_consumed: t.consumed,
                calories_burned: t.burned,
                protein: round_grams(t.protein),
            }
        })
        .collect()
}
