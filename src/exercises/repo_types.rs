use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    catalog::{ExerciseCategory, ExerciseUnit},
    day::day_key,
    store::Entry,
};

/// One logged workout. `calories_burned` is fixed when the entry is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub name: String,
    pub category: ExerciseCategory,
    pub quantity: f64,
    pub unit: ExerciseUnit,
    pub calories_burned: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    #[serde(with = "day_key")]
    pub date: Date,
}

impl Entry for ExerciseEntry {
    fn id(&self) -> Uuid {
        self.id
    }

    fn date(&self) -> Date {
        self.date
    }
}
