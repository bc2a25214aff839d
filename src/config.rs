use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;

use crate::summary::engine::Goals;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub goals: Goals,
    /// Buffered events per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            goals: Goals::default(),
            event_capacity: 64,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let goals = Goals {
            calorie_goal: env_or("CALORIE_GOAL", defaults.goals.calorie_goal)?,
            protein_goal_g: env_or("PROTEIN_GOAL_G", defaults.goals.protein_goal_g)?,
            burn_goal_kcal: env_or("BURN_GOAL_KCAL", defaults.goals.burn_goal_kcal)?,
        };
        check_goals(&goals)?;

        let event_capacity = env_or("EVENT_CAPACITY", defaults.event_capacity)?;
        if event_capacity == 0 {
            anyhow::bail!("EVENT_CAPACITY must be at least 1");
        }

        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port: env_or("APP_PORT", defaults.port)?,
            goals,
            event_capacity,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Same calorie range the profile accepts; keeps the balance arithmetic small.
const CALORIE_GOAL_RANGE: std::ops::RangeInclusive<i64> = 1000..=5000;

fn check_goals(goals: &Goals) -> anyhow::Result<()> {
    if !CALORIE_GOAL_RANGE.contains(&goals.calorie_goal) {
        anyhow::bail!(
            "CALORIE_GOAL must be between {} and {}, got {}",
            CALORIE_GOAL_RANGE.start(),
            CALORIE_GOAL_RANGE.end(),
            goals.calorie_goal
        );
    }
    for (key, value) in [
        ("PROTEIN_GOAL_G", goals.protein_goal_g),
        ("BURN_GOAL_KCAL", goals.burn_goal_kcal),
    ] {
        if !value.is_finite() || value <= 0.0 {
            anyhow::bail!("{key} must be a positive number, got {value}");
        }
    }
    Ok(())
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
