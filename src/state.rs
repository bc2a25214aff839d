use std::sync::Arc;

use crate::{
    auth::AccountStore,
    config::AppConfig,
    events::EventBus,
    exercises::ExerciseEntry,
    meals::MealEntry,
    profile::ProfileStore,
    store::{EntryRepository, InMemoryRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub meals: Arc<dyn EntryRepository<MealEntry>>,
    pub exercises: Arc<dyn EntryRepository<ExerciseEntry>>,
    pub profile: Arc<ProfileStore>,
    pub accounts: Arc<AccountStore>,
    pub events: EventBus,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AppConfig) -> Self {
        let events = EventBus::new(config.event_capacity);
        Self {
            config: Arc::new(config),
            meals: Arc::new(InMemoryRepository::<MealEntry>::new()),
            exercises: Arc::new(InMemoryRepository::<ExerciseEntry>::new()),
            profile: Arc::new(ProfileStore::default()),
            accounts: Arc::new(AccountStore::new()),
            events,
        }
    }

    /// Fresh empty state with default goals, independent of the environment.
    pub fn fake() -> Self {
        Self::from_config(AppConfig::default())
    }
}
