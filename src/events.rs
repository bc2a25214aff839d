use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{exercises::ExerciseEntry, meals::MealEntry};

/// Notifications published after a state change has been applied.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum FitnessEvent {
    MealAdded(MealEntry),
    MealRemoved { id: Uuid },
    ExerciseAdded(ExerciseEntry),
    ExerciseRemoved { id: Uuid },
    ProfileUpdated,
}

impl FitnessEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FitnessEvent::MealAdded(_) => "meal_added",
            FitnessEvent::MealRemoved { .. } => "meal_removed",
            FitnessEvent::ExerciseAdded(_) => "exercise_added",
            FitnessEvent::ExerciseRemoved { .. } => "exercise_removed",
            FitnessEvent::ProfileUpdated => "profile_updated",
        }
    }
}

#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FitnessEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishing without subscribers is fine; the event is dropped.
    pub fn publish(&self, event: FitnessEvent) {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => debug!(event = name, receivers, "event published"),
            Err(_) => debug!(event = name, "event dropped, no subscribers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FitnessEvent> {
        self.tx.subscribe()
    }
}

/// Logs every event until the bus is dropped.
pub async fn log_events(mut rx: broadcast::Receiver<FitnessEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => info!(event = event.name(), "fitness event"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "event logger lagged behind")
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
