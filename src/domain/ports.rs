use crate::domain::ids::{RaceId, RunnerId};
use crate::domain::race::Race;
use crate::domain::race_result::RaceResult;
use crate::domain::runner::Runner;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage contract for runners.
#[async_trait]
pub trait RunnerRepository: Send + Sync {
    async fn add(&self, runner: &Runner) -> Result<()>;
    /// Fails with `RunnerNotFound` when no runner has this id.
    async fn get_by_id(&self, id: RunnerId) -> Result<Runner>;
    async fn update(&self, runner: &Runner) -> Result<()>;
    async fn get_all(&self) -> Result<Vec<Runner>>;
    async fn delete(&self, id: RunnerId) -> Result<()>;
}

/// Storage contract for races and their logged results.
#[async_trait]
pub trait RaceRepository: Send + Sync {
    async fn save_race(&self, race: &Race) -> Result<()>;
    /// Fails with `RaceNotFound` when no race has this id.
    async fn get_race(&self, race_id: RaceId) -> Result<Race>;
    async fn save_race_result(&self, result: &RaceResult) -> Result<()>;
    /// Returns an empty list, not an error, for a runner without results.
    async fn get_race_results(&self, runner_id: RunnerId) -> Result<Vec<RaceResult>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub email_address: String,
    pub subject: String,
    pub message: String,
}

/// Best-effort outbound messaging.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<()>;
}

#[async_trait]
impl<T: RunnerRepository + ?Sized> RunnerRepository for Arc<T> {
    async fn add(&self, runner: &Runner) -> Result<()> {
        (**self).add(runner).await
    }

    async fn get_by_id(&self, id: RunnerId) -> Result<Runner> {
        (**self).get_by_id(id).await
    }

    async fn update(&self, runner: &Runner) -> Result<()> {
        (**self).update(runner).await
    }

    async fn get_all(&self) -> Result<Vec<Runner>> {
        (**self).get_all().await
    }

    async fn delete(&self, id: RunnerId) -> Result<()> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: RaceRepository + ?Sized> RaceRepository for Arc<T> {
    async fn save_race(&self, race: &Race) -> Result<()> {
        (**self).save_race(race).await
    }

    async fn get_race(&self, race_id: RaceId) -> Result<Race> {
        (**self).get_race(race_id).await
    }

    async fn save_race_result(&self, result: &RaceResult) -> Result<()> {
        (**self).save_race_result(result).await
    }

    async fn get_race_results(&self, runner_id: RunnerId) -> Result<Vec<RaceResult>> {
        (**self).get_race_results(runner_id).await
    }
}

#[async_trait]
impl<T: NotificationService + ?Sized> NotificationService for Arc<T> {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        (**self).notify(notification).await
    }
}
