use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::ids::{RaceId, ResultId, RunnerId};
use crate::domain::ports::{RaceRepository, RunnerRepository};
use crate::domain::race::Race;
use crate::domain::race_result::RaceResult;
use crate::domain::runner::Runner;
use crate::utils::error::{Result, TrackerError};

#[derive(Default)]
struct RunnerStore {
    runners: HashMap<RunnerId, Runner>,
    // Registration order, so `get_all` is stable.
    order: Vec<RunnerId>,
}

/// In-memory runner storage.
#[derive(Default)]
pub struct InMemoryRunnerRepository {
    store: RwLock<RunnerStore>,
}

impl InMemoryRunnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunnerRepository for InMemoryRunnerRepository {
    async fn add(&self, runner: &Runner) -> Result<()> {
        let mut store = self.store.write().await;
        if store.runners.contains_key(&runner.id()) {
            return Err(TrackerError::StorageError {
                message: format!("runner with ID {} already exists", runner.id()),
            });
        }
        store.order.push(runner.id());
        store.runners.insert(runner.id(), runner.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: RunnerId) -> Result<Runner> {
        let store = self.store.read().await;
        store
            .runners
            .get(&id)
            .cloned()
            .ok_or(TrackerError::RunnerNotFound(id))
    }

    async fn update(&self, runner: &Runner) -> Result<()> {
        let mut store = self.store.write().await;
        match store.runners.get_mut(&runner.id()) {
            Some(stored) => {
                *stored = runner.clone();
                Ok(())
            }
            None => Err(TrackerError::RunnerNotFound(runner.id())),
        }
    }

    async fn get_all(&self) -> Result<Vec<Runner>> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.runners.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: RunnerId) -> Result<()> {
        let mut store = self.store.write().await;
        if store.runners.remove(&id).is_none() {
            return Err(TrackerError::RunnerNotFound(id));
        }
        store.order.retain(|stored| *stored != id);
        Ok(())
    }
}

#[derive(Default)]
struct RaceStore {
    races: HashMap<RaceId, Race>,
    results: HashMap<ResultId, RaceResult>,
    results_by_runner: HashMap<RunnerId, Vec<ResultId>>,
}

/// In-memory race and result storage.
///
/// A single lock guards all three maps: reads share it, writes take it exclusively.
#[derive(Default)]
pub struct InMemoryRaceRepository {
    store: RwLock<RaceStore>,
}

impl InMemoryRaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RaceRepository for InMemoryRaceRepository {
    async fn save_race(&self, race: &Race) -> Result<()> {
        let mut store = self.store.write().await;
        store.races.insert(race.id(), race.clone());
        Ok(())
    }

    async fn get_race(&self, race_id: RaceId) -> Result<Race> {
        let store = self.store.read().await;
        store
            .races
            .get(&race_id)
            .cloned()
            .ok_or(TrackerError::RaceNotFound(race_id))
    }

    async fn save_race_result(&self, result: &RaceResult) -> Result<()> {
        let mut store = self.store.write().await;
        store.results.insert(result.id(), result.clone());
        store
            .results_by_runner
            .entry(result.runner_id())
            .or_default()
            .push(result.id());
        Ok(())
    }

    async fn get_race_results(&self, runner_id: RunnerId) -> Result<Vec<RaceResult>> {
        let store = self.store.read().await;
        let Some(result_ids) = store.results_by_runner.get(&runner_id) else {
            return Ok(Vec::new());
        };

        Ok(result_ids
            .iter()
            .filter_map(|id| store.results.get(id).cloned())
            .collect())
    }
}
