#![allow(dead_code)]

use async_trait::async_trait;
use race_tracker::domain::ports::{
    Notification, NotificationService, RaceRepository, RunnerRepository,
};
use race_tracker::domain::race::Race;
use race_tracker::domain::race_result::RaceResult;
use race_tracker::domain::runner::Runner;
use race_tracker::{InMemoryRaceRepository, RaceId, Result, RunnerId, TrackerError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every notification it receives; optionally fails each one.
#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(TrackerError::NotificationError {
                message: "smtp unavailable".to_string(),
            });
        }
        Ok(())
    }
}

/// Runner storage whose every call fails like a broken database.
pub struct BrokenRunnerRepository;

fn broken() -> TrackerError {
    TrackerError::StorageError {
        message: "repository error".to_string(),
    }
}

#[async_trait]
impl RunnerRepository for BrokenRunnerRepository {
    async fn add(&self, _runner: &Runner) -> Result<()> {
        Err(broken())
    }

    async fn get_by_id(&self, _id: RunnerId) -> Result<Runner> {
        Err(broken())
    }

    async fn update(&self, _runner: &Runner) -> Result<()> {
        Err(broken())
    }

    async fn get_all(&self) -> Result<Vec<Runner>> {
        Err(broken())
    }

    async fn delete(&self, _id: RunnerId) -> Result<()> {
        Err(broken())
    }
}

/// Wraps the in-memory race storage and counts the calls that reach it.
#[derive(Default)]
pub struct CountingRaceRepository {
    pub inner: InMemoryRaceRepository,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl CountingRaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RaceRepository for CountingRaceRepository {
    async fn save_race(&self, race: &Race) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save_race(race).await
    }

    async fn get_race(&self, race_id: RaceId) -> Result<Race> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_race(race_id).await
    }

    async fn save_race_result(&self, result: &RaceResult) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save_race_result(result).await
    }

    async fn get_race_results(&self, runner_id: RunnerId) -> Result<Vec<RaceResult>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_race_results(runner_id).await
    }
}

/// Race storage whose every call fails like a broken database.
pub struct BrokenRaceRepository;

#[async_trait]
impl RaceRepository for BrokenRaceRepository {
    async fn save_race(&self, _race: &Race) -> Result<()> {
        Err(broken())
    }

    async fn get_race(&self, _race_id: RaceId) -> Result<Race> {
        Err(broken())
    }

    async fn save_race_result(&self, _result: &RaceResult) -> Result<()> {
        Err(broken())
    }

    async fn get_race_results(&self, _runner_id: RunnerId) -> Result<Vec<RaceResult>> {
        Err(broken())
    }
}

/// Serves races from memory but fails every result write.
#[derive(Default)]
pub struct ReadOnlyRaceRepository {
    pub inner: InMemoryRaceRepository,
}

#[async_trait]
impl RaceRepository for ReadOnlyRaceRepository {
    async fn save_race(&self, race: &Race) -> Result<()> {
        self.inner.save_race(race).await
    }

    async fn get_race(&self, race_id: RaceId) -> Result<Race> {
        self.inner.get_race(race_id).await
    }

    async fn save_race_result(&self, _result: &RaceResult) -> Result<()> {
        Err(broken())
    }

    async fn get_race_results(&self, runner_id: RunnerId) -> Result<Vec<RaceResult>> {
        self.inner.get_race_results(runner_id).await
    }
}
