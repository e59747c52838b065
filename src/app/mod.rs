// Application layer: use cases orchestrating the domain through its ports.

pub mod import;
pub mod race_service;
pub mod runner_service;

use crate::domain::ports::{NotificationService, RaceRepository, RunnerRepository};
use race_service::RaceService;
use runner_service::RunnerService;

/// The services exposed by the application layer.
pub struct Services<RR: RunnerRepository, CR: RaceRepository, N: NotificationService> {
    pub runners: RunnerService<RR, N>,
    pub races: RaceService<CR>,
}

impl<RR: RunnerRepository, CR: RaceRepository, N: NotificationService> Services<RR, CR, N> {
    pub fn new(runner_repo: RR, race_repo: CR, notifier: N) -> Self {
        Self {
            runners: RunnerService::new(runner_repo, notifier),
            races: RaceService::new(race_repo),
        }
    }

    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.runners = self.runners.with_welcome_message(message);
        self
    }
}
