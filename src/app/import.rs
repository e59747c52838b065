use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::app::race_service::ResultItem;
use crate::app::Services;
use crate::config::seed::SeedFile;
use crate::domain::ids::{RaceId, RunnerId};
use crate::domain::ports::{NotificationService, RaceRepository, RunnerRepository};
use crate::utils::error::{Result, TrackerError};

#[derive(Debug, Clone, Serialize)]
pub struct RunnerReport {
    pub id: RunnerId,
    pub name: String,
    pub email_address: String,
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub races_created: usize,
    pub results_logged: usize,
    pub runners: Vec<RunnerReport>,
}

/// Replays a [`SeedFile`] through the services: runners, then races, then results.
pub struct SeedImporter<'a, RR: RunnerRepository, CR: RaceRepository, N: NotificationService> {
    services: &'a Services<RR, CR, N>,
}

impl<'a, RR: RunnerRepository, CR: RaceRepository, N: NotificationService>
    SeedImporter<'a, RR, CR, N>
{
    pub fn new(services: &'a Services<RR, CR, N>) -> Self {
        Self { services }
    }

    /// Keys are checked up front, so a bad seed file writes nothing.
    pub async fn import(&self, seed: &SeedFile) -> Result<ImportReport> {
        check_keys(seed)?;

        let mut runner_ids: HashMap<&str, RunnerId> = HashMap::new();
        let mut race_ids: HashMap<&str, RaceId> = HashMap::new();
        let mut report = ImportReport::default();

        for runner in &seed.runners {
            let id = self
                .services
                .runners
                .create_runner(&runner.name, &runner.email)
                .await?;
            runner_ids.insert(&runner.key, id);
        }

        for race in &seed.races {
            let id = self
                .services
                .races
                .create_race(
                    &race.name,
                    &race.location,
                    race.date,
                    race.distance_km,
                    race.elevation_gain,
                )
                .await?;
            race_ids.insert(&race.key, id);
            report.races_created += 1;
        }

        for result in &seed.results {
            let runner_id = *runner_ids
                .get(result.runner.as_str())
                .ok_or_else(|| unknown_key("runner", &result.runner))?;
            let race_id = *race_ids
                .get(result.race.as_str())
                .ok_or_else(|| unknown_key("race", &result.race))?;

            self.services
                .races
                .add_result(
                    runner_id,
                    race_id,
                    Duration::from_millis(result.finish_time_ms),
                    result.heart_rate_avg,
                    &result.notes,
                )
                .await?;
            report.results_logged += 1;
        }

        for runner in self.services.runners.list_runners().await? {
            let results = self.services.races.get_results(runner.id()).await?;
            report.runners.push(RunnerReport {
                id: runner.id(),
                name: runner.name().to_string(),
                email_address: runner.email_address().to_string(),
                results,
            });
        }

        tracing::info!(
            "Imported {} runners, {} races, {} results",
            report.runners.len(),
            report.races_created,
            report.results_logged
        );
        Ok(report)
    }
}

fn check_keys(seed: &SeedFile) -> Result<()> {
    let mut runner_keys = HashSet::new();
    for runner in &seed.runners {
        if !runner_keys.insert(runner.key.as_str()) {
            return Err(duplicate_key("runner", &runner.key));
        }
    }

    let mut race_keys = HashSet::new();
    for race in &seed.races {
        if !race_keys.insert(race.key.as_str()) {
            return Err(duplicate_key("race", &race.key));
        }
    }

    for result in &seed.results {
        if !runner_keys.contains(result.runner.as_str()) {
            return Err(unknown_key("runner", &result.runner));
        }
        if !race_keys.contains(result.race.as_str()) {
            return Err(unknown_key("race", &result.race));
        }
    }
    Ok(())
}

fn duplicate_key(kind: &str, key: &str) -> TrackerError {
    TrackerError::InvalidConfigValueError {
        field: format!("{}.key", kind),
        value: key.to_string(),
        reason: "Duplicate key".to_string(),
    }
}

fn unknown_key(kind: &str, key: &str) -> TrackerError {
    TrackerError::InvalidConfigValueError {
        field: format!("results.{}", kind),
        value: key.to_string(),
        reason: format!("No {} with this key in the seed file", kind),
    }
}
