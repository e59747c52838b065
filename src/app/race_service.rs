use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::domain::ids::{RaceId, ResultId, RunnerId};
use crate::domain::ports::RaceRepository;
use crate::domain::race::Race;
use crate::domain::race_result::RaceResult;
use crate::utils::error::{Result, TrackerError};

/// Flat projection of a logged result, as handed out to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultItem {
    pub id: ResultId,
    pub runner_id: RunnerId,
    pub race_id: RaceId,
    #[serde(rename = "finish_time_ms", serialize_with = "serialize_millis")]
    pub finish_time: Duration,
    pub pace: f64, // min/km
    pub heart_rate_avg: i32,
    pub notes: String,
}

impl From<&RaceResult> for ResultItem {
    fn from(result: &RaceResult) -> Self {
        Self {
            id: result.id(),
            runner_id: result.runner_id(),
            race_id: result.race_id(),
            finish_time: result.finish_time(),
            pace: result.pace(),
            heart_rate_avg: result.heart_rate_avg(),
            notes: result.notes().to_string(),
        }
    }
}

fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Pace in minutes per kilometre.
pub fn pace_min_per_km(finish_time: Duration, distance_km: f64) -> f64 {
    (finish_time.as_secs_f64() / 60.0) / distance_km
}

/// Race use cases: creating races, logging and reading results.
pub struct RaceService<R: RaceRepository> {
    repo: R,
}

impl<R: RaceRepository> RaceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_race(
        &self,
        name: &str,
        location: &str,
        date: DateTime<Utc>,
        distance_km: f64,
        elevation_gain: f64,
    ) -> Result<RaceId> {
        let race = Race::new(name, location, date, distance_km, elevation_gain)?;
        self.repo.save_race(&race).await?;

        tracing::info!(race_id = %race.id(), "Race created: {}", race.name());
        Ok(race.id())
    }

    /// Logs a result for a runner, deriving the pace from the race distance.
    pub async fn add_result(
        &self,
        runner_id: RunnerId,
        race_id: RaceId,
        finish_time: Duration,
        avg_heart_rate: i32,
        notes: &str,
    ) -> Result<ResultId> {
        // Reject bad input before touching storage.
        if runner_id.is_nil() {
            return Err(TrackerError::EmptyRunnerId);
        }
        if race_id.is_nil() {
            return Err(TrackerError::EmptyRaceId);
        }
        if finish_time.is_zero() {
            return Err(TrackerError::InvalidFinishTime);
        }
        if avg_heart_rate <= 0 {
            return Err(TrackerError::InvalidAvgHeartRate);
        }

        let race = self.repo.get_race(race_id).await?;
        let pace = pace_min_per_km(finish_time, race.distance_km());

        let result = RaceResult::new(runner_id, race_id, finish_time, pace, avg_heart_rate, notes)?;
        self.repo.save_race_result(&result).await?;

        tracing::info!(
            result_id = %result.id(),
            runner_id = %runner_id,
            race_id = %race_id,
            "Result logged, pace {:.2} min/km",
            pace
        );
        Ok(result.id())
    }

    pub async fn get_results(&self, runner_id: RunnerId) -> Result<Vec<ResultItem>> {
        if runner_id.is_nil() {
            return Err(TrackerError::EmptyRunnerId);
        }

        let results = self.repo.get_race_results(runner_id).await?;
        tracing::debug!(runner_id = %runner_id, "Fetched {} results", results.len());

        Ok(results.iter().map(ResultItem::from).collect())
    }
}
