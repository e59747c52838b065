use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::ids::{RaceId, ResultId, RunnerId};
use crate::utils::error::{Result, TrackerError};

/// One runner's logged outcome for one race.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    id: ResultId,
    runner_id: RunnerId,
    race_id: RaceId,
    finish_time: Duration,
    pace: f64, // min/km
    heart_rate_avg: i32,
    notes: String,
    logged_at: DateTime<Utc>,
}

impl RaceResult {
    pub fn new(
        runner_id: RunnerId,
        race_id: RaceId,
        finish_time: Duration,
        pace: f64,
        heart_rate_avg: i32,
        notes: &str,
    ) -> Result<Self> {
        if runner_id.is_nil() {
            return Err(TrackerError::EmptyRunnerId);
        }
        if race_id.is_nil() {
            return Err(TrackerError::EmptyRaceId);
        }
        if finish_time.is_zero() {
            return Err(TrackerError::InvalidFinishTime);
        }
        if !(pace.is_finite() && pace > 0.0) {
            return Err(TrackerError::InvalidPace);
        }
        if heart_rate_avg <= 0 {
            return Err(TrackerError::InvalidHeartRate);
        }

        Ok(Self {
            id: ResultId::new(),
            runner_id,
            race_id,
            finish_time,
            pace,
            heart_rate_avg,
            notes: notes.to_string(),
            logged_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ResultId {
        self.id
    }

    pub fn runner_id(&self) -> RunnerId {
        self.runner_id
    }

    pub fn race_id(&self) -> RaceId {
        self.race_id
    }

    pub fn finish_time(&self) -> Duration {
        self.finish_time
    }

    pub fn pace(&self) -> f64 {
        self.pace
    }

    pub fn heart_rate_avg(&self) -> i32 {
        self.heart_rate_avg
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}
