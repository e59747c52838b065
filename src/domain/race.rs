use chrono::{DateTime, Utc};

use crate::domain::ids::RaceId;
use crate::utils::error::{Result, TrackerError};

/// A race event (marathon, half-marathon, trail run, ...). Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    id: RaceId,
    name: String,
    location: String,
    date: DateTime<Utc>,
    distance_km: f64,
    elevation_gain: f64,
}

impl Race {
    pub fn new(
        name: &str,
        location: &str,
        date: DateTime<Utc>,
        distance_km: f64,
        elevation_gain: f64,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if location.is_empty() {
            return Err(TrackerError::EmptyLocation);
        }
        // A normal, positive distance keeps the derived pace finite.
        if !(distance_km.is_normal() && distance_km > 0.0) {
            return Err(TrackerError::InvalidDistance);
        }
        if !(elevation_gain.is_finite() && elevation_gain >= 0.0) {
            return Err(TrackerError::InvalidElevation);
        }

        Ok(Self {
            id: RaceId::new(),
            name: name.to_string(),
            location: location.to_string(),
            date,
            distance_km,
            elevation_gain,
        })
    }

    pub fn id(&self) -> RaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn elevation_gain(&self) -> f64 {
        self.elevation_gain
    }
}
