use crate::utils::error::{Result, TrackerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runners, races and results to replay through the services.
///
/// Entries reference each other by `key`, which only lives inside the file;
/// the importer maps keys to the ids the services hand out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub runners: Vec<SeedRunner>,
    #[serde(default)]
    pub races: Vec<SeedRace>,
    #[serde(default)]
    pub results: Vec<SeedResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRunner {
    pub key: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRace {
    pub key: String,
    pub name: String,
    pub location: String,
    /// RFC 3339 text, quoted (`date = "2024-04-14T08:00:00Z"`).
    pub date: DateTime<Utc>,
    pub distance_km: f64,
    #[serde(default)]
    pub elevation_gain: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResult {
    pub runner: String,
    pub race: String,
    pub finish_time_ms: u64,
    pub heart_rate_avg: i32,
    #[serde(default)]
    pub notes: String,
}

impl SeedFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrackerError::ConfigError {
            message: format!("Seed parsing error: {}", e),
        })
    }
}
