use thiserror::Error;

use crate::domain::ids::{RaceId, RunnerId};

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("location cannot be empty")]
    EmptyLocation,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("distance_km must be greater than 0")]
    InvalidDistance,

    #[error("elevation_gain cannot be negative")]
    InvalidElevation,

    #[error("runner ID cannot be empty")]
    EmptyRunnerId,

    #[error("race ID cannot be empty")]
    EmptyRaceId,

    #[error("finish time must be greater than zero")]
    InvalidFinishTime,

    #[error("pace must be greater than 0")]
    InvalidPace,

    #[error("heart_rate_avg must be greater than 0")]
    InvalidHeartRate,

    #[error("average heart rate must be positive")]
    InvalidAvgHeartRate,

    #[error("runner with ID {0} not found")]
    RunnerNotFound(RunnerId),

    #[error("race with ID {0} not found")]
    RaceNotFound(RaceId),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Notification error: {message}")]
    NotificationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-fixable input problems.
    Validation,
    NotFound,
    Storage,
    Notification,
    Configuration,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::EmptyName
            | TrackerError::EmptyLocation
            | TrackerError::InvalidEmail
            | TrackerError::InvalidDistance
            | TrackerError::InvalidElevation
            | TrackerError::EmptyRunnerId
            | TrackerError::EmptyRaceId
            | TrackerError::InvalidFinishTime
            | TrackerError::InvalidPace
            | TrackerError::InvalidHeartRate
            | TrackerError::InvalidAvgHeartRate => ErrorCategory::Validation,
            TrackerError::RunnerNotFound(_) | TrackerError::RaceNotFound(_) => {
                ErrorCategory::NotFound
            }
            TrackerError::StorageError { .. } => ErrorCategory::Storage,
            TrackerError::NotificationError { .. } => ErrorCategory::Notification,
            TrackerError::IoError(_)
            | TrackerError::SerializationError(_)
            | TrackerError::ConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Storage | ErrorCategory::Notification => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
