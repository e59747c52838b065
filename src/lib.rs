pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleNotificationService, InMemoryRaceRepository, InMemoryRunnerRepository};
pub use app::import::{ImportReport, SeedImporter};
pub use app::race_service::{RaceService, ResultItem};
pub use app::runner_service::RunnerService;
pub use app::Services;
pub use config::seed::SeedFile;
pub use config::toml_config::TrackerConfig;
pub use domain::ids::{RaceId, ResultId, RunnerId};
pub use utils::error::{Result, TrackerError};
