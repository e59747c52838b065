mod common;

use common::RecordingNotifier;
use race_tracker::{
    InMemoryRaceRepository, InMemoryRunnerRepository, SeedFile, SeedImporter, Services,
    TrackerError,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const SEED: &str = r#"
[[runners]]
key = "john"
name = "John Doe"
email = "john.doe@example.com"

[[runners]]
key = "jane"
name = "Jane Roe"
email = "jane.roe@example.com"

[[races]]
key = "city10k"
name = "City 10k"
location = "Athens"
date = "2024-04-14T08:00:00Z"
distance_km = 10.0
elevation_gain = 45.0

[[races]]
key = "hill5k"
name = "Hill 5k"
location = "Delphi"
date = "2024-05-01T09:30:00Z"
distance_km = 5.0
elevation_gain = 210.0

[[results]]
runner = "john"
race = "city10k"
finish_time_ms = 1800000
heart_rate_avg = 162
notes = "Negative split"

[[results]]
runner = "john"
race = "hill5k"
finish_time_ms = 1500000
heart_rate_avg = 170
"#;

fn services(
    notifier: Arc<RecordingNotifier>,
) -> Services<InMemoryRunnerRepository, InMemoryRaceRepository, Arc<RecordingNotifier>> {
    Services::new(
        InMemoryRunnerRepository::new(),
        InMemoryRaceRepository::new(),
        notifier,
    )
}

#[tokio::test]
async fn test_import_seed_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();
    let seed = SeedFile::from_file(file.path()).unwrap();

    let notifier = Arc::new(RecordingNotifier::new());
    let services = services(notifier.clone());
    let report = SeedImporter::new(&services).import(&seed).await.unwrap();

    assert_eq!(report.races_created, 2);
    assert_eq!(report.results_logged, 2);
    assert_eq!(report.runners.len(), 2);
    assert_eq!(notifier.sent().len(), 2);

    let john = &report.runners[0];
    assert_eq!(john.name, "John Doe");
    assert_eq!(john.results.len(), 2);
    assert_eq!(john.results[0].pace, 3.0);
    assert_eq!(john.results[0].notes, "Negative split");
    assert_eq!(john.results[1].pace, 5.0);

    let jane = &report.runners[1];
    assert_eq!(jane.name, "Jane Roe");
    assert!(jane.results.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["runners"][0]["results"][0]["finish_time_ms"], 1_800_000);
}

#[tokio::test]
async fn test_unknown_race_key_is_rejected() {
    let seed = SeedFile::from_toml_str(
        r#"
[[runners]]
key = "john"
name = "John Doe"
email = "john.doe@example.com"

[[results]]
runner = "john"
race = "nowhere"
finish_time_ms = 1000
heart_rate_avg = 120
"#,
    )
    .unwrap();

    let notifier = Arc::new(RecordingNotifier::new());
    let services = services(notifier.clone());
    let err = SeedImporter::new(&services).import(&seed).await.unwrap_err();

    assert!(matches!(err, TrackerError::InvalidConfigValueError { ref value, .. } if value == "nowhere"));
    assert!(services.runners.list_runners().await.unwrap().is_empty());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_duplicate_runner_key_is_rejected() {
    let seed = SeedFile::from_toml_str(
        r#"
[[runners]]
key = "john"
name = "John Doe"
email = "john.doe@example.com"

[[runners]]
key = "john"
name = "John Again"
email = "john.again@example.com"
"#,
    )
    .unwrap();

    let notifier = Arc::new(RecordingNotifier::new());
    let services = services(notifier.clone());
    let err = SeedImporter::new(&services).import(&seed).await.unwrap_err();

    assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    assert!(services.runners.list_runners().await.unwrap().is_empty());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_service_errors_propagate_unchanged() {
    let seed = SeedFile::from_toml_str(
        r#"
[[runners]]
key = "john"
name = "John Doe"
email = "not-an-email"
"#,
    )
    .unwrap();

    let services = services(Arc::new(RecordingNotifier::new()));
    let err = SeedImporter::new(&services).import(&seed).await.unwrap_err();

    assert!(matches!(err, TrackerError::InvalidEmail));
}
