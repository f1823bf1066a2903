//! Integration tests for loading profiles from disk

use std::fs;

use sensewise_core::{time::MockTimeSource, BatteryStatus};
use sensewise_profiles::{EstimatorFactory, ProfileError, ProfileRegistry};

#[test]
fn load_file_uses_stem_as_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coin_cell.json");
    fs::write(&path, r#"{ "battery": { "low_threshold": 35.0, "critical_threshold": 15.0 } }"#).unwrap();

    let registry = ProfileRegistry::new();
    assert_eq!(registry.load_file(&path).unwrap(), "coin_cell");

    let profile = registry.get("coin_cell").unwrap();
    let clock = MockTimeSource::new(0);
    let mut battery = profile.battery_inference(&clock).unwrap();
    battery.validate_battery(30.0);
    assert_eq!(battery.status(), BatteryStatus::Low);
}

#[test]
fn load_dir_skips_other_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("attic.json"), r#"{ "climate": { "jump_penalty": 5.0 } }"#).unwrap();
    fs::write(dir.path().join("cellar.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a profile").unwrap();

    let registry = ProfileRegistry::new();
    let names = registry.load_dir(dir.path()).unwrap();

    assert_eq!(names, vec!["attic", "cellar"]);
    assert_eq!(registry.get("attic").unwrap().climate.jump_penalty, 5.0);
}

#[test]
fn file_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ProfileRegistry::new();

    let missing = registry.load_file(dir.path().join("absent.json"));
    assert!(matches!(missing, Err(ProfileError::Io(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(registry.load_file(&broken), Err(ProfileError::Parse(_))));

    let invalid = dir.path().join("inverted.json");
    fs::write(&invalid, r#"{ "soil": { "dry_threshold_pct": 90.0, "wet_threshold_pct": 10.0 } }"#).unwrap();
    assert!(matches!(registry.load_file(&invalid), Err(ProfileError::Invalid { .. })));

    let badly_named = dir.path().join("Living Room.json");
    fs::write(&badly_named, "{}").unwrap();
    assert!(matches!(registry.load_file(&badly_named), Err(ProfileError::InvalidName(_))));

    assert!(registry.names().unwrap().is_empty());
}

#[test]
fn file_profile_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("indoor.json");
    fs::write(&path, r#"{ "motion": { "hold_time_ms": 120000 } }"#).unwrap();

    let registry = ProfileRegistry::with_builtins().unwrap();
    registry.load_file(&path).unwrap();

    assert_eq!(registry.get("indoor").unwrap().motion.hold_time_ms, 120_000);
    assert_eq!(registry.names().unwrap().len(), 4);
}
