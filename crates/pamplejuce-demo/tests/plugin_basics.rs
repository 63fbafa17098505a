//! Basic checks against a live plugin instance and the packaged record.

use std::fs;
use std::path::PathBuf;

use pamplejuce_core::{check_version_record, Plugin, VersionCheck, VersionError, VERSION_FILE_NAME};
use pamplejuce_demo::{DemoPlugin, PLUGIN_NAME};

fn workspace_version_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(VERSION_FILE_NAME)
}

#[test]
fn plugin_reports_its_name() {
    let plugin = DemoPlugin::new();
    assert_eq!(plugin.name(), "Pamplejuce Demo");
}

#[test]
fn name_is_stable_across_calls_and_instances() {
    let first = DemoPlugin::new();
    let second = DemoPlugin::new();
    assert_eq!(first.name(), first.name());
    assert_eq!(first.name(), second.name());
    assert_eq!(second.name(), PLUGIN_NAME);
    assert_eq!(first.identity(), second.identity());
}

#[test]
fn plugin_version_matches_version_file() {
    let path = workspace_version_file();
    assert!(path.is_file(), "missing {}", path.display());

    let plugin = DemoPlugin::new();
    let check = plugin.check_version_record(&path).unwrap();
    assert!(check.is_match(), "{}", check);
}

#[test]
fn version_file_first_line_equals_reported_version() {
    let contents = fs::read_to_string(workspace_version_file()).unwrap();
    let first_line = contents.lines().next().unwrap_or("");
    assert_eq!(first_line, DemoPlugin::new().version());
}

#[test]
fn missing_record_fails_without_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let result = DemoPlugin::new().check_version_record(&dir.path().join(VERSION_FILE_NAME));
    assert!(matches!(result, Err(VersionError::ResourceUnavailable { .. })));
}

#[test]
fn drifted_record_reports_both_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(VERSION_FILE_NAME);
    let reported = DemoPlugin::new().version();
    let drifted = format!("{}-drift", reported);
    fs::write(&path, format!("{}\n", drifted)).unwrap();

    match check_version_record(&path, reported).unwrap() {
        VersionCheck::Mismatch { record, reported: got } => {
            assert_eq!(record, drifted);
            assert_eq!(got, reported);
        }
        VersionCheck::Match => panic!("drifted record should not match"),
    }
}

#[test]
fn demo_scenario_passes_identity_and_version_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(VERSION_FILE_NAME);
    fs::write(&path, "0.0.1").unwrap();

    assert_eq!(DemoPlugin::new().name(), "Pamplejuce Demo");
    assert!(check_version_record(&path, "0.0.1").unwrap().is_match());
}
