//! Integration tests for the facnet CLI: store setup, record management
//! and error reporting.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{facnet, init_store, json_stdout, seed_sample};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    facnet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: facnet"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("all-pairs"));
}

#[test]
fn test_version_flag() {
    facnet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("facnet"));
}

#[test]
fn test_no_command_prints_banner() {
    facnet()
        .assert()
        .success()
        .stdout(predicate::str::contains("facnet --help"));
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    facnet()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized facnet store"));

    let store = dir.path().join(".facnet");
    assert!(store.join("facilities.csv").exists());
    assert!(store.join("connections.csv").exists());

    let config: toml::Value =
        toml::from_str(&fs::read_to_string(store.join("config.toml")).unwrap()).unwrap();
    assert_eq!(config["version"].as_integer(), Some(1));
    assert_eq!(config["max_node_id"].as_integer(), Some(999));
    assert_eq!(config["symmetric"].as_bool(), Some(false));
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Existing data survives a second init
    facnet()
        .current_dir(dir.path())
        .args(["facility", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airport"));
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();
    let value = json_stdout(dir.path(), &["init"]);
    assert_eq!(value["status"], "ok");
    assert!(value["store"].as_str().unwrap().ends_with(".facnet"));
}

#[test]
fn test_explicit_store_path() {
    let dir = tempdir().unwrap();

    facnet()
        .current_dir(dir.path())
        .args(["--store", "data/net", "init"])
        .assert()
        .success();
    assert!(dir.path().join("data/net/config.toml").exists());

    facnet()
        .current_dir(dir.path())
        .args([
            "--store",
            "data/net",
            "facility",
            "add",
            "--id",
            "1",
            "--name",
            "Depot",
            "--capacity",
            "5",
        ])
        .assert()
        .success();

    let facilities = fs::read_to_string(dir.path().join("data/net/facilities.csv")).unwrap();
    assert!(facilities.contains("1,Depot,"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());
    let nested = dir.path().join("reports/2024");
    fs::create_dir_all(&nested).unwrap();

    facnet()
        .current_dir(&nested)
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3 -> 2 -> 4 -> 5"));
}

#[test]
fn test_missing_store_is_data_error() {
    let dir = tempdir().unwrap();

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

// ============================================================================
// Facilities
// ============================================================================

#[test]
fn test_facility_add_and_list() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    facnet()
        .current_dir(dir.path())
        .args([
            "facility",
            "add",
            "--id",
            "7",
            "--name",
            "Depot",
            "--district",
            "East",
            "--lat",
            "-1.5",
            "--lon",
            "36.8",
            "--capacity",
            "25",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added facility 7 Depot"));

    facnet()
        .current_dir(dir.path())
        .args(["--format", "records", "facility", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=facility.list count=1"))
        .stdout(predicate::str::contains(
            "F 7 capacity=25 district=\"East\" lat=-1.5 lon=36.8 \"Depot\"",
        ));

    let list = json_stdout(dir.path(), &["facility", "list"]);
    assert_eq!(list[0]["id"], 7);
    assert_eq!(list[0]["capacity"], 25);
}

#[test]
fn test_facility_add_duplicate_id() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "add", "--id", "3", "--name", "Again", "--capacity", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("facility already exists: 3"));
}

#[test]
fn test_facility_id_above_bound() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "add", "--id", "1000", "--name", "Far", "--capacity", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maximum is 999"));
}

#[test]
fn test_facility_name_with_comma_rejected() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "add", "--id", "1", "--name", "Depot, East", "--capacity", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("commas"));

    let facilities = fs::read_to_string(dir.path().join(".facnet/facilities.csv")).unwrap();
    assert_eq!(facilities.lines().count(), 1);
}

#[test]
fn test_facility_edit_changes_routing() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "edit", "2", "--capacity", "90", "--name", "Harbour Yard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated facility 2 Harbour Yard"));

    let value = json_stdout(dir.path(), &["route", "1", "--min-capacity", "85"]);
    assert_eq!(value["status"], "found");
    assert_eq!(value["id"], 2);
    assert_eq!(value["distance"], 2.0);
}

#[test]
fn test_facility_edit_unknown() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "edit", "4", "--capacity", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown facility: 4"));
}

#[test]
fn test_edit_without_changes_is_usage_error() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "edit", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to change"));

    facnet()
        .current_dir(dir.path())
        .args(["link", "edit", "1", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_facility_remove_cascades_connections() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["facility", "remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed facility 3 Northgate (2 connections)"));

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 4 -> 5"))
        .stdout(predicate::str::contains("Distance: 7 km"));

    let connections = fs::read_to_string(dir.path().join(".facnet/connections.csv")).unwrap();
    assert_eq!(connections.lines().count(), 4);
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_link_add_unknown_endpoint() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["link", "add", "1", "42", "--distance", "3", "--time", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown facility: 42"));
}

#[test]
fn test_link_add_negative_distance_rejected() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["link", "add", "1", "5", "--distance=-3", "--time", "5"])
        .assert()
        .code(2);
}

#[test]
fn test_link_add_both_directions() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args([
            "link", "add", "5", "3", "--distance", "2.5", "--time", "7", "--label", "bypass",
            "--both",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added connection 5 -> 3"))
        .stdout(predicate::str::contains("Added connection 3 -> 5"));

    facnet()
        .current_dir(dir.path())
        .args(["--format", "records", "link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=link.list count=7"))
        .stdout(predicate::str::contains("C 3 5 distance=2.5 time=7 \"bypass\""));

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3 -> 5"))
        .stdout(predicate::str::contains("Distance: 3.5 km"));
}

#[test]
fn test_link_add_both_keeps_existing_reverse() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    // 1 -> 2 is already in the sample network
    facnet()
        .current_dir(dir.path())
        .args(["link", "add", "2", "1", "--distance", "4", "--time", "10", "--both"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added connection 2 -> 1"))
        .stdout(predicate::str::contains("Added connection 1 -> 2").not());

    facnet()
        .current_dir(dir.path())
        .args(["--format", "records", "link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=link.list count=6"));
}

#[test]
fn test_link_edit_distance() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["link", "edit", "1", "2", "--distance", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 connection(s) 1 -> 2"));

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 4"))
        .stdout(predicate::str::contains("Distance: 1.5 km"));
}

#[test]
fn test_link_remove() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["link", "remove", "4", "5"])
        .assert()
        .success();

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 5"));

    facnet()
        .current_dir(dir.path())
        .args(["link", "remove", "4", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("connection not found: 4 -> 5"));
}

#[test]
fn test_symmetric_store_mirrors_links() {
    let dir = tempdir().unwrap();
    init_store(dir.path());
    let config_path = dir.path().join(".facnet/config.toml");
    let config = fs::read_to_string(&config_path)
        .unwrap()
        .replace("symmetric = false", "symmetric = true");
    fs::write(&config_path, config).unwrap();

    for id in ["1", "2", "3"] {
        facnet()
            .current_dir(dir.path())
            .args(["facility", "add", "--id", id, "--name", "Site", "--capacity", "1"])
            .assert()
            .success();
    }
    facnet()
        .current_dir(dir.path())
        .args(["link", "add", "1", "2", "--distance", "1", "--time", "1"])
        .assert()
        .success();
    facnet()
        .current_dir(dir.path())
        .args(["link", "add", "2", "3", "--distance", "1", "--time", "1"])
        .assert()
        .success();

    // Mirrored arcs make 3 -> 1 reachable
    facnet()
        .current_dir(dir.path())
        .args(["path", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 2 -> 1"));

    // A path is not a cycle once arcs are read as undirected
    facnet()
        .current_dir(dir.path())
        .arg("cycle")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cycle (undirected)"));

    facnet()
        .current_dir(dir.path())
        .args(["link", "remove", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 connection(s)"));
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_export_default_relationship_table() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 connections"));

    let table = fs::read_to_string(dir.path().join("relationship_table.csv")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "FromID,ToID,DistanceKM,TimeMinutes,Description");
    assert_eq!(lines.len(), 6);
    assert!(lines.contains(&"1,3,1,10,"));
}

#[test]
fn test_export_to_custom_path() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let value = json_stdout(dir.path(), &["export", "--output", "out/links.csv"]);
    assert_eq!(value["connections"], 5);
    let table = fs::read_to_string(dir.path().join("out/links.csv")).unwrap();
    assert!(table.contains("4,5,2,10,"));
}

#[test]
fn test_malformed_records_skipped_with_warning() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let path = dir.path().join(".facnet/connections.csv");
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("not,a,connection\n");
    fs::write(&path, content).unwrap();

    facnet()
        .current_dir(dir.path())
        .args(["path", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 5 km"))
        .stderr(predicate::str::contains("skipping connection record"));
}

// ============================================================================
// Error reporting and logging
// ============================================================================

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let output = facnet()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "1", "99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "unknown_node");
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["message"], "unknown facility: 99");
}

#[test]
fn test_json_usage_error_envelope() {
    let output = facnet()
        .args(["--format", "json", "path", "one", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format_rejected() {
    facnet()
        .args(["--format", "yaml", "cycle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_quiet_suppresses_errors() {
    let dir = tempdir().unwrap();

    facnet()
        .current_dir(dir.path())
        .args(["--quiet", "bfs", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_level_debug_emits_phases() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    facnet()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "path", "1", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_verbose_times_every_query() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let cases: [(&[&str], &str); 3] = [
        (&["cycle"], "detect_cycle"),
        (&["mst"], "minimum_spanning_tree"),
        (&["bfs", "1"], "bfs_traverse"),
    ];
    for (args, phase) in cases {
        let output = facnet()
            .current_dir(dir.path())
            .args(["--verbose", "--log-json"])
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        let timed = stderr
            .lines()
            .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
            .any(|line| {
                line["fields"]["message"] == phase && line["fields"].get("elapsed").is_some()
            });
        assert!(timed, "no elapsed event for {}:\n{}", phase, stderr);
    }
}

#[test]
fn test_log_json_lines() {
    let dir = tempdir().unwrap();
    seed_sample(dir.path());

    let output = facnet()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "cycle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
