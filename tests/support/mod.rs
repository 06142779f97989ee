#![allow(dead_code)]

use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for facnet
pub fn facnet() -> Command {
    cargo_bin_cmd!("facnet")
}

/// Initialize a store in `dir`
pub fn init_store(dir: &Path) {
    facnet().current_dir(dir).arg("init").assert().success();
}

/// Initialize a store holding the five-facility sample network:
/// capacities 1=10, 2=20, 3=40, 4=60, 5=80 and arcs
/// 1->2 (4), 1->3 (1), 3->2 (1), 2->4 (1), 4->5 (2)
pub fn seed_sample(dir: &Path) {
    init_store(dir);

    for (id, name, capacity) in [
        ("1", "Central", "10"),
        ("2", "Harbour", "20"),
        ("3", "Northgate", "40"),
        ("4", "Riverside", "60"),
        ("5", "Airport", "80"),
    ] {
        facnet()
            .current_dir(dir)
            .args([
                "facility",
                "add",
                "--id",
                id,
                "--name",
                name,
                "--capacity",
                capacity,
            ])
            .assert()
            .success();
    }

    for (from, to, distance) in [
        ("1", "2", "4"),
        ("1", "3", "1"),
        ("3", "2", "1"),
        ("2", "4", "1"),
        ("4", "5", "2"),
    ] {
        facnet()
            .current_dir(dir)
            .args([
                "link",
                "add",
                from,
                to,
                "--distance",
                distance,
                "--time",
                "10",
            ])
            .assert()
            .success();
    }
}

/// Parse stdout of a successful `--format json` run
pub fn json_stdout(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = facnet()
        .current_dir(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "command failed: {:?}", args);
    serde_json::from_slice(&output.stdout).unwrap()
}
