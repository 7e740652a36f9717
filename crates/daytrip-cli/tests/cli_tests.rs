use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn dt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dt").expect("Failed to find dt binary");
    cmd.arg("--no-color");
    cmd
}

/// Writes a small catalog file: a region with two children (one a hotel)
/// plus a standalone stop.
fn write_catalog(dir: &Path) -> String {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "parent_id": null, "name": "East Coast", "category": "region",
             "pricing_mode": "per_vehicle", "vehicle_prices": {}, "price_adult": 0.0,
             "price_child": 0.0, "price_infant": 0.0, "duration_minutes": 0},
            {"id": 2, "parent_id": 1, "name": "Sunrise Peak", "category": "sight",
             "pricing_mode": "per_vehicle", "vehicle_prices": {"minivan": 120.0},
             "price_adult": 0.0, "price_child": 0.0, "price_infant": 0.0,
             "duration_minutes": 90, "lat": 33.458, "lon": 126.942},
            {"id": 3, "parent_id": 1, "name": "Seaside Hotel", "category": "accommodation",
             "pricing_mode": "per_person", "vehicle_prices": {}, "price_adult": 80.0,
             "price_child": 40.0, "price_infant": 0.0, "duration_minutes": 0,
             "lat": 33.450, "lon": 126.918},
            {"id": 4, "parent_id": null, "name": "Folk Village", "category": "sight",
             "pricing_mode": "per_person", "vehicle_prices": {}, "price_adult": 15.0,
             "price_child": 8.0, "price_infant": 0.0, "duration_minutes": 60,
             "lat": 33.322, "lon": 126.631}
        ]"#,
    )
    .expect("Failed to write catalog file");
    path.to_str().unwrap().to_string()
}

fn write_route(dir: &Path) -> String {
    let path = dir.join("route.json");
    fs::write(
        &path,
        r#"{"total_distance_miles": 42.0, "total_duration_hours": 1.5,
            "leg_durations_secs": [1800, 1500, 2100]}"#,
    )
    .expect("Failed to write route file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_import_and_list_courses() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let catalog = write_catalog(temp_dir.path());

    dt_cmd()
        .args(["--database-file", db_arg, "course", "import", &catalog])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 courses."));

    dt_cmd()
        .args(["--database-file", db_arg, "course", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("East Coast (#1)"))
        .stdout(predicate::str::contains("  - Sunrise Peak (#2)"));
}

#[test]
fn test_cli_list_empty_itineraries() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dt_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "itinerary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved itineraries."));
}

#[test]
fn test_cli_select_derives_schedule() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let catalog = write_catalog(temp_dir.path());

    dt_cmd()
        .args(["--database-file", db_arg, "course", "import", &catalog])
        .assert()
        .success();

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "create", "Kim family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created itinerary with ID: 1"));

    // Selecting a child pulls the parent in, but only the leaf is scheduled
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "select", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunrise Peak (90 min)"));

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] East Coast (#1)"))
        .stdout(predicate::str::contains("[x] Sunrise Peak (#2)"))
        .stdout(predicate::str::contains("[ ] Seaside Hotel (#3)"));
}

#[test]
fn test_cli_route_and_auto_schedule() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let route = write_route(temp_dir.path());

    dt_cmd()
        .args(["--database-file", db_arg, "course", "import", &catalog])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "create", "Trip"])
        .assert()
        .success();
    for course in ["2", "3", "4"] {
        dt_cmd()
            .args(["--database-file", db_arg, "itinerary", "select", "1", course])
            .assert()
            .success();
    }

    // Auto-scheduling before a route exists is an error
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "auto", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("route"));

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "route", "1", &route])
        .assert()
        .success()
        .stdout(predicate::str::contains("42.0 miles"));

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "auto", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1일"));
}

#[test]
fn test_cli_vehicle_and_quote() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let catalog = write_catalog(temp_dir.path());

    dt_cmd()
        .args(["--database-file", db_arg, "course", "import", &catalog])
        .assert()
        .success();
    dt_cmd()
        .args([
            "--database-file",
            db_arg,
            "vehicle",
            "add",
            "Minivan",
            "--rate",
            "100",
            "--mpg",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved vehicle `minivan`."));

    dt_cmd()
        .args(["--database-file", db_arg, "vehicle", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minivan"));

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "create", "Quote trip"])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "select", "1", "4"])
        .assert()
        .success();
    dt_cmd()
        .args([
            "--database-file",
            db_arg,
            "itinerary",
            "pricing",
            "1",
            "--participants",
            "3",
            "--guide-fee",
            "50",
        ])
        .assert()
        .success();

    // 3 x $15 entrance + $100 rental + $50 guide = $195; 30% margin
    // then 15% tip on the selling price
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "quote", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrance fees: $45.00"))
        .stdout(predicate::str::contains("**Total cost**: $195.00"))
        .stdout(predicate::str::contains("Selling price: $278.57"))
        .stdout(predicate::str::contains("**Final price**: $320.36"));
}

#[test]
fn test_cli_template_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let catalog = write_catalog(temp_dir.path());

    dt_cmd()
        .args(["--database-file", db_arg, "course", "import", &catalog])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "create", "Original"])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "select", "1", "2"])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "template", "save", "east-day", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template `east-day`."));

    dt_cmd()
        .args(["--database-file", db_arg, "itinerary", "create", "Copy"])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "template", "apply", "east-day", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunrise Peak"));

    dt_cmd()
        .args(["--database-file", db_arg, "template", "rm", "east-day"])
        .assert()
        .success();
    dt_cmd()
        .args(["--database-file", db_arg, "template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates."));
}

#[test]
fn test_cli_unknown_itinerary_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    dt_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "itinerary",
            "show",
            "99",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}
