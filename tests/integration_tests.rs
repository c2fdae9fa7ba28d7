use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_visits, login, setup_test_db, slog};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_pin_and_list_visits() {
    let db_path = setup_test_db("pin_and_list");
    init_db(&db_path);

    slog()
        .args([
            "--db", &db_path, "--test", "pin", "Manila", "--lat", "14.5995", "--lng", "120.9842",
        ])
        .assert()
        .success()
        .stdout(contains("Pinned Manila"))
        .stdout(contains("showing-pinned"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "visits"])
        .assert()
        .success()
        .stdout(contains("Manila"))
        .stdout(contains("14.5995"));
}

#[test]
fn test_pin_with_geocoder_address() {
    let db_path = setup_test_db("pin_address");
    init_db(&db_path);

    // No city component: the label falls back to the town.
    let address = r#"{"town":"Taal","state":"Batangas","country":"Philippines"}"#;

    slog()
        .args(["--db", &db_path, "--test", "pin", "--address", address])
        .assert()
        .success()
        .stdout(contains("Pinned Taal"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "visits"])
        .assert()
        .success()
        .stdout(contains("Taal"));
}

#[test]
fn test_unpin_returns_to_default_view() {
    let db_path = setup_test_db("unpin_default_view");
    init_db(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "pin", "Manila"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "--test", "unpin"])
        .assert()
        .success()
        .stdout(contains("Pin cleared"))
        .stdout(contains("showing-default"));

    // A second unpin has nothing to clear.
    slog()
        .args(["--db", &db_path, "--test", "unpin"])
        .assert()
        .success()
        .stdout(contains("Nothing pinned"));
}

#[test]
fn test_stats_by_city_counts_and_order() {
    let db_path = setup_test_db("stats_by_city");
    init_db_with_visits(&db_path); // 3x Manila, 1x Cebu

    let output = slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "city"])
        .assert()
        .success()
        .stdout(contains("Manila"))
        .stdout(contains("Cebu"));

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let manila = stdout.find("Manila").expect("Manila row");
    let cebu = stdout.find("Cebu").expect("Cebu row");
    assert!(manila < cebu, "Manila (3) must be listed before Cebu (1)");
}

#[test]
fn test_stats_on_empty_log_shows_sentinel() {
    let db_path = setup_test_db("stats_empty");
    init_db(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "city"])
        .assert()
        .success()
        .stdout(contains("No data yet"));

    slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "month"])
        .assert()
        .success()
        .stdout(contains("No data yet"));
}

#[test]
fn test_stats_by_month_lists_current_month() {
    let db_path = setup_test_db("stats_by_month");
    init_db_with_visits(&db_path);

    let label = chrono::Local::now().format("%b %Y").to_string();

    slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "month"])
        .assert()
        .success()
        .stdout(contains(label))
        .stdout(contains("4"));
}

#[test]
fn test_stats_invalid_grouping() {
    let db_path = setup_test_db("stats_invalid_grouping");
    init_db(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "week"])
        .assert()
        .failure()
        .stderr(contains("Invalid grouping"));
}

#[test]
fn test_report_requires_session() {
    let db_path = setup_test_db("report_requires_session");
    init_db(&db_path);

    slog()
        .args([
            "--db",
            &db_path,
            "--test",
            "report",
            "Flood Warning",
            "--city",
            "Manila",
        ])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_report_and_list_emergencies() {
    let db_path = setup_test_db("report_and_list");
    init_db(&db_path);
    login(&db_path, "alice");

    slog()
        .args([
            "--db",
            &db_path,
            "--test",
            "report",
            "Flood Warning",
            "--severity",
            "high",
            "--city",
            "Manila",
            "--lat",
            "14.6",
            "--lng",
            "121.0",
            "--details",
            "River levels expected to exceed flood stage",
        ])
        .assert()
        .success()
        .stdout(contains("Reported Flood Warning"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "emergencies"])
        .assert()
        .success()
        .stdout(contains("Flood Warning"))
        .stdout(contains("High"))
        .stdout(contains("Manila"));
}

#[test]
fn test_report_without_severity_uses_config_default() {
    let db_path = setup_test_db("report_default_severity");
    init_db(&db_path);
    login(&db_path, "alice");

    slog()
        .args([
            "--db",
            &db_path,
            "--test",
            "report",
            "Power Outage",
            "--city",
            "Cebu",
        ])
        .assert()
        .success()
        .stdout(contains("Moderate"));
}

#[test]
fn test_duplicate_reports_are_deduplicated() {
    let db_path = setup_test_db("report_dedup");
    init_db(&db_path);
    login(&db_path, "alice");

    for _ in 0..2 {
        slog()
            .args([
                "--db",
                &db_path,
                "--test",
                "report",
                "Flood Warning",
                "--city",
                "Manila",
                "--lat",
                "14.6",
                "--lng",
                "121.0",
            ])
            .assert()
            .success();
    }

    let output = slog()
        .args(["--db", &db_path, "--test", "stats", "--by", "city", "--category", "emergencies"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let manila_line = stdout
        .lines()
        .find(|l| l.contains("Manila"))
        .expect("Manila row");
    assert!(
        manila_line.contains('1') && !manila_line.contains('2'),
        "duplicate pin must collapse to a single record: {}",
        manila_line
    );
}

#[test]
fn test_clear_drops_category() {
    let db_path = setup_test_db("clear_category");
    init_db_with_visits(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "clear", "--category", "visits"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Cleared"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "visits"])
        .assert()
        .success()
        .stdout(contains("No visited locations"));
}

#[test]
fn test_clear_can_be_cancelled() {
    let db_path = setup_test_db("clear_cancelled");
    init_db_with_visits(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "visits"])
        .assert()
        .success()
        .stdout(contains("Manila"));
}

#[test]
fn test_logout_clears_activity_logs() {
    let db_path = setup_test_db("logout_clears");
    init_db(&db_path);
    login(&db_path, "alice");

    slog()
        .args(["--db", &db_path, "--test", "pin", "Manila"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("Signed out"));

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "visits"])
        .assert()
        .success()
        .stdout(contains("No visited locations"));
}

#[test]
fn test_invalid_category_is_rejected() {
    let db_path = setup_test_db("invalid_category");
    init_db(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "list", "--category", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));
}

#[test]
fn test_operation_log_records_activity() {
    let db_path = setup_test_db("oplog_records");
    init_db(&db_path);
    login(&db_path, "alice");

    slog()
        .args(["--db", &db_path, "--test", "pin", "Manila"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("login"))
        .stdout(contains("pin"))
        .stdout(contains("Manila"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_visits(&db_path);

    slog()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    slog()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Visited locations"))
        .stdout(contains("4"));

    slog()
        .args(["--db", &db_path, "--test", "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    slog()
        .args(["--db", &db_path, "--test", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));
}

#[test]
fn test_list_unknown_db_without_init_fails_gracefully() {
    let db_path = setup_test_db("no_init");

    // Opening a never-initialized database has no tables to read.
    slog()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .failure()
        .stderr(contains("Error").or(contains("error")));
}
