use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rpc, setup_test_db};

#[test]
fn test_list_single_date() {
    let db_path = setup_test_db("list_single_date");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "list", "--date", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("Breakfast"))
        .stdout(contains("Vaccination"))
        .stdout(contains("2 tasks"));
}

#[test]
fn test_list_empty_date() {
    let db_path = setup_test_db("list_empty_date");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "list", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("No tasks found"));
}

#[test]
fn test_list_category_filter() {
    let db_path = setup_test_db("list_category");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "list", "--period", "2025-03", "--category", "vet"])
        .assert()
        .success()
        .stdout(contains("Vaccination").and(contains("Breakfast").not()));
}

#[test]
fn test_list_period_range() {
    let db_path = setup_test_db("list_range");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "list", "--period", "2025-03-13:2025-03-20"])
        .assert()
        .success()
        .stdout(contains("2025-03-13"))
        .stdout(contains("2025-03-14"))
        .stdout(contains("2025-03-15").not());
}

#[test]
fn test_mixed_period_shapes_rejected_by_list_and_export() {
    let db_path = setup_test_db("mixed_period");
    init_db_with_data(&db_path);
    let out = common::temp_out("mixed_period", "csv");

    rpc()
        .args(["--db", &db_path, "list", "--period", "2025:2025-03"])
        .assert()
        .failure()
        .stderr(contains("same format"));

    rpc()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "2025:2025-03", "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("same format"));
}

#[test]
fn test_calendar_marks_days() {
    let db_path = setup_test_db("calendar_marks");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "calendar", "--month", "2025-03", "--day", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("March 2025"))
        .stdout(contains("5(2/2)"))
        .stdout(contains("Vaccination"));
}

#[test]
fn test_calendar_empty_month() {
    let db_path = setup_test_db("calendar_empty");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "calendar", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(contains("July 2025"))
        .stdout(contains("No tasks scheduled this month"));
}

#[test]
fn test_calendar_invalid_month() {
    let db_path = setup_test_db("calendar_invalid");
    init_db_with_data(&db_path);

    rpc()
        .args(["--db", &db_path, "calendar", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_today_runs_on_empty_db() {
    let db_path = setup_test_db("today_empty");
    common::init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("Nothing scheduled for today"));
}

#[test]
fn test_today_all_done_with_completed_hidden() {
    let db_path = setup_test_db("today_all_done");
    common::init_db(&db_path);

    let home = std::env::temp_dir().join("today_all_done_home");
    let conf_dir = home.join(".rpetcare");
    std::fs::create_dir_all(&conf_dir).expect("config dir");
    std::fs::write(
        conf_dir.join("rpetcare.conf"),
        format!("database: {db_path}\nshow_completed: false\n"),
    )
    .expect("config file");

    rpc()
        .args(["--db", &db_path, "add", "Evening walk", "--category", "walk"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let id: i64 = conn
        .query_row("SELECT id FROM tasks", [], |r| r.get(0))
        .expect("task id");
    drop(conn);

    rpc()
        .args(["--db", &db_path, "done", &id.to_string()])
        .assert()
        .success();

    rpc()
        .env("HOME", &home)
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("All 1 task done for today."))
        .stdout(contains("0 tasks").not())
        .stdout(contains("Evening walk").not());
}
