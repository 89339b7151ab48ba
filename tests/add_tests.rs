use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_tasks, init_db, rpc, setup_test_db};

#[test]
fn test_add_weekly_creates_eight_instances() {
    let db_path = setup_test_db("add_weekly");
    init_db(&db_path);

    rpc()
        .args([
            "--db",
            &db_path,
            "add",
            "Nail trim",
            "--date",
            "2025-01-06",
            "--category",
            "grooming",
            "--recur",
            "7d",
        ])
        .assert()
        .success()
        .stdout(contains("8 of 8 instances created"))
        .stdout(contains("from 2025-01-06 to 2025-02-24"));

    assert_eq!(count_tasks(&db_path), 8);
}

#[test]
fn test_add_single_task() {
    let db_path = setup_test_db("add_single");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "add", "Vet checkup", "--date", "2025-04-10", "--category", "vet"])
        .assert()
        .success()
        .stdout(contains("1 of 1 instances created"));

    assert_eq!(count_tasks(&db_path), 1);
}

#[test]
fn test_add_monthly_from_month_end() {
    let db_path = setup_test_db("add_month_end");
    init_db(&db_path);

    rpc()
        .args([
            "--db",
            &db_path,
            "add",
            "Flea treatment",
            "--date",
            "2024-01-31",
            "--category",
            "medication",
            "--recur",
            "every month",
        ])
        .assert()
        .success()
        .stdout(contains("12 of 12 instances created"));

    // Day 31 rolls over into the following month.
    rpc()
        .args(["--db", &db_path, "list", "--period", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-02"))
        .stdout(contains("2024-03-31"));
}

#[test]
fn test_add_invalid_rule_writes_nothing() {
    let db_path = setup_test_db("add_bad_rule");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "add", "Walk", "--date", "2025-01-01", "--recur", "fortnightly"])
        .assert()
        .failure()
        .stderr(contains("Invalid recurrence rule"));

    assert_eq!(count_tasks(&db_path), 0);
}

#[test]
fn test_add_invalid_date_and_time() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "add", "Walk", "--date", "2025-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rpc()
        .args(["--db", &db_path, "add", "Walk", "--date", "2025-02-01", "--time", "7pm"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    assert_eq!(count_tasks(&db_path), 0);
}

#[test]
fn test_add_unknown_category_requires_flag() {
    let db_path = setup_test_db("add_custom_category");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "add", "Agility", "--date", "2025-05-01", "--category", "training"])
        .assert()
        .failure()
        .stderr(contains("unknown category"));

    rpc()
        .args([
            "--db",
            &db_path,
            "add",
            "Agility",
            "--date",
            "2025-05-01",
            "--category",
            "training",
            "--new-category",
        ])
        .assert()
        .success();

    rpc()
        .args(["--db", &db_path, "category", "list"])
        .assert()
        .success()
        .stdout(contains("training").and(contains("custom")));
}

#[test]
fn test_add_for_missing_pet_fails() {
    let db_path = setup_test_db("add_missing_pet");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "add", "Walk", "--date", "2025-01-01", "--pet", "99"])
        .assert()
        .failure()
        .stderr(contains("Pet #99 not found"));
}

#[test]
fn test_rules_lists_all_rules() {
    rpc()
        .args(["rules"])
        .assert()
        .success()
        .stdout(contains("every 2 weeks"))
        .stdout(contains("12m"))
        .stdout(contains("14"));
}

#[test]
fn test_add_series_past_year_9999_writes_nothing() {
    let db_path = setup_test_db("add_year_10000");
    init_db(&db_path);

    rpc()
        .args([
            "--db", &db_path, "add", "Deworming", "--date", "9999-12-28", "--category",
            "medication", "--recur", "1d",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rpc()
        .args([
            "--db", &db_path, "add", "Deworming", "--date", "+10000-01-01", "--category",
            "medication",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert_eq!(count_tasks(&db_path), 0);
}
