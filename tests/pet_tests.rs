use predicates::str::contains;

mod common;
use common::{count_tasks, init_db, rpc, setup_test_db};

#[test]
fn test_pet_add_list_and_orphaned_tasks() {
    let db_path = setup_test_db("pet_orphans");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "pet", "add", "Miso", "--species", "cat"])
        .assert()
        .success()
        .stdout(contains("Pet #1 'Miso' (cat) added"));

    rpc()
        .args(["--db", &db_path, "pet", "list"])
        .assert()
        .success()
        .stdout(contains("Miso"));

    rpc()
        .args([
            "--db",
            &db_path,
            "add",
            "Insulin",
            "--date",
            "2025-02-01",
            "--category",
            "medication",
            "--pet",
            "1",
            "--recur",
            "3d",
        ])
        .assert()
        .success()
        .stdout(contains("6 of 6 instances created"));

    rpc()
        .args(["--db", &db_path, "list", "--date", "2025-02-04"])
        .assert()
        .success()
        .stdout(contains("Miso (cat)"));

    rpc()
        .args(["--db", &db_path, "pet", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("6 task(s) now show as 'Unknown pet #1'"));

    // Tasks survive the pet and are labelled as orphans.
    assert_eq!(count_tasks(&db_path), 6);
    rpc()
        .args(["--db", &db_path, "list", "--date", "2025-02-04"])
        .assert()
        .success()
        .stdout(contains("Unknown pet #1"));
}

#[test]
fn test_pet_del_unknown() {
    let db_path = setup_test_db("pet_del_unknown");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "pet", "del", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Pet #7 not found"));
}
