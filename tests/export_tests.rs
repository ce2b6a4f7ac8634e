use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, tw};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    tw().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,date,location,count"));
    assert!(content.contains("2025-06-01,Kitchen,3"));
    assert!(content.contains("2025-06-02,Garage,5"));
}

#[test]
fn test_export_json_uses_persisted_layout() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    tw().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    assert!(content.contains("\"trapId\": \"Kitchen\""));
    assert!(content.contains("\"date\": \"2025-06-02\""));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "existing").expect("seed output file");

    tw().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tw().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_respects_date_range() {
    let db_path = setup_test_db("export_range");
    let out = temp_out("export_range", "csv");
    init_db_with_data(&db_path);

    tw().args([
        "--db", &db_path, "export", "--file", &out, "--from", "2025-06-02",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Garage"));
    assert!(!content.contains("Kitchen"));
}

#[test]
fn test_backup_copies_store() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");
    init_db_with_data(&db_path);

    tw().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).is_ok());
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_gz");
    let out = temp_out("backup_gz", "sqlite");
    let gz = format!("{}.gz", out);
    fs::remove_file(&gz).ok();
    init_db_with_data(&db_path);

    tw().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    // compressed copy exists, uncompressed one was removed
    assert!(fs::metadata(&gz).is_ok());
    assert!(fs::metadata(&out).is_err());
}
