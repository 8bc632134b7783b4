use super::*;
use tempfile::TempDir;

fn write_script(dir: &std::path::Path, name: &str, sql: &str) {
    std::fs::write(dir.join(name), sql).unwrap();
}

#[test]
fn test_script_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("001_create_table.sql");
    std::fs::write(&path, "CREATE TABLE users (id INTEGER);").unwrap();

    let script = Script::from_file(path.clone()).unwrap();
    assert_eq!(script.name, "001_create_table.sql");
    assert_eq!(script.path, path);
    assert_eq!(script.sql, "CREATE TABLE users (id INTEGER);");
}

#[test]
fn test_discover_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "002_add_column.sql", "-- 2");
    write_script(dir.path(), "010_add_index.sql", "-- 10");
    write_script(dir.path(), "001_create_table.sql", "-- 1");

    let batch = ScriptBatch::discover(BatchKind::Schema, dir.path()).unwrap();
    assert_eq!(
        batch.names(),
        vec![
            "001_create_table.sql",
            "002_add_column.sql",
            "010_add_index.sql"
        ]
    );
}

#[test]
fn test_discover_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "b.sql", "-- b");
    write_script(dir.path(), "a.sql", "-- a");

    let first = ScriptBatch::discover(BatchKind::Schema, dir.path()).unwrap();
    let second = ScriptBatch::discover(BatchKind::Schema, dir.path()).unwrap();
    assert_eq!(
        first.names(),
        second.names(),
        "unchanged directory must yield the same sequence"
    );
}

#[test]
fn test_discover_ignores_other_extensions_and_subdirs() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "001_apply.sql", "SELECT 1");
    write_script(dir.path(), "notes.txt", "not sql");
    write_script(dir.path(), "README.md", "docs");

    // Scripts in subdirectories are not picked up (non-recursive)
    let sub = dir.path().join("archive");
    std::fs::create_dir(&sub).unwrap();
    write_script(&sub, "000_old.sql", "SELECT 0");

    let batch = ScriptBatch::discover(BatchKind::Data, dir.path()).unwrap();
    assert_eq!(batch.names(), vec!["001_apply.sql"]);
}

#[test]
fn test_discover_uppercase_extension() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "001_upper.SQL", "SELECT 1");

    let batch = ScriptBatch::discover(BatchKind::Schema, dir.path()).unwrap();
    assert_eq!(batch.len(), 1);
}

#[test]
fn test_discover_empty_dir_is_empty_batch() {
    let dir = TempDir::new().unwrap();
    let batch = ScriptBatch::discover(BatchKind::Data, dir.path()).unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.len(), 0);
}

#[test]
fn test_discover_missing_dir_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let result = ScriptBatch::discover(BatchKind::Schema, &missing);
    assert!(matches!(
        result,
        Err(CoreError::ScriptsDirNotFound { .. })
    ));
}

#[test]
fn test_batch_kind_display() {
    assert_eq!(BatchKind::Schema.to_string(), "schema");
    assert_eq!(BatchKind::Data.to_string(), "data");
    assert_eq!(BatchKind::Schema.label(), "Schema");
    assert_eq!(BatchKind::Data.label(), "Data");
}
