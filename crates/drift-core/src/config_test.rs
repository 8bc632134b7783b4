use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_minimal_config() {
    let yaml = r#"
name: test_project
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "test_project");
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.database.path, "deploy.duckdb");
    assert_eq!(config.ledger_table, "schema_versions");
    assert!(config.stop_on_batch_failure);

    let root = std::path::PathBuf::from("/tmp/test");
    assert_eq!(
        config.schema_path_absolute(&root),
        root.join("scripts/schema")
    );
    assert_eq!(config.data_path_absolute(&root), root.join("scripts/data"));
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: my_deploy_project
version: "2.0.0"
database:
  type: duckdb
  path: "./warehouse.duckdb"
schema_path: "migrations/ddl"
data_path: "migrations/dml"
ledger_table: "meta.applied_scripts"
stop_on_batch_failure: false
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "my_deploy_project");
    assert_eq!(config.database.path, "./warehouse.duckdb");
    assert_eq!(config.schema_path, "migrations/ddl");
    assert_eq!(config.ledger_table, "meta.applied_scripts");
    assert!(!config.stop_on_batch_failure);
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = "name: test\nconnection_string: not_a_field";
    let result: Result<Config, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_load_from_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sqldrift.yml"),
        "name: from_dir\ndatabase:\n  path: \":memory:\"\n",
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_dir");
    assert_eq!(config.database.path, ":memory:");
}

#[test]
fn test_load_from_dir_yaml_fallback() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("sqldrift.yaml"), "name: fallback\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "fallback");
}

#[test]
fn test_load_from_dir_missing() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from_dir(dir.path());
    assert!(matches!(result, Err(CoreError::ConfigNotFound { .. })));
}

#[test]
fn test_empty_name_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sqldrift.yml");
    std::fs::write(&path, "name: \"\"\n").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(CoreError::ConfigInvalid { .. })));
}

#[test]
fn test_invalid_ledger_table_rejected() {
    for bad in [
        "1versions",
        "schema versions",
        "a.b.c",
        "versions; DROP TABLE x",
        "",
    ] {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqldrift.yml");
        std::fs::write(&path, format!("name: test\nledger_table: \"{bad}\"\n")).unwrap();

        let result = Config::load(&path);
        assert!(
            matches!(result, Err(CoreError::ConfigInvalid { .. })),
            "expected rejection for ledger_table {bad:?}"
        );
    }
}

#[test]
fn test_qualified_ledger_table_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sqldrift.yml");
    std::fs::write(&path, "name: test\nledger_table: drift_meta.schema_versions\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.ledger_table, "drift_meta.schema_versions");
}

#[test]
fn test_resolve_db_path() {
    let config: Config = serde_yaml::from_str("name: test").unwrap();
    assert_eq!(config.resolve_db_path(None), "deploy.duckdb");
    assert_eq!(config.resolve_db_path(Some(":memory:")), ":memory:");
}
