//! Init command implementation - scaffolds a new sqldrift project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

/// Execute the init command
pub(crate) fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new sqldrift project: {}\n", args.name);

    // Create directory structure
    let dirs = ["", "scripts/schema", "scripts/data"];
    for dir in &dirs {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    // Generate sqldrift.yml
    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let safe_db_path = args.database_path.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"
version: "1.0.0"

database:
  type: duckdb
  path: "{db_path}"

schema_path: "scripts/schema"
data_path: "scripts/data"

ledger_table: "schema_versions"

# Whether a failed schema batch stops the run before the data batch
stop_on_batch_failure: true
"#,
        name = safe_name,
        db_path = safe_db_path,
    );
    let config_path = project_dir.join("sqldrift.yml");
    fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    // Starter schema script. Scripts run in filename order, exactly once;
    // add new ones rather than editing applied ones.
    let starter = "-- 001_init.sql\n\
                   -- Schema scripts run in filename order, each exactly once.\n\
                   -- Example:\n\
                   -- CREATE TABLE users (id INTEGER PRIMARY KEY, name VARCHAR);\n";
    let starter_path = project_dir.join("scripts/schema/001_init.sql");
    fs::write(&starter_path, starter)
        .with_context(|| format!("Failed to write {}", starter_path.display()))?;

    println!("Created:");
    println!("  {}", config_path.display());
    println!("  {}", project_dir.join("scripts/schema").display());
    println!("  {}", project_dir.join("scripts/data").display());
    println!("  {}", starter_path.display());
    println!("\nNext steps:");
    println!("  cd {}", args.name);
    println!("  drift migrate");

    Ok(())
}
