//! Idempotent schema migrations.
//!
//! Every step is recorded in the `log` table with
//! `operation = 'migration_applied'` and skipped once present.

use crate::models::category::BUILTIN_CATEGORIES;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also stores migration markers.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `tasks` table. `pet_id` has no foreign key: removing a pet
/// leaves its tasks in place.
fn create_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL CHECK(length(title) > 0),
            description TEXT,
            time        TEXT NOT NULL,
            category    TEXT NOT NULL,
            pet_id      INTEGER,
            priority    TEXT NOT NULL DEFAULT 'medium' CHECK(priority IN ('high','medium','low')),
            date        TEXT NOT NULL,
            recurrence  TEXT NOT NULL DEFAULT 'none',
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_date_time ON tasks(date, time);
        CREATE INDEX IF NOT EXISTS idx_tasks_pet ON tasks(pet_id);
        "#,
    )?;
    Ok(())
}

fn create_pets_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pets (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            species     TEXT NOT NULL,
            breed       TEXT NOT NULL DEFAULT '',
            age         TEXT NOT NULL DEFAULT '',
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_categories_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            name     TEXT PRIMARY KEY,
            builtin  INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;

    let mut stmt =
        conn.prepare("INSERT OR IGNORE INTO categories (name, builtin) VALUES (?1, 1)")?;
    for c in BUILTIN_CATEGORIES {
        stmt.execute([c])?;
    }
    Ok(())
}

fn apply<F>(conn: &Connection, version: &str, message: &str, step: F) -> Result<()>
where
    F: FnOnce(&Connection) -> Result<()>,
{
    if is_applied(conn, version)? {
        return Ok(());
    }

    step(conn)?;
    mark_applied(conn, version, message)?;
    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply(
        conn,
        "20250301_0001_create_tasks",
        "created tasks table",
        create_tasks_table,
    )?;
    apply(
        conn,
        "20250301_0002_create_pets",
        "created pets table",
        create_pets_table,
    )?;
    apply(
        conn,
        "20250412_0003_create_categories",
        "created categories table with built-in tags",
        create_categories_table,
    )?;

    Ok(())
}

/// Names of the tables the application expects.
pub fn missing_tables(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut out = Vec::new();
    for t in ["log", "tasks", "pets", "categories"] {
        if !table_exists(conn, t)? {
            out.push(t);
        }
    }
    Ok(out)
}
