use crate::errors::AppResult;
use crate::models::category::{Category, CategoryRegistry};
use rusqlite::Connection;

/// Persist a user-defined category. Returns false if it already existed.
pub fn insert_category(conn: &Connection, cat: &Category) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO categories (name, builtin) VALUES (?1, 0)",
        [cat.as_str()],
    )?;
    Ok(changed == 1)
}

/// Load every known category into a registry.
pub fn load_registry(conn: &Connection) -> AppResult<CategoryRegistry> {
    let mut stmt = conn.prepare("SELECT name FROM categories ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut names = Vec::new();
    for r in rows {
        names.push(r?);
    }

    CategoryRegistry::with_custom(names)
}
