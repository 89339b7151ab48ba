use crate::errors::AppResult;
use crate::models::pet::Pet;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_pet(row: &Row) -> Result<Pet> {
    Ok(Pet {
        id: row.get("id")?,
        name: row.get("name")?,
        species: row.get("species")?,
        breed: row.get("breed")?,
        age: row.get("age")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_pet(
    conn: &Connection,
    name: &str,
    species: &str,
    breed: &str,
    age: &str,
    notes: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO pets (name, species, breed, age, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![name, species, breed, age, notes, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_pets(conn: &Connection) -> AppResult<Vec<Pet>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, species, breed, age, notes, created_at
         FROM pets ORDER BY name COLLATE NOCASE ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_pet)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_pet(conn: &Connection, id: i64) -> AppResult<Option<Pet>> {
    let pet = conn
        .query_row(
            "SELECT id, name, species, breed, age, notes, created_at FROM pets WHERE id = ?1",
            [id],
            map_pet,
        )
        .optional()?;
    Ok(pet)
}

/// Remove the pet row only. Tasks that point at it are left in place.
pub fn delete_pet(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM pets WHERE id = ?1", [id])?;
    Ok(changed == 1)
}
