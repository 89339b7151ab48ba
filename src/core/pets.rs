use crate::db::{pets, queries};
use crate::errors::{AppError, AppResult};
use crate::models::pet::{Pet, PetDirectory, PetRef};
use rusqlite::Connection;

/// Fields collected by `pet add`.
#[derive(Debug, Clone, Default)]
pub struct PetInput {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub notes: Option<String>,
}

pub struct PetLogic;

impl PetLogic {
    pub fn add(conn: &Connection, input: &PetInput) -> AppResult<Pet> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::Other("pet name must not be empty".into()));
        }
        let species = match input.species.trim() {
            "" => "pet",
            s => s,
        };

        let opt = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();

        let id = pets::insert_pet(
            conn,
            name,
            species,
            &opt(&input.breed),
            &opt(&input.age),
            &opt(&input.notes),
        )?;

        pets::load_pet(conn, id)?.ok_or(AppError::PetNotFound(id))
    }

    pub fn list(conn: &Connection) -> AppResult<Vec<Pet>> {
        pets::load_pets(conn)
    }

    /// Load every pet into a lookup used to label tasks.
    pub fn directory(conn: &Connection) -> AppResult<PetDirectory> {
        Ok(PetDirectory::new(pets::load_pets(conn)?))
    }

    /// Remove a pet. Its tasks stay and become orphaned; the number of such
    /// tasks is returned so the caller can tell the user.
    pub fn delete(conn: &Connection, id: i64) -> AppResult<(Pet, i64)> {
        let pet = pets::load_pet(conn, id)?.ok_or(AppError::PetNotFound(id))?;
        let orphaned = queries::count_tasks_for_pet(conn, PetRef(id))?;

        if !pets::delete_pet(conn, id)? {
            return Err(AppError::PetNotFound(id));
        }
        Ok((pet, orphaned))
    }

    /// Fail with `PetNotFound` unless `id` refers to an existing pet.
    pub fn ensure_exists(conn: &Connection, id: i64) -> AppResult<Pet> {
        pets::load_pet(conn, id)?.ok_or(AppError::PetNotFound(id))
    }
}
