use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Weak reference to a pet row. Lookup only: never implies ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PetRef(pub i64);

impl fmt::Display for PetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub notes: String,
    pub created_at: String,
}

impl Pet {
    pub fn pet_ref(&self) -> PetRef {
        PetRef(self.id)
    }
}

/// Read-only id → pet lookup used when rendering tasks.
#[derive(Debug, Default)]
pub struct PetDirectory {
    by_id: HashMap<PetRef, Pet>,
}

impl PetDirectory {
    pub fn new(pets: Vec<Pet>) -> Self {
        let by_id = pets.into_iter().map(|p| (p.pet_ref(), p)).collect();
        Self { by_id }
    }

    pub fn get(&self, r: PetRef) -> Option<&Pet> {
        self.by_id.get(&r)
    }

    /// Display label for a task's pet reference.
    ///
    /// - no reference → "General"
    /// - dangling reference → "Unknown pet #id"
    pub fn label_for(&self, r: Option<PetRef>) -> String {
        match r {
            None => "General".to_string(),
            Some(r) => match self.get(r) {
                Some(p) => format!("{} ({})", p.name, p.species),
                None => format!("Unknown pet #{}", r),
            },
        }
    }

    pub fn is_orphan(&self, r: Option<PetRef>) -> bool {
        matches!(r, Some(r) if self.get(r).is_none())
    }
}
