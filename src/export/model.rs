use crate::models::pet::PetDirectory;
use crate::models::task::TaskInstance;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub pet_id: Option<i64>,
    pub pet: String,
    pub priority: String,
    pub recurrence: String,
    pub completed: bool,
}

impl TaskExport {
    pub fn from_instance(t: &TaskInstance, pets: &PetDirectory) -> Self {
        Self {
            id: t.id,
            date: t.date_str(),
            time: t.time_str(),
            title: t.title.clone(),
            description: t.description.clone().unwrap_or_default(),
            category: t.category.to_string(),
            pet_id: t.pet.map(|p| p.0),
            pet: pets.label_for(t.pet),
            priority: t.priority.to_db_str().to_string(),
            recurrence: t.recurrence.key().to_string(),
            completed: t.completed,
        }
    }
}
