use super::{
    category::Category, pet::PetRef, priority::Priority, recurrence::RecurrenceRule,
};
use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Raw, unvalidated task input as collected by the CLI or another host form.
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub time_of_day: String,
    pub category: String,
    pub pet: Option<i64>,
    pub priority: String,
    pub start_date: String,
    pub recurrence: String,
}

/// User-authored task definition, prior to expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskTemplate {
    pub title: String,
    pub description: Option<String>,
    pub time_of_day: NaiveTime,
    pub category: Category,
    pub pet: Option<PetRef>,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub recurrence: RecurrenceRule,
}

impl TaskTemplate {
    /// Validate raw input. Every field is checked before any expansion work.
    pub fn from_input(input: TaskInput) -> AppResult<Self> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidTitle("title must not be empty".into()));
        }

        let start_date = date::parse_date_strict(&input.start_date)?;
        let recurrence = RecurrenceRule::parse(&input.recurrence)?;
        let time_of_day = time::parse_time_strict(&input.time_of_day)?;
        let priority = Priority::from_code(&input.priority)
            .ok_or_else(|| AppError::InvalidPriority(input.priority.clone()))?;
        let category = Category::new(&input.category)?;

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            title,
            description,
            time_of_day,
            category,
            pet: input.pet.map(PetRef),
            priority,
            start_date,
            recurrence,
        })
    }

    /// Materialize one dated, not yet persisted instance.
    pub fn instance_on(&self, date: NaiveDate) -> TaskInstance {
        TaskInstance {
            id: 0,
            title: self.title.clone(),
            description: self.description.clone(),
            time_of_day: self.time_of_day,
            category: self.category.clone(),
            pet: self.pet,
            priority: self.priority,
            date,
            recurrence: self.recurrence,
            completed: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// One concrete, dated occurrence ⇔ one row of the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInstance {
    pub id: i64, // 0 until persisted
    pub title: String,
    pub description: Option<String>,
    pub time_of_day: NaiveTime,
    pub category: Category,
    pub pet: Option<PetRef>,
    pub priority: Priority,
    pub date: NaiveDate,
    pub recurrence: RecurrenceRule,
    pub completed: bool,
    pub created_at: String, // ISO8601, assigned by the store
    pub updated_at: String,
}

impl TaskInstance {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        time::format_time(self.time_of_day)
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
