//! Formatting utilities used for CLI and export outputs.

use crate::models::pet::PetDirectory;
use crate::models::task::TaskInstance;
use crate::utils::colors::{GREY, RESET, color_for_priority, colorize_optional, colorize_status};

/// Table cells for one task row: ID, time, title, category, pet, priority, status.
pub fn task_row(t: &TaskInstance, pets: &PetDirectory) -> Vec<String> {
    let title = if t.completed {
        format!("{GREY}{}{RESET}", t.title)
    } else {
        t.title.clone()
    };

    let pet = if pets.is_orphan(t.pet) {
        format!("{GREY}{}{RESET}", pets.label_for(t.pet))
    } else {
        pets.label_for(t.pet)
    };

    vec![
        t.id.to_string(),
        t.time_str(),
        title,
        format!("{} {}", t.category.icon(), t.category),
        pet,
        format!(
            "{} {}{}{}",
            t.priority.icon(),
            color_for_priority(t.priority),
            t.priority.to_db_str(),
            RESET
        ),
        colorize_status(t.completed),
        colorize_optional(if t.recurrence.is_recurring() {
            t.recurrence.label()
        } else {
            ""
        }),
    ]
}

pub const TASK_HEADERS: [&str; 8] = [
    "ID", "Time", "Title", "Category", "Pet", "Priority", "Status", "Repeats",
];

/// Singular/plural noun: `plural(1, "task")` → "1 task".
pub fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
