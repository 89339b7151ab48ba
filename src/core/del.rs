use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskInstance;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single instance by id and return what was removed.
    pub fn delete_one<S: TaskStore + ?Sized>(store: &mut S, id: i64) -> AppResult<TaskInstance> {
        let task = store.load_task(id)?.ok_or(AppError::TaskNotFound(id))?;
        if !store.delete_task(id)? {
            return Err(AppError::TaskNotFound(id));
        }
        Ok(task)
    }

    /// Delete every instance scheduled on `date`.
    pub fn delete_day<S: TaskStore + ?Sized>(store: &mut S, date: NaiveDate) -> AppResult<usize> {
        let removed = store.delete_tasks_on_date(date)?;
        if removed == 0 {
            return Err(AppError::NoTasksForDate(date.to_string()));
        }
        Ok(removed)
    }
}
