use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskInstance;

pub struct CompleteLogic;

impl CompleteLogic {
    /// Mark one instance as completed (or reopen it). Siblings of the same
    /// series are untouched.
    pub fn apply<S: TaskStore + ?Sized>(
        store: &mut S,
        id: i64,
        completed: bool,
    ) -> AppResult<TaskInstance> {
        if !store.set_completed(id, completed)? {
            return Err(AppError::TaskNotFound(id));
        }
        store.load_task(id)?.ok_or(AppError::TaskNotFound(id))
    }
}
