//! Reminder hook. Delivery belongs to the host: the default notifier does
//! nothing and the engine never schedules timers.

use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskInstance;

pub trait Notifier {
    fn remind(&self, task: &TaskInstance) -> AppResult<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn remind(&self, _task: &TaskInstance) -> AppResult<()> {
        Ok(())
    }
}

pub struct RemindLogic;

impl RemindLogic {
    pub fn apply<S, N>(store: &mut S, notifier: &N, id: i64) -> AppResult<TaskInstance>
    where
        S: TaskStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let task = store.load_task(id)?.ok_or(AppError::TaskNotFound(id))?;
        notifier.remind(&task)?;
        Ok(task)
    }
}
