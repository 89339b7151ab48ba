//! The persistence boundary the scheduling logic talks to.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::task::TaskInstance;
use chrono::NaiveDate;

/// CRUD store for task instances.
///
/// `insert_task` takes one instance and hands back the stored row with its
/// generated id and timestamps. Errors are returned unchanged to the caller.
pub trait TaskStore {
    fn insert_task(&mut self, task: &TaskInstance) -> AppResult<TaskInstance>;
    fn load_task(&mut self, id: i64) -> AppResult<Option<TaskInstance>>;
    fn load_all_tasks(&mut self) -> AppResult<Vec<TaskInstance>>;
    fn load_tasks_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TaskInstance>>;
    fn set_completed(&mut self, id: i64, completed: bool) -> AppResult<bool>;
    fn delete_task(&mut self, id: i64) -> AppResult<bool>;
    fn delete_tasks_on_date(&mut self, date: NaiveDate) -> AppResult<usize>;
}

impl TaskStore for DbPool {
    fn insert_task(&mut self, task: &TaskInstance) -> AppResult<TaskInstance> {
        queries::insert_task(&self.conn, task)
    }

    fn load_task(&mut self, id: i64) -> AppResult<Option<TaskInstance>> {
        queries::load_task(&self.conn, id)
    }

    fn load_all_tasks(&mut self) -> AppResult<Vec<TaskInstance>> {
        queries::load_all_tasks(&self.conn)
    }

    fn load_tasks_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TaskInstance>> {
        queries::load_tasks_between(&self.conn, &start, &end)
    }

    fn set_completed(&mut self, id: i64, completed: bool) -> AppResult<bool> {
        queries::set_completed(&self.conn, id, completed)
    }

    fn delete_task(&mut self, id: i64) -> AppResult<bool> {
        queries::delete_task(&self.conn, id)
    }

    fn delete_tasks_on_date(&mut self, date: NaiveDate) -> AppResult<usize> {
        queries::delete_tasks_on_date(&self.conn, &date)
    }
}
