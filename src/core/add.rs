use crate::core::expand::RecurrenceExpander;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::{TaskInstance, TaskTemplate};
use chrono::NaiveDate;

/// Result of persisting an expanded series.
///
/// Writes are independent: a failed instance does not undo the ones already
/// stored, and nothing is retried.
#[derive(Debug)]
pub struct BatchOutcome {
    pub created: Vec<TaskInstance>,
    pub failed: Vec<(NaiveDate, AppError)>,
    pub total: usize,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("{} of {} instances created", self.created.len(), self.total)
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Expand `template` once and store every instance with one write each.
    ///
    /// Validation and expansion errors abort before anything is written.
    /// If every write fails, the first store error is returned unchanged;
    /// otherwise the partial outcome is reported through [`BatchOutcome`].
    pub fn apply<S: TaskStore + ?Sized>(
        store: &mut S,
        template: &TaskTemplate,
    ) -> AppResult<BatchOutcome> {
        let instances = RecurrenceExpander::expand_template(template)?;
        let total = instances.len();

        let mut created = Vec::with_capacity(total);
        let mut failed = Vec::new();

        for inst in &instances {
            match store.insert_task(inst) {
                Ok(saved) => created.push(saved),
                Err(e) => failed.push((inst.date, e)),
            }
        }

        if created.is_empty() && !failed.is_empty() {
            let (_, first) = failed.remove(0);
            return Err(first);
        }

        Ok(BatchOutcome {
            created,
            failed,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use crate::models::recurrence::RecurrenceRule;
    use crate::models::task::TaskInput;

    /// Store that rejects every n-th insert.
    struct FlakyStore {
        inner: DbPool,
        calls: usize,
        fail_every: usize,
    }

    impl TaskStore for FlakyStore {
        fn insert_task(&mut self, task: &TaskInstance) -> AppResult<TaskInstance> {
            self.calls += 1;
            if self.calls % self.fail_every == 0 {
                return Err(AppError::Other(format!("write {} rejected", self.calls)));
            }
            self.inner.insert_task(task)
        }
        fn load_task(&mut self, id: i64) -> AppResult<Option<TaskInstance>> {
            self.inner.load_task(id)
        }
        fn load_all_tasks(&mut self) -> AppResult<Vec<TaskInstance>> {
            self.inner.load_all_tasks()
        }
        fn load_tasks_between(
            &mut self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> AppResult<Vec<TaskInstance>> {
            self.inner.load_tasks_between(start, end)
        }
        fn set_completed(&mut self, id: i64, completed: bool) -> AppResult<bool> {
            self.inner.set_completed(id, completed)
        }
        fn delete_task(&mut self, id: i64) -> AppResult<bool> {
            self.inner.delete_task(id)
        }
        fn delete_tasks_on_date(&mut self, date: NaiveDate) -> AppResult<usize> {
            self.inner.delete_tasks_on_date(date)
        }
    }

    fn memory_pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn template(rule: &str) -> TaskTemplate {
        TaskTemplate::from_input(TaskInput {
            title: "Feed Luna".into(),
            description: Some("half a cup".into()),
            time_of_day: "08:00".into(),
            category: "feeding".into(),
            pet: Some(1),
            priority: "medium".into(),
            start_date: "2024-01-15".into(),
            recurrence: rule.into(),
        })
        .unwrap()
    }

    #[test]
    fn every_instance_is_persisted_with_generated_ids() {
        let mut pool = memory_pool();
        let outcome = AddLogic::apply(&mut pool, &template("7d")).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.total, 8);
        assert_eq!(outcome.created.len(), 8);
        assert!(outcome.created.iter().all(|t| t.is_persisted()));
        assert!(outcome.created.iter().all(|t| !t.created_at.is_empty()));

        let stored = pool.load_all_tasks().unwrap();
        assert_eq!(stored.len(), 8);
        assert!(stored.iter().all(|t| t.recurrence == RecurrenceRule::Every7Days));
        assert_eq!(stored[0].description.as_deref(), Some("half a cup"));
    }

    #[test]
    fn partial_failure_keeps_stored_instances() {
        let mut store = FlakyStore {
            inner: memory_pool(),
            calls: 0,
            fail_every: 3,
        };
        let outcome = AddLogic::apply(&mut store, &template("3d")).unwrap();

        assert_eq!(outcome.total, 6);
        assert_eq!(outcome.created.len(), 4);
        assert_eq!(outcome.failed.len(), 2);
        assert_eq!(outcome.summary(), "4 of 6 instances created");
        assert_eq!(store.load_all_tasks().unwrap().len(), 4);
    }

    #[test]
    fn total_failure_returns_store_error() {
        let mut store = FlakyStore {
            inner: memory_pool(),
            calls: 0,
            fail_every: 1,
        };
        let err = AddLogic::apply(&mut store, &template("none")).unwrap_err();
        assert!(matches!(err, AppError::Other(m) if m == "write 1 rejected"));
    }
}
