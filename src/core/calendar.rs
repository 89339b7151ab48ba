//! Calendar Index: day-keyed, read-only view over a set of task instances.
//!
//! The index is rebuilt from the current collection on every rendering pass;
//! it is never updated in place.

use crate::models::task::TaskInstance;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

pub struct CalendarIndex<'a> {
    by_day: BTreeMap<NaiveDate, Vec<&'a TaskInstance>>,
}

impl<'a> CalendarIndex<'a> {
    pub fn build(tasks: &'a [TaskInstance]) -> Self {
        let mut by_day: BTreeMap<NaiveDate, Vec<&'a TaskInstance>> = BTreeMap::new();
        for t in tasks {
            by_day.entry(t.date).or_default().push(t);
        }
        Self { by_day }
    }

    /// Every instance on `date`, in collection order. Empty when none.
    pub fn tasks_on_date(&self, date: NaiveDate) -> Vec<&'a TaskInstance> {
        self.by_day.get(&date).cloned().unwrap_or_default()
    }

    /// Same as [`CalendarIndex::tasks_on_date`], ordered by time of day for display.
    pub fn tasks_on_date_sorted(&self, date: NaiveDate) -> Vec<&'a TaskInstance> {
        let mut out = self.tasks_on_date(date);
        out.sort_by(|a, b| a.time_of_day.cmp(&b.time_of_day).then(a.id.cmp(&b.id)));
        out
    }

    /// Distinct days carrying at least one instance.
    pub fn dates_with_tasks(&self) -> BTreeSet<NaiveDate> {
        self.by_day.keys().copied().collect()
    }

    /// Days of the given month carrying at least one instance.
    pub fn dates_in_month(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.by_day
            .keys()
            .filter(|d| d.year() == year && d.month() == month)
            .copied()
            .collect()
    }

    pub fn count_on_date(&self, date: NaiveDate) -> usize {
        self.by_day.get(&date).map(Vec::len).unwrap_or(0)
    }

    pub fn pending_on_date(&self, date: NaiveDate) -> usize {
        self.by_day
            .get(&date)
            .map(|v| v.iter().filter(|t| !t.completed).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expand::RecurrenceExpander;
    use crate::models::category::Category;
    use crate::models::priority::Priority;
    use crate::models::recurrence::RecurrenceRule;
    use crate::models::task::TaskTemplate;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(id: i64, date: NaiveDate, hh: u32) -> TaskInstance {
        let t = TaskTemplate {
            title: format!("task {id}"),
            description: None,
            time_of_day: NaiveTime::from_hms_opt(hh, 0, 0).unwrap(),
            category: Category::new("feeding").unwrap(),
            pet: None,
            priority: Priority::Medium,
            start_date: date,
            recurrence: RecurrenceRule::None,
        };
        let mut inst = t.instance_on(date);
        inst.id = id;
        inst
    }

    #[test]
    fn empty_day_returns_empty_set() {
        let tasks = vec![task(1, d(2024, 5, 1), 8)];
        let idx = CalendarIndex::build(&tasks);
        assert!(idx.tasks_on_date(d(2024, 5, 2)).is_empty());
        assert_eq!(idx.count_on_date(d(2024, 5, 2)), 0);

        let none: Vec<TaskInstance> = Vec::new();
        let idx = CalendarIndex::build(&none);
        assert!(idx.is_empty());
        assert!(idx.dates_with_tasks().is_empty());
    }

    #[test]
    fn same_day_different_times_both_match() {
        let tasks = vec![
            task(1, d(2024, 5, 1), 18),
            task(2, d(2024, 5, 1), 7),
            task(3, d(2024, 5, 2), 7),
        ];
        let idx = CalendarIndex::build(&tasks);

        let ids: Vec<i64> = idx.tasks_on_date(d(2024, 5, 1)).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let sorted: Vec<i64> = idx
            .tasks_on_date_sorted(d(2024, 5, 1))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(sorted, vec![2, 1]);
    }

    #[test]
    fn dates_with_tasks_matches_non_empty_days() {
        let tasks = vec![
            task(1, d(2024, 5, 1), 8),
            task(2, d(2024, 5, 1), 9),
            task(3, d(2024, 6, 3), 9),
        ];
        let idx = CalendarIndex::build(&tasks);
        let dates = idx.dates_with_tasks();
        assert_eq!(dates.len(), 2);

        for day in d(2024, 4, 25).iter_days().take(60) {
            assert_eq!(dates.contains(&day), !idx.tasks_on_date(day).is_empty(), "{day}");
        }
    }

    #[test]
    fn badge_counts_track_completion() {
        let mut tasks = vec![task(1, d(2024, 5, 1), 8), task(2, d(2024, 5, 1), 9)];
        tasks[0].completed = true;
        let idx = CalendarIndex::build(&tasks);
        assert_eq!(idx.count_on_date(d(2024, 5, 1)), 2);
        assert_eq!(idx.pending_on_date(d(2024, 5, 1)), 1);
    }

    #[test]
    fn index_over_expanded_series() {
        let t = TaskTemplate {
            title: "Walk".into(),
            description: None,
            time_of_day: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            category: Category::new("walk").unwrap(),
            pet: None,
            priority: Priority::Low,
            start_date: d(2024, 1, 15),
            recurrence: RecurrenceRule::Every7Days,
        };
        let series = RecurrenceExpander::expand_template(&t).unwrap();
        let idx = CalendarIndex::build(&series);

        assert_eq!(idx.dates_with_tasks().len(), 8);
        assert_eq!(idx.dates_in_month(2024, 2).len(), 4);
        assert_eq!(idx.tasks_on_date(d(2024, 3, 4)).len(), 1);
        assert!(idx.tasks_on_date(d(2024, 3, 5)).is_empty());
    }
}
