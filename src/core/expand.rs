//! Recurrence Expander: turns one task template into its bounded series of
//! dated instances.

use crate::errors::{AppError, AppResult};
use crate::models::recurrence::{RecurrenceRule, StepUnit};
use crate::models::task::{TaskInput, TaskTemplate, TaskInstance};
use crate::utils::date::{add_days, add_months_overflowing, is_storable};
use chrono::NaiveDate;

pub struct RecurrenceExpander;

impl RecurrenceExpander {
    /// Expand `template` under `rule`.
    ///
    /// Every date is computed from the template start date, never from the
    /// previous instance. Either the full series is returned or an error;
    /// no partial list is ever produced.
    pub fn expand(template: &TaskTemplate, rule: RecurrenceRule) -> AppResult<Vec<TaskInstance>> {
        let dates = Self::occurrence_dates(template.start_date, rule)?;

        Ok(dates
            .into_iter()
            .map(|d| {
                let mut inst = template.instance_on(d);
                inst.recurrence = rule;
                inst
            })
            .collect())
    }

    /// Expand using the template's own recurrence rule.
    pub fn expand_template(template: &TaskTemplate) -> AppResult<Vec<TaskInstance>> {
        Self::expand(template, template.recurrence)
    }

    /// Validate raw input and expand it in one step.
    pub fn expand_input(input: TaskInput) -> AppResult<Vec<TaskInstance>> {
        let template = TaskTemplate::from_input(input)?;
        Self::expand_template(&template)
    }

    /// Dates only, in ascending order.
    pub fn occurrence_dates(start: NaiveDate, rule: RecurrenceRule) -> AppResult<Vec<NaiveDate>> {
        if !is_storable(start) {
            return Err(AppError::InvalidDate(format!(
                "{} is outside the supported calendar",
                start
            )));
        }
        let Some(p) = rule.params() else {
            return Ok(vec![start]);
        };

        (0..p.count)
            .map(|i| {
                let offset = i * p.step;
                let next = match p.unit {
                    StepUnit::Day => add_days(start, offset as u64),
                    StepUnit::Month => add_months_overflowing(start, offset),
                };
                next.filter(|d| is_storable(*d)).ok_or_else(|| {
                    AppError::InvalidDate(format!(
                        "{} + occurrence {} of '{}' is outside the supported calendar",
                        start,
                        i,
                        rule.label()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use crate::models::priority::Priority;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn template(start: NaiveDate, rule: RecurrenceRule) -> TaskTemplate {
        TaskTemplate {
            title: "Give heartworm pill".into(),
            description: None,
            time_of_day: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            category: Category::new("medication").unwrap(),
            pet: None,
            priority: Priority::High,
            start_date: start,
            recurrence: rule,
        }
    }

    #[test]
    fn none_yields_single_instance_on_start_date() {
        let t = template(d(2024, 6, 1), RecurrenceRule::None);
        let out = RecurrenceExpander::expand_template(&t).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, d(2024, 6, 1));
        assert!(!out[0].completed);
    }

    #[test]
    fn every_seven_days_from_mid_january() {
        let t = template(d(2024, 1, 15), RecurrenceRule::Every7Days);
        let dates: Vec<NaiveDate> = RecurrenceExpander::expand_template(&t)
            .unwrap()
            .into_iter()
            .map(|i| i.date)
            .collect();

        assert_eq!(
            dates,
            vec![
                d(2024, 1, 15),
                d(2024, 1, 22),
                d(2024, 1, 29),
                d(2024, 2, 5),
                d(2024, 2, 12),
                d(2024, 2, 19),
                d(2024, 2, 26),
                d(2024, 3, 4),
            ]
        );
    }

    #[test]
    fn monthly_from_january_31_overflows_into_march() {
        let t = template(d(2024, 1, 31), RecurrenceRule::EveryMonth);
        let out = RecurrenceExpander::expand_template(&t).unwrap();
        assert_eq!(out.len(), 12);
        assert_eq!(out[0].date, d(2024, 1, 31));
        assert_eq!(out[1].date, d(2024, 3, 2));
        assert_eq!(out[2].date, d(2024, 3, 31));
        assert_eq!(out[3].date, d(2024, 5, 1));
        assert_eq!(out[11].date, d(2024, 12, 31));
    }

    #[test]
    fn every_rule_yields_its_count_in_strictly_ascending_order() {
        let starts = [d(2024, 1, 31), d(2023, 2, 28), d(2024, 2, 29), d(2024, 12, 30)];
        for start in starts {
            for rule in RecurrenceRule::ALL {
                let out = RecurrenceExpander::expand(&template(start, rule), rule).unwrap();
                assert_eq!(out.len() as u32, rule.instance_count(), "{rule} from {start}");
                assert_eq!(out[0].date, start);
                assert!(
                    out.windows(2).all(|w| w[0].date < w[1].date),
                    "{rule} from {start} is not strictly ascending"
                );
            }
        }
    }

    #[test]
    fn instances_differ_only_by_date() {
        let t = template(d(2024, 3, 10), RecurrenceRule::Every3Days);
        let out = RecurrenceExpander::expand_template(&t).unwrap();
        for inst in &out {
            let mut same = inst.clone();
            same.date = t.start_date;
            assert_eq!(same, t.instance_on(t.start_date));
            assert_eq!(inst.recurrence, RecurrenceRule::Every3Days);
        }
    }

    #[test]
    fn expansion_is_repeatable() {
        let t = template(d(2024, 8, 31), RecurrenceRule::Every3Months);
        let a = RecurrenceExpander::expand_template(&t).unwrap();
        let b = RecurrenceExpander::expand_template(&t).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn daily_rule_crosses_year_boundary() {
        let dates = RecurrenceExpander::occurrence_dates(d(2024, 12, 25), RecurrenceRule::EveryDay)
            .unwrap();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[6], d(2024, 12, 31));
        assert_eq!(dates[7], d(2025, 1, 1));
        assert_eq!(dates[13], d(2025, 1, 7));
    }

    #[test]
    fn yearly_rule_from_leap_day() {
        let dates =
            RecurrenceExpander::occurrence_dates(d(2024, 2, 29), RecurrenceRule::Every12Months)
                .unwrap();
        assert_eq!(dates, vec![d(2024, 2, 29), d(2025, 3, 1)]);
    }

    #[test]
    fn out_of_range_start_fails_without_partial_output() {
        let t = template(NaiveDate::MAX, RecurrenceRule::EveryDay);
        assert!(matches!(
            RecurrenceExpander::expand_template(&t),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn series_crossing_year_9999_is_rejected() {
        let t = template(d(9999, 12, 28), RecurrenceRule::EveryDay);
        assert!(matches!(
            RecurrenceExpander::expand_template(&t),
            Err(AppError::InvalidDate(_))
        ));

        let last_day = RecurrenceExpander::occurrence_dates(d(9999, 12, 31), RecurrenceRule::None)
            .unwrap();
        assert_eq!(last_day, vec![d(9999, 12, 31)]);
        assert!(
            RecurrenceExpander::occurrence_dates(d(10000, 1, 1), RecurrenceRule::None).is_err()
        );
    }

    #[test]
    fn raw_input_errors_surface_before_expansion() {
        let input = TaskInput {
            title: "Brush".into(),
            time_of_day: "19:00".into(),
            category: "grooming".into(),
            priority: "low".into(),
            start_date: "2024-13-01".into(),
            recurrence: "1m".into(),
            ..Default::default()
        };
        assert!(matches!(
            RecurrenceExpander::expand_input(input.clone()),
            Err(AppError::InvalidDate(_))
        ));

        let bad_rule = TaskInput {
            start_date: "2024-01-01".into(),
            recurrence: "every 2 months".into(),
            ..input
        };
        assert!(matches!(
            RecurrenceExpander::expand_input(bad_rule),
            Err(AppError::InvalidRule(_))
        ));
    }
}
