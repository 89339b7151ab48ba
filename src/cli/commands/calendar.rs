use crate::cli::commands::list::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarIndex;
use crate::core::pets::PetLogic;
use crate::db::initialize::open_db;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskInstance;
use crate::ui::messages::info;
use crate::utils::colors::{BOLD, RESET};
use crate::utils::date;
use chrono::{Datelike, NaiveDate, Weekday};

const MARKER: char = '•';

/// Month grid; days with at least one task carry a marker.
pub(crate) fn render_month(
    year: i32,
    month: u32,
    week_start: Weekday,
    index: &CalendarIndex<'_>,
    today: NaiveDate,
) -> String {
    let mut out = format!("{} {}\n", date::month_name(month), year);

    let mut wd = week_start;
    let mut names = Vec::with_capacity(7);
    for _ in 0..7 {
        names.push(format!("{:>3}", date::weekday_short(wd)));
        wd = wd.succ();
    }
    out.push_str(names.join(" ").trim_end());
    out.push('\n');

    for week in date::month_grid(year, month, week_start) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "   ".to_string(),
                Some(d) => {
                    let mark = if index.count_on_date(*d) > 0 { MARKER } else { ' ' };
                    let day = format!("{:>2}", d.day());
                    if *d == today {
                        format!("{BOLD}{day}{RESET}{mark}")
                    } else {
                        format!("{day}{mark}")
                    }
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, day } = cmd {
        let today = date::today();
        let (year, m) = match month {
            Some(raw) => date::parse_month(raw)?,
            None => (today.year(), today.month()),
        };
        let (first, last) = date::month_bounds(year, m)
            .ok_or_else(|| AppError::InvalidDate(format!("{year}-{m:02}")))?;

        let mut pool = open_db(&cfg.database)?;
        let tasks: Vec<TaskInstance> = pool
            .load_tasks_between(first, last)?
            .into_iter()
            .filter(|t| cfg.show_completed || !t.completed)
            .collect();
        let index = CalendarIndex::build(&tasks);

        print!(
            "{}",
            render_month(year, m, cfg.week_start_day(), &index, today)
        );

        let busy = index.dates_in_month(year, m);
        if busy.is_empty() {
            info("No tasks scheduled this month.");
        } else {
            let counts: Vec<String> = busy
                .iter()
                .map(|d| format!("{}({}/{})", d.day(), index.pending_on_date(*d), index.count_on_date(*d)))
                .collect();
            println!("\n{MARKER} pending/total: {}", counts.join(" "));
        }

        if let Some(raw) = day {
            let d = date::parse_date_strict(raw)?;
            // The selected day may lie outside the displayed month.
            let day_tasks: Vec<TaskInstance> = if d >= first && d <= last {
                index.tasks_on_date_sorted(d).into_iter().cloned().collect()
            } else {
                let mut v = pool.load_tasks_between(d, d)?;
                v.retain(|t| cfg.show_completed || !t.completed);
                v
            };

            println!();
            if day_tasks.is_empty() {
                info(format!("No tasks on {}.", d));
            } else {
                let pets = PetLogic::directory(&pool.conn)?;
                let refs: Vec<&TaskInstance> = day_tasks.iter().collect();
                print_day(d, &refs, &pets);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{TaskInput, TaskTemplate};

    #[test]
    fn marks_days_with_tasks() {
        let tpl = TaskTemplate::from_input(TaskInput {
            title: "Brush".into(),
            time_of_day: "18:00".into(),
            category: "grooming".into(),
            priority: "l".into(),
            start_date: "2025-03-03".into(),
            recurrence: "7d".into(),
            ..Default::default()
        })
        .unwrap();
        let tasks: Vec<TaskInstance> = [3, 10]
            .iter()
            .map(|d| tpl.instance_on(NaiveDate::from_ymd_opt(2025, 3, *d).unwrap()))
            .collect();
        let index = CalendarIndex::build(&tasks);

        let far = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let out = render_month(2025, 3, Weekday::Mon, &index, far);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "March 2025");
        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        // March 2025 starts on a Saturday.
        assert_eq!(lines[2], "                     1   2");
        assert!(lines[3].starts_with(" 3•  4 "));
        assert!(lines[4].starts_with("10• 11 "));
        assert_eq!(out.matches(MARKER).count(), 2);
    }

    #[test]
    fn sunday_first_layout() {
        let tasks: Vec<TaskInstance> = Vec::new();
        let index = CalendarIndex::build(&tasks);
        let far = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let out = render_month(2025, 3, Weekday::Sun, &index, far);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], "                         1");
    }
}
