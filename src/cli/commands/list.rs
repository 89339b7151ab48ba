use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarIndex;
use crate::core::pets::PetLogic;
use crate::db::initialize::open_db;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::pet::{PetDirectory, PetRef};
use crate::models::task::TaskInstance;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{TASK_HEADERS, plural, task_row};
use crate::utils::table::Table;

/// Filters applied after loading, shared by `list`, `calendar` and `today`.
#[derive(Debug, Default)]
pub(crate) struct TaskFilter {
    pub pet: Option<PetRef>,
    pub category: Option<Category>,
    pub pending_only: bool,
}

impl TaskFilter {
    pub fn matches(&self, t: &TaskInstance) -> bool {
        if let Some(p) = self.pet
            && t.pet != Some(p)
        {
            return false;
        }
        if let Some(c) = &self.category
            && &t.category != c
        {
            return false;
        }
        !(self.pending_only && t.completed)
    }
}

/// Print the tasks of one day as a table under a day header.
pub(crate) fn print_day(day: chrono::NaiveDate, tasks: &[&TaskInstance], pets: &PetDirectory) {
    header(format!(
        "{} {} ({})",
        date::weekday_short(chrono::Datelike::weekday(&day)),
        day,
        plural(tasks.len(), "task")
    ));
    let mut table = Table::with_headers(&TASK_HEADERS);
    for t in tasks {
        table.add_row(task_row(t, pets));
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        date: day,
        pet,
        category,
        pending,
    } = cmd
    {
        let bounds = match day {
            Some(d) => {
                let d = date::parse_date_strict(d)?;
                Some((d, d))
            }
            None => date::resolve_period(period.as_deref(), date::today())?,
        };

        let filter = TaskFilter {
            pet: pet.map(PetRef),
            category: category.as_deref().map(Category::new).transpose()?,
            pending_only: *pending || !cfg.show_completed,
        };

        let mut pool = open_db(&cfg.database)?;
        let loaded = match bounds {
            Some((start, end)) => pool.load_tasks_between(start, end)?,
            None => pool.load_all_tasks()?,
        };
        let tasks: Vec<TaskInstance> = loaded.into_iter().filter(|t| filter.matches(t)).collect();

        if tasks.is_empty() {
            info("No tasks found for the selected period.");
            return Ok(());
        }

        let pets = PetLogic::directory(&pool.conn)?;
        let index = CalendarIndex::build(&tasks);
        let days = index.dates_with_tasks();
        let sep = cfg.separator_char.repeat(40);

        for (i, d) in days.iter().enumerate() {
            if i > 0 {
                println!("{sep}");
            }
            print_day(*d, &index.tasks_on_date_sorted(*d), &pets);
        }

        let done = tasks.iter().filter(|t| t.completed).count();
        println!();
        info(format!(
            "{} on {}, {} completed",
            plural(tasks.len(), "task"),
            plural(days.len(), "day"),
            done
        ));
    }
    Ok(())
}
