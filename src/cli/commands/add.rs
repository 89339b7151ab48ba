use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::categories::CategoryLogic;
use crate::core::pets::PetLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::models::task::{TaskInput, TaskTemplate};
use crate::ui::messages::{batch, error, info};
use crate::utils::date;

/// Schedule a task and persist every expanded instance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        date: start,
        time,
        category,
        pet,
        priority,
        recur,
        description,
        new_category,
    } = cmd
    {
        //
        // 1. Fill blanks from config; "today" is only resolved here.
        //
        let input = TaskInput {
            title: title.clone(),
            description: description.clone(),
            time_of_day: time.clone().unwrap_or_else(|| cfg.default_time.clone()),
            category: category
                .clone()
                .unwrap_or_else(|| cfg.default_category.clone()),
            pet: *pet,
            priority: priority
                .clone()
                .unwrap_or_else(|| cfg.default_priority.clone()),
            start_date: start
                .clone()
                .unwrap_or_else(|| date::today().format("%Y-%m-%d").to_string()),
            recurrence: recur.clone(),
        };

        //
        // 2. Validate everything before touching the database
        //
        let template = TaskTemplate::from_input(input)?;

        let mut pool = open_db(&cfg.database)?;

        if let Some(id) = pet {
            PetLogic::ensure_exists(&pool.conn, *id)?;
        }
        CategoryLogic::resolve(&pool.conn, template.category.as_str(), *new_category)?;

        //
        // 3. Expand and store
        //
        let outcome = AddLogic::apply(&mut pool, &template)?;

        batch(outcome.created.len(), outcome.total, "instances");
        if !outcome.is_complete() {
            for (d, e) in &outcome.failed {
                error(format!("{}: {}", d, e));
            }
        }
        if let (Some(first), Some(last)) = (outcome.created.first(), outcome.created.last()) {
            info(format!(
                "'{}' ({}) scheduled from {} to {} at {}",
                template.title,
                template.recurrence.label(),
                first.date,
                last.date,
                first.time_str()
            ));
        }

        audit_quiet(&pool.conn, "add", &template.title, &outcome.summary());
    }

    Ok(())
}
