use crate::cli::commands::list::print_day;
use crate::config::Config;
use crate::core::calendar::CalendarIndex;
use crate::core::pets::PetLogic;
use crate::db::initialize::open_db;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::plural;

/// Today's agenda followed by a completion summary.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let today = date::today();
    let mut pool = open_db(&cfg.database)?;
    let tasks = pool.load_tasks_between(today, today)?;

    if tasks.is_empty() {
        info(format!("Nothing scheduled for today ({}).", today));
        return Ok(());
    }

    let index = CalendarIndex::build(&tasks);
    let pets = PetLogic::directory(&pool.conn)?;
    let day: Vec<_> = index
        .tasks_on_date_sorted(today)
        .into_iter()
        .filter(|t| cfg.show_completed || !t.completed)
        .collect();
    // With completed tasks hidden, a finished day has nothing left to list.
    if !day.is_empty() {
        print_day(today, &day, &pets);
        println!();
    }

    let total = index.count_on_date(today);
    let pending = index.pending_on_date(today);
    if pending == 0 {
        success(format!("All {} done for today.", plural(total, "task")));
    } else {
        info(format!("{} of {} tasks done, {} pending.", total - pending, total, pending));
    }
    Ok(())
}
