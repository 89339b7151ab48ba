use crate::ui::prompt::confirm;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date: day, yes } = cmd {
        let mut pool = open_db(&cfg.database)?;

        match (id, day) {
            (Some(id), _) => {
                let task = pool.load_task(*id)?.ok_or(AppError::TaskNotFound(*id))?;
                let prompt = format!(
                    "Delete task #{} '{}' on {}? This action is irreversible.",
                    task.id, task.title, task.date
                );
                if !*yes && !confirm(&prompt)? {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let removed = DeleteLogic::delete_one(&mut pool, *id)?;
                success(format!("Task #{} has been deleted.", removed.id));
                audit_quiet(
                    &pool.conn,
                    "del",
                    &format!("#{}", removed.id),
                    &format!("{} on {}", removed.title, removed.date),
                );
            }
            (None, Some(raw)) => {
                let d = date::parse_date_strict(raw)?;
                let prompt = format!("Delete ALL tasks on {}? This action is irreversible.", d);
                if !*yes && !confirm(&prompt)? {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let n = DeleteLogic::delete_day(&mut pool, d)?;
                success(format!("{} task(s) on {} have been deleted.", n, d));
                audit_quiet(
                    &pool.conn,
                    "del",
                    &d.to_string(),
                    &format!("{} tasks deleted", n),
                );
            }
            (None, None) => {
                return Err(AppError::Other("either a task id or --date is required".into()));
            }
        }
    }
    Ok(())
}
