use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::remind::{NoopNotifier, RemindLogic};
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind { id } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let task = RemindLogic::apply(&mut pool, &NoopNotifier, *id)?;

        info(format!(
            "Reminder for task #{} '{}' ({} {}) recorded.",
            task.id,
            task.title,
            task.date,
            task.time_str()
        ));
        audit_quiet(
            &pool.conn,
            "remind",
            &format!("#{}", task.id),
            &format!("{} at {} {}", task.title, task.date, task.time_str()),
        );
    }
    Ok(())
}
