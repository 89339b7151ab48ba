use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::complete::CompleteLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, undo } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let task = CompleteLogic::apply(&mut pool, *id, !*undo)?;

        let (op, verb) = if *undo {
            ("undo", "reopened")
        } else {
            ("done", "completed")
        };
        success(format!(
            "Task #{} '{}' on {} {}.",
            task.id, task.title, task.date, verb
        ));
        audit_quiet(
            &pool.conn,
            op,
            &format!("#{}", task.id),
            &format!("{} on {} {}", task.title, task.date, verb),
        );
    }
    Ok(())
}
