use crate::cli::parser::{CategoryAction, Commands};
use crate::config::Config;
use crate::core::categories::CategoryLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Category { action } = cmd else {
        return Ok(());
    };
    let pool = open_db(&cfg.database)?;

    match action {
        CategoryAction::Add { name } => {
            let (cat, created) = CategoryLogic::add(&pool.conn, name)?;
            if created {
                success(format!("Category '{}' added.", cat));
                audit_quiet(&pool.conn, "category_add", cat.as_str(), "Custom category added");
            } else {
                info(format!("Category '{}' already exists.", cat));
            }
        }
        CategoryAction::List => {
            let registry = CategoryLogic::registry(&pool.conn)?;
            for cat in registry.iter() {
                let kind = if cat.is_builtin() { "built-in" } else { "custom" };
                println!("{} {:<14} {}", cat.icon(), cat.as_str(), kind);
            }
        }
    }
    Ok(())
}
