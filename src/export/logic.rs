use crate::core::pets::PetLogic;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TaskExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export stored task instances.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or any form accepted by [`parse_period`]
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let rows = Self::collect(pool, bounds)?;
        if rows.is_empty() {
            warning("No tasks found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        audit_quiet(
            &pool.conn,
            "export",
            file,
            &format!("{} rows exported as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }

    /// Load tasks within `bounds` (or everything) as flat export rows,
    /// ordered by date then time.
    pub fn collect(
        pool: &mut DbPool,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<TaskExport>> {
        let tasks = match bounds {
            None => pool.load_all_tasks()?,
            Some((start, end)) => pool.load_tasks_between(start, end)?,
        };
        let pets = PetLogic::directory(&pool.conn)?;

        Ok(tasks
            .iter()
            .map(|t| TaskExport::from_instance(t, &pets))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::db::initialize::init_db;
    use crate::models::task::{TaskInput, TaskTemplate};

    fn seeded() -> DbPool {
        let mut pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let tpl = TaskTemplate::from_input(TaskInput {
            title: "Pill".into(),
            time_of_day: "20:00".into(),
            category: "medication".into(),
            priority: "h".into(),
            start_date: "2024-01-30".into(),
            recurrence: "1d".into(),
            ..Default::default()
        })
        .unwrap();
        AddLogic::apply(&mut pool, &tpl).unwrap();
        pool
    }

    #[test]
    fn collect_respects_bounds() {
        let mut pool = seeded();
        let all = ExportLogic::collect(&mut pool, None).unwrap();
        assert_eq!(all.len(), 14);

        let jan = ExportLogic::collect(&mut pool, Some(parse_period("2024-01").unwrap())).unwrap();
        assert_eq!(jan.len(), 2);
        assert_eq!(jan[0].date, "2024-01-30");
        assert_eq!(jan[0].pet, "General");
        assert_eq!(jan[0].recurrence, "1d");
    }

    #[test]
    fn relative_path_is_rejected() {
        let mut pool = seeded();
        let err = ExportLogic::export(&mut pool, ExportFormat::Csv, "out.csv", None, true);
        assert!(matches!(err, Err(AppError::Export(_))));
    }
}
