use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::pet::PetRef;
use crate::models::priority::Priority;
use crate::models::recurrence::RecurrenceRule;
use crate::models::task::TaskInstance;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TASK_COLUMNS: &str = "id, title, description, time, category, pet_id, priority, date, recurrence, completed, created_at, updated_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TaskInstance> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let time_of_day = NaiveTime::parse_from_str(&time_str, "%H:%M")
        .map_err(|_| conversion_error(AppError::InvalidTime(time_str.clone())))?;

    let prio_str: String = row.get("priority")?;
    let priority = Priority::from_db_str(&prio_str)
        .ok_or_else(|| conversion_error(AppError::InvalidPriority(prio_str.clone())))?;

    let rule_str: String = row.get("recurrence")?;
    let recurrence = RecurrenceRule::from_db_str(&rule_str)
        .ok_or_else(|| conversion_error(AppError::InvalidRule(rule_str.clone())))?;

    let cat_str: String = row.get("category")?;
    let category = Category::new(&cat_str).map_err(conversion_error)?;

    Ok(TaskInstance {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        time_of_day,
        category,
        pet: row.get::<_, Option<i64>>("pet_id")?.map(PetRef),
        priority,
        date,
        recurrence,
        completed: row.get::<_, i32>("completed")? == 1,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn collect_tasks(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> AppResult<Vec<TaskInstance>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert one instance; returns the stored row with its id and timestamps.
pub fn insert_task(conn: &Connection, t: &TaskInstance) -> AppResult<TaskInstance> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO tasks (title, description, time, category, pet_id, priority, date, recurrence, completed, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            t.title,
            t.description,
            t.time_str(),
            t.category.as_str(),
            t.pet.map(|p| p.0),
            t.priority.to_db_str(),
            t.date_str(),
            t.recurrence.to_db_str(),
            if t.completed { 1 } else { 0 },
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    load_task(conn, id)?.ok_or(AppError::TaskNotFound(id))
}

pub fn load_task(conn: &Connection, id: i64) -> AppResult<Option<TaskInstance>> {
    let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
    let task = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(task)
}

pub fn load_all_tasks(conn: &Connection) -> AppResult<Vec<TaskInstance>> {
    let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY date ASC, time ASC, id ASC");
    collect_tasks(conn, &sql, [])
}

pub fn load_tasks_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<TaskInstance>> {
    let sql = format!(
        "SELECT {TASK_COLUMNS} FROM tasks
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, time ASC, id ASC"
    );
    collect_tasks(
        conn,
        &sql,
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
    )
}

/// Flip the completion flag of one row. Returns false when the id is unknown.
pub fn set_completed(conn: &Connection, id: i64, completed: bool) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE tasks SET completed = ?1, updated_at = ?2 WHERE id = ?3",
        params![if completed { 1 } else { 0 }, Local::now().to_rfc3339(), id],
    )?;
    Ok(changed == 1)
}

pub fn delete_task(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(changed == 1)
}

pub fn delete_tasks_on_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let changed = conn.execute(
        "DELETE FROM tasks WHERE date = ?1",
        [date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(changed)
}

pub fn count_tasks_for_pet(conn: &Connection, pet: PetRef) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE pet_id = ?1",
        [pet.0],
        |row| row.get(0),
    )?;
    Ok(n)
}
