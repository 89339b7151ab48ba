use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let (total, done): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    let pets: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))?;
    let orphans: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM tasks
         WHERE pet_id IS NOT NULL AND pet_id NOT IN (SELECT id FROM pets)",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Tasks:{} {}{}{} ({} completed, {} pending)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        done,
        total - done
    );
    println!("{}• Pets:{} {}", CYAN, RESET, pets);
    if orphans > 0 {
        println!(
            "{}• Orphaned tasks:{} {}{}{}",
            CYAN, RESET, YELLOW, orphans, RESET
        );
    }

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) =
        pool.conn
            .query_row("SELECT MIN(date), MAX(date) FROM tasks", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
