use crate::errors::AppResult;
use crate::export::{TaskExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(tasks: &[TaskExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(tasks)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, tasks.len());
    Ok(())
}

/// Export CSV; the header row comes from the serde field names.
pub(crate) fn export_csv(tasks: &[TaskExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in tasks {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path, tasks.len());
    Ok(())
}
