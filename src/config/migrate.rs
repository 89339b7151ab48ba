//! Configuration file upgrades: add keys introduced by newer releases.

use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current config file carries, with the value used to fill them.
fn expected_keys() -> Vec<(&'static str, Value)> {
    let d = Config::default();
    vec![
        ("database", Value::String(d.database)),
        ("default_priority", Value::String(d.default_priority)),
        ("default_time", Value::String(d.default_time)),
        ("default_category", Value::String(d.default_category)),
        ("week_start", Value::String(d.week_start)),
        ("show_completed", Value::Bool(d.show_completed)),
        ("separator_char", Value::String(d.separator_char)),
    ]
}

/// Names of expected keys missing from the YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let empty = Mapping::new();
    let map = yaml.as_mapping().unwrap_or(&empty);

    Ok(expected_keys()
        .into_iter()
        .map(|(k, _)| k)
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Fill missing keys in `content`, keeping every existing value.
/// Returns the new document and the keys that were added.
pub fn fill_missing_keys(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let mut yaml: Value = serde_yaml::from_str(content)?;
    if !yaml.is_mapping() {
        yaml = Value::Mapping(Mapping::new());
    }

    let mut added = Vec::new();
    if let Some(map) = yaml.as_mapping_mut() {
        for (key, default) in expected_keys() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) {
                map.insert(k, default);
                added.push(key);
            }
        }
    }

    Ok((serde_yaml::to_string(&yaml)?, added))
}

/// Upgrade the config file at `path` in place. No-op when nothing is missing
/// or the file does not exist.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let (updated, added) = fill_missing_keys(&content)?;

    if added.is_empty() {
        info("Configuration is already up to date.");
    } else {
        fs::write(path, updated)?;
        success(format!("Configuration updated, added: {}", added.join(", ")));
    }
    Ok(added)
}
