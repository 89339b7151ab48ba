//! Closed table of recurrence rules and their expansion parameters.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Unit in which a rule advances between instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepUnit {
    Day,
    Month,
}

/// Step and horizon for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionParams {
    pub unit: StepUnit,
    pub step: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecurrenceRule {
    None,
    EveryDay,
    Every3Days,
    Every5Days,
    Every7Days,
    Every2Weeks,
    EveryMonth,
    Every3Months,
    Every6Months,
    Every12Months,
}

impl RecurrenceRule {
    pub const ALL: [RecurrenceRule; 10] = [
        RecurrenceRule::None,
        RecurrenceRule::EveryDay,
        RecurrenceRule::Every3Days,
        RecurrenceRule::Every5Days,
        RecurrenceRule::Every7Days,
        RecurrenceRule::Every2Weeks,
        RecurrenceRule::EveryMonth,
        RecurrenceRule::Every3Months,
        RecurrenceRule::Every6Months,
        RecurrenceRule::Every12Months,
    ];

    /// Expansion parameters, or `None` for a one-off task.
    pub fn params(&self) -> Option<ExpansionParams> {
        let (unit, step, count) = match self {
            RecurrenceRule::None => return None,
            RecurrenceRule::EveryDay => (StepUnit::Day, 1, 14),
            RecurrenceRule::Every3Days => (StepUnit::Day, 3, 6),
            RecurrenceRule::Every5Days => (StepUnit::Day, 5, 6),
            RecurrenceRule::Every7Days => (StepUnit::Day, 7, 8),
            RecurrenceRule::Every2Weeks => (StepUnit::Day, 14, 6),
            RecurrenceRule::EveryMonth => (StepUnit::Month, 1, 12),
            RecurrenceRule::Every3Months => (StepUnit::Month, 3, 4),
            RecurrenceRule::Every6Months => (StepUnit::Month, 6, 2),
            RecurrenceRule::Every12Months => (StepUnit::Month, 12, 2),
        };
        Some(ExpansionParams { unit, step, count })
    }

    /// Number of instances a template with this rule expands into.
    pub fn instance_count(&self) -> u32 {
        self.params().map(|p| p.count).unwrap_or(1)
    }

    /// Canonical key, as stored in the `tasks.recurrence` column.
    pub fn key(&self) -> &'static str {
        match self {
            RecurrenceRule::None => "none",
            RecurrenceRule::EveryDay => "1d",
            RecurrenceRule::Every3Days => "3d",
            RecurrenceRule::Every5Days => "5d",
            RecurrenceRule::Every7Days => "7d",
            RecurrenceRule::Every2Weeks => "2w",
            RecurrenceRule::EveryMonth => "1m",
            RecurrenceRule::Every3Months => "3m",
            RecurrenceRule::Every6Months => "6m",
            RecurrenceRule::Every12Months => "12m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecurrenceRule::None => "none",
            RecurrenceRule::EveryDay => "every 1 day",
            RecurrenceRule::Every3Days => "every 3 days",
            RecurrenceRule::Every5Days => "every 5 days",
            RecurrenceRule::Every7Days => "every 7 days",
            RecurrenceRule::Every2Weeks => "every 2 weeks",
            RecurrenceRule::EveryMonth => "every 1 month",
            RecurrenceRule::Every3Months => "every 3 months",
            RecurrenceRule::Every6Months => "every 6 months",
            RecurrenceRule::Every12Months => "every 12 months",
        }
    }

    /// Parse a rule key.
    ///
    /// Accepts the canonical short keys (`7d`, `2w`, `3m`, ...), the long
    /// form (`every 7 days`, `every-2-weeks`, `1 month`) and the implicit-one
    /// forms (`every day`, `every week`, `every month`, `every year`),
    /// case-insensitive.
    pub fn from_key(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase().replace(['-', '_'], " ");
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let normalized = match words.as_slice() {
            ["every", rest @ ..] => rest.join(" "),
            all => all.join(" "),
        };

        let rule = match normalized.as_str() {
            "none" => RecurrenceRule::None,
            "1d" | "1 day" | "day" | "daily" => RecurrenceRule::EveryDay,
            "3d" | "3 days" => RecurrenceRule::Every3Days,
            "5d" | "5 days" => RecurrenceRule::Every5Days,
            "7d" | "7 days" | "1 week" | "week" | "weekly" => RecurrenceRule::Every7Days,
            "2w" | "2 weeks" => RecurrenceRule::Every2Weeks,
            "1m" | "1 month" | "month" | "monthly" => RecurrenceRule::EveryMonth,
            "3m" | "3 months" => RecurrenceRule::Every3Months,
            "6m" | "6 months" => RecurrenceRule::Every6Months,
            "12m" | "12 months" | "1 year" | "year" | "yearly" => RecurrenceRule::Every12Months,
            _ => return None,
        };
        Some(rule)
    }

    /// Like [`RecurrenceRule::from_key`], failing with `InvalidRule`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Self::from_key(raw).ok_or_else(|| AppError::InvalidRule(raw.to_string()))
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.key()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::from_key(s)
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceRule::None)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
