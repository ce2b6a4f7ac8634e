//! Aggregations behind the stats view: totals per location, daily totals,
//! and the headline summary numbers.

use crate::models::entry::TrapEntry;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: u64,
    /// Location with the highest total, if any entries exist.
    pub worst: Option<(String, u64)>,
    /// Total divided by the number of distinct days, rounded to nearest.
    pub daily_average: u64,
    pub days: usize,
}

/// Totals per location, highest first (name breaks ties for determinism).
pub fn location_totals(entries: &[TrapEntry]) -> Vec<(String, u64)> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for e in entries {
        *totals.entry(e.trap_id.as_str()).or_default() += u64::from(e.count);
    }

    let mut out: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Totals per day, oldest first.
pub fn daily_totals(entries: &[TrapEntry]) -> Vec<(NaiveDate, u64)> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for e in entries {
        *totals.entry(e.date).or_default() += u64::from(e.count);
    }
    totals.into_iter().collect()
}

pub fn summarize(entries: &[TrapEntry]) -> StatsSummary {
    let by_location = location_totals(entries);
    let by_day = daily_totals(entries);

    let total: u64 = entries.iter().map(|e| u64::from(e.count)).sum();
    let days = by_day.len();
    let daily_average = if days > 0 {
        ((total as f64) / (days as f64)).round() as u64
    } else {
        0
    };

    StatsSummary {
        total,
        worst: by_location.first().cloned(),
        daily_average,
        days,
    }
}
