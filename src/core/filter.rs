//! Entry filtering and ordering shared by list, stats, and export.

use crate::models::entry::TrapEntry;
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortField {
    Date,
    Location,
    Count,
}

/// Inclusive filters matching the original table's controls.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn matches(&self, e: &TrapEntry) -> bool {
        if let Some(loc) = &self.location
            && e.trap_id != *loc
        {
            return false;
        }
        if let Some(from) = self.from
            && e.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && e.date > to
        {
            return false;
        }
        true
    }

    pub fn apply(&self, entries: &[TrapEntry]) -> Vec<TrapEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Stable sort, so entries that compare equal keep their newest-first order.
pub fn sort_entries(entries: &mut [TrapEntry], field: SortField, ascending: bool) {
    entries.sort_by(|a, b| {
        let ord = match field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Location => a.trap_id.cmp(&b.trap_id),
            SortField::Count => a.count.cmp(&b.count),
        };
        if ascending { ord } else { ord.reverse() }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, date: &str, trap: &str, count: u32) -> TrapEntry {
        TrapEntry {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            trap_id: trap.to_string(),
            count,
        }
    }

    fn sample() -> Vec<TrapEntry> {
        vec![
            entry(3, "2024-03-01", "Garage", 1),
            entry(2, "2024-02-01", "Kitchen", 5),
            entry(1, "2024-01-01", "Kitchen", 2),
        ]
    }

    #[test]
    fn filters_by_location_and_date_range() {
        let f = EntryFilter {
            location: Some("Kitchen".to_string()),
            from: NaiveDate::from_ymd_opt(2024, 1, 15),
            to: None,
        };
        let out = f.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let f = EntryFilter {
            location: None,
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 2, 1),
        };
        let out = f.apply(&sample());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let out = EntryFilter::default().apply(&sample());
        let ids: Vec<u64> = out.iter().map(|e| e.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn sorts_by_count_descending_by_default_direction() {
        let mut out = sample();
        sort_entries(&mut out, SortField::Count, false);
        let counts: Vec<u32> = out.iter().map(|e| e.count).collect();
        assert_eq!(counts, [5, 2, 1]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut out = sample();
        sort_entries(&mut out, SortField::Location, true);
        // the two Kitchen rows keep their relative (newest-first) order
        let ids: Vec<u64> = out.iter().map(|e| e.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }
}
