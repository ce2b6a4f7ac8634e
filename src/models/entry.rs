use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded observation: pests found in a trap location on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapEntry {
    pub id: u64,
    pub date: NaiveDate, // ⇔ kv "entries" (TEXT "YYYY-MM-DD")
    #[serde(rename = "trapId")]
    pub trap_id: String, // location *name* at creation time, never cascaded
    pub count: u32,
}

/// Entry data before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub trap_id: String,
    pub count: u32,
}
