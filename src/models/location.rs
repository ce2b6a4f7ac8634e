use serde::{Deserialize, Serialize};

/// A named place being monitored. Entries join against `name`, not `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapLocation {
    pub id: u64,
    pub name: String,
}
