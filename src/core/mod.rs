pub mod backup;
pub mod filter;
pub mod stats;
