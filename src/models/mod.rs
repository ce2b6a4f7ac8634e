pub mod entry;
pub mod location;
