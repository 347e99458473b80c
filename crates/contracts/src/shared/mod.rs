pub mod date;
pub mod envelope;
pub mod format;
pub mod pagination;
pub mod query;
