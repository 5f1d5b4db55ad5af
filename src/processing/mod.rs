pub mod changes;
pub mod snapshot;
pub mod statistics;
