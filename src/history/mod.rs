//! Match history: records, JSON persistence and win statistics

pub mod record;
pub mod stats;
pub mod store;

pub use record::{cell_key, parse_cell_key, MatchRecord};
pub use stats::Stats;
pub use store::MatchHistory;
