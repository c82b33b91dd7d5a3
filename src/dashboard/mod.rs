//! Dashboard aggregation: per-day average composite scores.

pub mod aggregator;

pub use aggregator::{aggregate_daily, resolve_range};
