//! Classification and aggregation pipeline.

pub mod aggregator;
pub mod classifier;
pub mod report;
pub mod subject;
pub mod week;
