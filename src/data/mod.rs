//! Data module - Plot coordinates and labels

pub mod scalability;
mod series;

pub use series::{ChartMetadata, Series};
