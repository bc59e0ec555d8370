pub mod fetcher;
pub mod report;
pub mod request;
pub mod runner;

pub use crate::domain::model::{MetricsResponse, TargetMetrics};
pub use crate::domain::ports::MetricsSource;
pub use crate::utils::error::Result;
