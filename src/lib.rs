#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    fetcher::{AhrefsClient, FetchOptions},
    runner::MetricsRunner,
};
pub use utils::error::{MetricsError, Result};
