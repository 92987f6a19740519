pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::HttpSource;
pub use config::{EndpointRegistry, FetchConfig};
pub use crate::core::{fetcher::BuoyFetcher, BuoyCategory, CategoryResult, Endpoint, FetchReport};
pub use utils::error::{BuoyError, FailureKind, FetchError, Result};
