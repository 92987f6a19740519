pub mod fetcher;
pub mod report;

pub use crate::domain::model::{BuoyCategory, CategoryResult, Endpoint, FetchReport};
pub use crate::domain::ports::{ConfigProvider, JsonSource};
pub use crate::utils::error::Result;
