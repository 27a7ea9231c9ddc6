pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LineSink, LineSource};
pub use crate::core::{classifier, engine::DescribeEngine, pipeline::SimplePipeline};
pub use utils::error::{DescribeError, Result};
