pub mod classifier;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{DescribeResult, Element};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink, Source};
pub use crate::utils::error::Result;
