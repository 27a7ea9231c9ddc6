use crate::domain::model::{DescribeResult, Element};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Source: Send + Sync {
    fn read_line(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Element>;
    async fn transform(&self, element: Element) -> Result<DescribeResult>;
    async fn load(&self, result: DescribeResult) -> Result<String>;
}
