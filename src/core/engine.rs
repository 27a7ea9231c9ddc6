use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct DescribeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DescribeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    // stdout 只保留分類結果本身，進度訊息一律走 stderr 日誌
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting describe process...");

        // Extract
        tracing::debug!("Reading input line...");
        let element = self.pipeline.extract().await?;
        tracing::debug!("Read {} bytes", element.raw.len());

        // Transform
        let result = self.pipeline.transform(element).await?;
        if result.matched {
            tracing::debug!("Element matched a known technique");
        } else {
            tracing::debug!("No match, falling back to default description");
        }

        // Load
        let description = self.pipeline.load(result).await?;
        tracing::info!("Describe process completed");

        Ok(description)
    }
}
