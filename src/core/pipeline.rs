use crate::core::classifier;
use crate::core::{ConfigProvider, DescribeResult, Element, Pipeline, Sink, Source};
use crate::utils::error::Result;

pub struct SimplePipeline<S: Source, K: Sink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
}

impl<S: Source, K: Sink, C: ConfigProvider> SimplePipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Source, K: Sink, C: ConfigProvider> Pipeline for SimplePipeline<S, K, C> {
    async fn extract(&self) -> Result<Element> {
        let raw = self.source.read_line().await?;

        if raw.is_empty() {
            // 輸入耗盡時當成空元素處理，後續分類會落到預設描述
            tracing::warn!("No input line available, classifying empty element");
        }

        Ok(Element { raw })
    }

    async fn transform(&self, element: Element) -> Result<DescribeResult> {
        // 先去除前後空白再比對
        let trimmed = element.raw.trim();
        let lookup = classifier::lookup(trimmed);

        tracing::debug!("Classifying element: {:?}", trimmed);

        Ok(DescribeResult {
            element: trimmed.to_string(),
            description: lookup.unwrap_or(classifier::FALLBACK).to_string(),
            matched: lookup.is_some(),
        })
    }

    async fn load(&self, result: DescribeResult) -> Result<String> {
        match self.config.output_path() {
            Some(path) => tracing::debug!("Writing result to file: {}", path),
            None => tracing::debug!("Writing result to stdout"),
        }

        self.sink.write_line(&result.description).await?;

        Ok(result.description)
    }
}
